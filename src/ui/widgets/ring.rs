//! Circular calorie progress ring.
//!
//! The ring is drawn on a braille canvas in ring units (radius 90, origin at
//! the centre). The filled arc starts at twelve o'clock and runs clockwise;
//! its length is the circumference minus the meter's dash offset.

use crate::calories::CalorieMeter;
use crate::constants::RING_RADIUS;
use crate::theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block,
    },
    Frame,
};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Segments used for a full turn of the ring.
const SEGMENTS: usize = 120;

/// Points along the filled part of the ring.
///
/// The arc covers `(circumference - offset) / circumference` of a full turn,
/// so it is empty when the offset equals the circumference and closed when
/// the offset is zero.
pub fn arc_points(meter: &CalorieMeter, radius: f64) -> Vec<(f64, f64)> {
    let drawn = if meter.circumference > 0.0 {
        ((meter.circumference - meter.offset) / meter.circumference).clamp(0.0, 1.0)
    } else {
        0.0
    };
    if drawn <= 0.0 {
        return Vec::new();
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let steps = ((SEGMENTS as f64) * drawn).ceil().max(1.0) as usize;
    #[allow(clippy::cast_precision_loss)]
    (0..=steps)
        .map(|i| {
            let angle = FRAC_PI_2 - TAU * drawn * (i as f64 / steps as f64);
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// Render the ring with the total in the middle.
pub fn render(frame: &mut Frame, meter: CalorieMeter, area: Rect) {
    let arc_color = if meter.over_target() {
        theme::OVERFLOW
    } else {
        theme::SUCCESS
    };
    let points = arc_points(&meter, RING_RADIUS);
    let bound = RING_RADIUS + 10.0;

    let canvas = Canvas::default()
        .block(Block::default())
        .marker(Marker::Braille)
        .x_bounds([-bound, bound])
        .y_bounds([-bound, bound])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius: RING_RADIUS,
                color: theme::BORDER_DEFAULT,
            });
            ctx.layer();

            for pair in points.windows(2) {
                ctx.draw(&CanvasLine {
                    x1: pair[0].0,
                    y1: pair[0].1,
                    x2: pair[1].0,
                    y2: pair[1].1,
                    color: arc_color,
                });
            }

            ctx.print(
                -30.0,
                10.0,
                Line::from(Span::styled(
                    crate::utils::format_kcal(meter.total),
                    Style::default()
                        .fg(theme::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                )),
            );
            ctx.print(
                -30.0,
                -15.0,
                Line::from(Span::styled(
                    format!("{}% of goal", meter.percent()),
                    Style::default().fg(theme::TEXT_SECONDARY),
                )),
            );
        });

    frame.render_widget(canvas, area);
}
