//! Calorie budget calculator.
//!
//! Tracks which dishes are ticked, the calorie target set on the slider, and
//! derives the total and the progress ring geometry from them.
//!
//! The selection is keyed by kcal value, not by dish: two dishes with the
//! same kcal share one slot, so unticking either removes the value.

use crate::catalog::Catalog;
use crate::constants::{RING_RADIUS, TARGET_MAX, TARGET_MIN, TARGET_STEP};
use crate::error::{AppError, Result};
use std::collections::BTreeSet;
use std::f64::consts::PI;

/// A checkbox in the calorie planner list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalorieOption {
    pub label: String,
    /// Kcal value attached to the checkbox, as text.
    pub value: String,
    pub checked: bool,
}

/// Snapshot of the ring after a recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalorieMeter {
    /// Exact sum of the selected values; may exceed the target.
    pub total: u64,
    pub target: u32,
    /// Fraction of the ring filled, clamped to `0.0..=1.0`.
    pub filled: f64,
    /// Full ring circumference.
    pub circumference: f64,
    /// Dash offset: circumference left unfilled.
    pub offset: f64,
}

impl CalorieMeter {
    /// Computes ring geometry for a total against a target.
    ///
    /// A zero target is treated as 1 so the ratio is always defined.
    pub fn new(total: u64, target: u32) -> Self {
        let circumference = 2.0 * PI * RING_RADIUS;
        let target_guarded = target.max(1);
        let capped = u32::try_from(total).map_or(target_guarded, |t| t.min(target_guarded));
        let filled = f64::from(capped) / f64::from(target_guarded);
        Self {
            total,
            target,
            filled,
            circumference,
            offset: circumference * (1.0 - filled),
        }
    }

    /// Fill as a whole percentage for labels.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u16 {
        (self.filled * 100.0).round() as u16
    }

    pub fn over_target(&self) -> bool {
        self.total > u64::from(self.target)
    }
}

/// Parses a kcal value attached to a checkbox.
///
/// # Errors
///
/// Returns [`AppError::InvalidKcal`] unless the text is a positive integer.
pub fn parse_kcal(value: &str) -> Result<u32> {
    match value.trim().parse::<u32>() {
        Ok(kcal) if kcal > 0 => Ok(kcal),
        _ => Err(AppError::InvalidKcal(value.to_string())),
    }
}

/// Clamps a requested target into the slider's range.
pub fn clamp_target(target: u32) -> u32 {
    target.clamp(TARGET_MIN.max(1), TARGET_MAX)
}

/// Calorie planner state.
#[derive(Clone, Debug)]
pub struct CalorieCalculator {
    options: Vec<CalorieOption>,
    selected: BTreeSet<u32>,
    target: u32,
}

impl CalorieCalculator {
    pub fn new(target: u32) -> Self {
        Self {
            options: Vec::new(),
            selected: BTreeSet::new(),
            target: clamp_target(target),
        }
    }

    /// Creates one checkbox per catalog dish. Independent of menu filters.
    pub fn build_options(&mut self, catalog: &Catalog) {
        self.options = catalog
            .items()
            .iter()
            .map(|item| CalorieOption {
                label: format!("{} ({} kcal)", item.name, item.kcal),
                value: item.kcal.to_string(),
                checked: false,
            })
            .collect();
    }

    pub fn options(&self) -> &[CalorieOption] {
        &self.options
    }

    pub fn selected(&self) -> &BTreeSet<u32> {
        &self.selected
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    /// Checkbox change: adds or removes a kcal value.
    pub fn on_toggle(&mut self, kcal: u32, checked: bool) {
        if checked {
            self.selected.insert(kcal);
        } else {
            self.selected.remove(&kcal);
        }
    }

    /// Flips a checkbox and applies its value to the selection.
    ///
    /// Returns the new checked state.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidKcal`] if the checkbox value is not a
    /// positive integer; the checkbox is left unchanged.
    pub fn toggle_option(&mut self, index: usize) -> Result<Option<bool>> {
        let Some(option) = self.options.get_mut(index) else {
            return Ok(None);
        };
        let kcal = parse_kcal(&option.value)?;
        option.checked = !option.checked;
        let checked = option.checked;
        self.on_toggle(kcal, checked);
        Ok(Some(checked))
    }

    /// Slider input: replaces the target, clamped into range.
    ///
    /// Returns the value actually applied.
    pub fn on_target_change(&mut self, target: u32) -> u32 {
        self.target = clamp_target(target);
        self.target
    }

    /// Moves the slider one step up or down.
    pub fn step_target(&mut self, up: bool) -> u32 {
        let next = if up {
            self.target.saturating_add(TARGET_STEP)
        } else {
            self.target.saturating_sub(TARGET_STEP)
        };
        self.on_target_change(next)
    }

    /// Sum of the selected values, widened so large catalog values can't overflow.
    pub fn total(&self) -> u64 {
        self.selected.iter().copied().map(u64::from).sum()
    }

    pub fn recompute(&self) -> CalorieMeter {
        CalorieMeter::new(self.total(), self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, MenuItem};

    const EPS: f64 = 1e-9;

    fn calculator() -> CalorieCalculator {
        let mut calc = CalorieCalculator::new(2000);
        calc.build_options(&Catalog::sample());
        calc
    }

    #[test]
    fn test_build_options_one_per_item() {
        let calc = calculator();
        assert_eq!(calc.options().len(), 6);
        assert_eq!(calc.options()[0].label, "Avocado Toast (250 kcal)");
        assert_eq!(calc.options()[0].value, "250");
        assert!(calc.options().iter().all(|o| !o.checked));
        assert!(calc.selected().is_empty());
    }

    #[test]
    fn test_toggle_on_then_off_restores_selection() {
        let mut calc = calculator();
        calc.on_toggle(340, true);
        let before = calc.selected().clone();

        assert_eq!(calc.toggle_option(0).unwrap(), Some(true));
        assert!(calc.selected().contains(&250));
        assert_eq!(calc.toggle_option(0).unwrap(), Some(false));

        assert_eq!(calc.selected(), &before);
        assert!(!calc.options()[0].checked);
    }

    #[test]
    fn test_out_of_range_option_is_ignored() {
        let mut calc = calculator();
        assert_eq!(calc.toggle_option(99).unwrap(), None);
    }

    #[test]
    fn test_over_target_clamps_fill() {
        let mut calc = calculator();
        calc.on_target_change(400);
        calc.on_toggle(250, true);
        calc.on_toggle(180, true);

        let meter = calc.recompute();
        assert_eq!(meter.total, 430);
        assert!((meter.filled - 1.0).abs() < EPS);
        assert!(meter.offset.abs() < EPS);
        assert!(meter.over_target());
        assert_eq!(meter.percent(), 100);
    }

    #[test]
    fn test_empty_selection_is_empty_ring() {
        for target in [100, 400, 2000, 3000] {
            let mut calc = calculator();
            calc.on_target_change(target);
            let meter = calc.recompute();
            assert_eq!(meter.total, 0);
            assert!(meter.filled.abs() < EPS);
            assert!((meter.offset - 2.0 * PI * 90.0).abs() < EPS);
        }
    }

    #[test]
    fn test_partial_fill_is_proportional() {
        let meter = CalorieMeter::new(500, 2000);
        assert!((meter.filled - 0.25).abs() < EPS);
        assert!((meter.offset - meter.circumference * 0.75).abs() < EPS);
        assert_eq!(meter.percent(), 25);
    }

    #[test]
    fn test_zero_target_is_guarded() {
        let meter = CalorieMeter::new(0, 0);
        assert!(meter.filled.is_finite());
        assert!(meter.offset.is_finite());
        let meter = CalorieMeter::new(10, 0);
        assert!((meter.filled - 1.0).abs() < EPS);
    }

    #[test]
    fn test_target_is_clamped_to_slider_range() {
        let mut calc = calculator();
        assert_eq!(calc.on_target_change(0), TARGET_MIN);
        assert_eq!(calc.on_target_change(10_000), TARGET_MAX);
        assert_eq!(calc.on_target_change(1234), 1234);
        assert_eq!(CalorieCalculator::new(0).target(), TARGET_MIN);
    }

    #[test]
    fn test_step_target_stops_at_bounds() {
        let mut calc = calculator();
        calc.on_target_change(TARGET_MAX - 10);
        assert_eq!(calc.step_target(true), TARGET_MAX);
        calc.on_target_change(TARGET_MIN);
        assert_eq!(calc.step_target(false), TARGET_MIN);
        assert_eq!(calc.step_target(true), TARGET_MIN + TARGET_STEP);
    }

    #[test]
    fn test_duplicate_kcal_values_share_one_slot() {
        let dish = |id, name: &str| MenuItem {
            id,
            name: name.to_string(),
            desc: String::new(),
            kcal: 200,
            category: Category::Snack,
        };
        let catalog = Catalog::from_items(vec![dish(1, "Apple"), dish(2, "Pear")]).unwrap();
        let mut calc = CalorieCalculator::new(1000);
        calc.build_options(&catalog);

        calc.toggle_option(0).unwrap();
        calc.toggle_option(1).unwrap();
        assert_eq!(calc.total(), 200);

        // Unticking one dish drops the shared value even though the other
        // checkbox stays ticked.
        calc.toggle_option(1).unwrap();
        assert!(calc.options()[0].checked);
        assert_eq!(calc.total(), 0);
    }

    #[test]
    fn test_large_values_sum_exactly() {
        let dish = |id, kcal| MenuItem {
            id,
            name: format!("Dish {id}"),
            desc: String::new(),
            kcal,
            category: Category::Lunch,
        };
        let catalog =
            Catalog::from_items(vec![dish(1, 3_000_000_000), dish(2, 2_000_000_000)]).unwrap();
        let mut calc = CalorieCalculator::new(2000);
        calc.build_options(&catalog);
        calc.toggle_option(0).unwrap();
        calc.toggle_option(1).unwrap();

        let meter = calc.recompute();
        assert_eq!(meter.total, 5_000_000_000);
        assert!(meter.over_target());
        assert!((meter.filled - 1.0).abs() < EPS);
        assert!(meter.offset.abs() < EPS);
    }

    #[test]
    fn test_invalid_checkbox_value_leaves_state_alone() {
        let mut calc = calculator();
        calc.options[0].value = "abc".to_string();
        assert!(matches!(calc.toggle_option(0), Err(AppError::InvalidKcal(_))));
        assert!(!calc.options()[0].checked);
        assert!(calc.selected().is_empty());
    }
}
