//! CLI command handlers.

use crate::calories::{parse_kcal, CalorieCalculator};
use crate::catalog::{Catalog, CategoryFilter};
use crate::cli::args::Commands;
use crate::menu::MenuRenderer;
use crate::picker::MealPicker;
use color_eyre::Result;

/// Handles CLI commands that don't require the TUI.
///
/// Returns `true` if the command was handled and the program should exit,
/// or `false` if the TUI should be started.
pub fn handle_command(
    command: &Commands,
    catalog: &Catalog,
    target: u32,
    seed: Option<u64>,
) -> Result<bool> {
    let output = match command {
        Commands::Menu { category, search } => render_menu(catalog, category, search)?,
        Commands::Pick => render_pick(catalog, seed),
        Commands::Calc { kcal } => render_calc(kcal, target)?,
    };
    println!("{output}");
    Ok(true)
}

/// Lists the dishes matching the given chip and search text.
fn render_menu(catalog: &Catalog, category: &str, search: &str) -> Result<String> {
    let category: CategoryFilter = category.parse()?;
    let mut menu = MenuRenderer::new();
    menu.select_category(category);
    menu.set_text(search);

    let view = menu.render(catalog);
    if view.is_empty() {
        return Ok(crate::constants::MSG_NO_RESULTS.to_string());
    }

    let lines: Vec<String> = view
        .entries()
        .iter()
        .map(|entry| {
            let item = entry.item;
            format!(
                "{:>3}. {:<24} {:>9}  [{}]\n     {}",
                item.id,
                item.name,
                crate::utils::format_kcal(u64::from(item.kcal)),
                item.category,
                item.desc
            )
        })
        .collect();
    Ok(lines.join("\n"))
}

fn render_pick(catalog: &Catalog, seed: Option<u64>) -> String {
    let mut picker = MealPicker::new(seed);
    picker
        .pick_random(catalog)
        .unwrap_or_else(|| crate::constants::MSG_NO_PICK.to_string())
}

/// Sums kcal values the same way the planner does, duplicates included.
fn render_calc(values: &[String], target: u32) -> Result<String> {
    let mut calc = CalorieCalculator::new(target);
    for value in values {
        calc.on_toggle(parse_kcal(value)?, true);
    }

    let meter = calc.recompute();
    let status = if meter.over_target() {
        "over target"
    } else {
        "within target"
    };
    Ok(format!(
        "Total : {} ({status})\nTarget: {}\nRing  : {}% filled (offset {:.2} of {:.2})",
        crate::utils::format_kcal(meter.total),
        crate::utils::format_kcal(u64::from(meter.target)),
        meter.percent(),
        meter.offset,
        meter.circumference
    ))
}
