//! Command-line argument definitions.

use crate::constants::{DEFAULT_TARGET, TARGET_MAX, TARGET_MIN};
use clap::{Parser, Subcommand};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "SimplyTrue Foods - terminal menu, meal picker and calorie planner",
    long_about = None
)]
pub struct Args {
    /// Load the menu from a JSON file instead of the built-in one
    #[arg(long, global = true, value_name = "PATH")]
    pub catalog: Option<String>,

    /// Initial calorie target for the planner slider
    #[arg(
        long,
        global = true,
        value_name = "KCAL",
        default_value_t = DEFAULT_TARGET,
        value_parser = clap::value_parser!(u32).range(i64::from(TARGET_MIN)..=i64::from(TARGET_MAX))
    )]
    pub target: u32,

    /// Seed for the meal of the day picker (random if omitted)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the menu, optionally filtered
    Menu {
        /// Category chip: all, breakfast, lunch or snack
        #[arg(long, short, default_value = "all")]
        category: String,
        /// Case-insensitive text to look for in dish names
        #[arg(long, short, default_value = "")]
        search: String,
    },
    /// Print a random meal of the day
    Pick,
    /// Add up kcal values against the target
    Calc {
        /// Kcal values of the chosen dishes
        #[arg(required = true)]
        kcal: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["simplytrue"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.target, DEFAULT_TARGET);
        assert!(args.catalog.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_target_must_be_in_slider_range() {
        assert!(Args::try_parse_from(["simplytrue", "--target", "0"]).is_err());
        assert!(Args::try_parse_from(["simplytrue", "--target", "99999"]).is_err());
        let args = Args::try_parse_from(["simplytrue", "--target", "400"]).unwrap();
        assert_eq!(args.target, 400);
    }

    #[test]
    fn test_menu_subcommand() {
        let args =
            Args::try_parse_from(["simplytrue", "menu", "-c", "breakfast", "-s", "berry"]).unwrap();
        match args.command {
            Some(Commands::Menu { category, search }) => {
                assert_eq!(category, "breakfast");
                assert_eq!(search, "berry");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_calc_accepts_global_target_after_subcommand() {
        let args =
            Args::try_parse_from(["simplytrue", "calc", "250", "180", "--target", "400"]).unwrap();
        assert_eq!(args.target, 400);
        assert!(matches!(args.command, Some(Commands::Calc { ref kcal }) if kcal.len() == 2));
    }
}
