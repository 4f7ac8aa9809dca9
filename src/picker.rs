//! Meal of the day randomizer.

use crate::catalog::{Catalog, MenuItem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Formats a dish the way the meal of the day panel shows it.
pub fn describe(item: &MenuItem) -> String {
    format!("{} — {} ({} kcal)", item.name, item.desc, item.kcal)
}

/// Picks a uniformly random dish on demand. Repeats are allowed.
pub struct MealPicker {
    rng: StdRng,
    current: Option<usize>,
}

impl MealPicker {
    /// Creates a picker, seeded for reproducible runs or from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, current: None }
    }

    /// Draws a new dish and returns its display text.
    ///
    /// Every catalog entry is equally likely. Returns `None` for an empty
    /// catalog.
    pub fn pick_random(&mut self, catalog: &Catalog) -> Option<String> {
        if catalog.is_empty() {
            self.current = None;
            return None;
        }
        let idx = self.rng.gen_range(0..catalog.len());
        self.current = Some(idx);
        catalog.items().get(idx).map(describe)
    }

    /// The dish drawn by the last pick.
    pub fn current<'a>(&self, catalog: &'a Catalog) -> Option<&'a MenuItem> {
        self.current.and_then(|idx| catalog.items().get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_format() {
        let catalog = Catalog::sample();
        assert_eq!(
            describe(&catalog.items()[1]),
            "Berry Smoothie — Mixed berries blended with almond milk and chia seeds (180 kcal)"
        );
    }

    #[test]
    fn test_nothing_picked_before_first_draw() {
        let picker = MealPicker::new(Some(1));
        assert!(picker.current(&Catalog::sample()).is_none());
    }

    #[test]
    fn test_pick_matches_current() {
        let catalog = Catalog::sample();
        let mut picker = MealPicker::new(Some(7));
        let text = picker.pick_random(&catalog).unwrap();
        let item = picker.current(&catalog).unwrap();
        assert_eq!(text, describe(item));
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let catalog = Catalog::sample();
        let mut a = MealPicker::new(Some(42));
        let mut b = MealPicker::new(Some(42));
        for _ in 0..20 {
            assert_eq!(a.pick_random(&catalog), b.pick_random(&catalog));
        }
    }

    #[test]
    fn test_distribution_is_roughly_uniform() {
        let catalog = Catalog::sample();
        let mut picker = MealPicker::new(Some(0x5EED));
        let mut counts = vec![0usize; catalog.len()];
        let samples = 60_000;

        for _ in 0..samples {
            picker.pick_random(&catalog);
            let id = picker.current(&catalog).unwrap().id;
            counts[(id - 1) as usize] += 1;
        }

        // Expected 10_000 each; 5% tolerance is many standard deviations.
        let expected = samples / catalog.len();
        for (i, count) in counts.iter().enumerate() {
            assert!(
                count.abs_diff(expected) < expected / 20,
                "item {} drawn {count} times, expected ~{expected}",
                i + 1
            );
        }
    }
}
