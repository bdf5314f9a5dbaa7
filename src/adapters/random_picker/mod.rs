// Random picker adapter - Seedable asset and filter selection

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ports::PickerPort;

/// Uniform random picker backed by a seedable RNG
pub struct RandomPicker {
    rng: StdRng,
}

impl RandomPicker {
    /// Deterministic picker for reproducible batches
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picker seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PickerPort for RandomPicker {
    fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.rng.gen_range(0..len))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::ports::pick;

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = RandomPicker::seeded(42);
        let mut b = RandomPicker::seeded(42);
        let first: Vec<_> = (0..16).map(|_| a.pick_index(7)).collect();
        let second: Vec<_> = (0..16).map(|_| b.pick_index(7)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_pick_index_in_range() {
        let mut picker = RandomPicker::from_entropy();
        for _ in 0..100 {
            let index = picker.pick_index(3).unwrap();
            assert!(index < 3);
        }
    }

    #[test]
    fn test_pick_from_empty_list_fails() {
        let mut picker = RandomPicker::seeded(1);
        let filters: Vec<String> = Vec::new();
        let err = pick(&mut picker, "filter", &filters).unwrap_err();
        assert_eq!(err, DomainError::EmptyChoice("filter".to_string()));
    }
}
