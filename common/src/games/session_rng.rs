use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator owned by one game session, so a seed fully determines food placement.
pub struct SessionRng {
    rng: StdRng,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(99);
        let mut b = SessionRng::new(99);
        let first: Vec<usize> = (0..16).map(|_| a.random_range(0..400)).collect();
        let second: Vec<usize> = (0..16).map(|_| b.random_range(0..400)).collect();
        assert_eq!(first, second);
    }
}
