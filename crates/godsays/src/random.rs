use rand::{Rng, SeedableRng, rngs::StdRng};
use std::time::{SystemTime, UNIX_EPOCH};

/// A trait for random sources that pick an index into a list.
///
/// This abstraction allows you to plug in a real random source or a scripted
/// source in tests.
///
/// # Example
/// ```
/// use godsays::RandSource;
///
/// struct AlwaysFirst;
/// impl RandSource for AlwaysFirst {
///     fn rand_index(&mut self, _upper: usize) -> usize {
///         0
///     }
/// }
///
/// let mut rng = AlwaysFirst;
/// assert_eq!(rng.rand_index(10), 0);
/// ```
pub trait RandSource {
    /// Returns a uniformly distributed index in `0..upper`.
    ///
    /// Callers guarantee `upper > 0`.
    fn rand_index(&mut self, upper: usize) -> usize;
}

/// A [`RandSource`] backed by [`StdRng`] and seeded from the wall clock.
///
/// This is not meant for anything security sensitive; it only needs to
/// produce a different phrase each run.
#[derive(Clone, Debug)]
pub struct TimeSeededRandom {
    rng: StdRng,
}

impl TimeSeededRandom {
    /// Seeds a new generator from the current time in nanoseconds.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        // Fold the high bits in so the seed still changes past 2554.
        #[allow(clippy::cast_possible_truncation)]
        let seed = (nanos as u64) ^ ((nanos >> 64) as u64);
        Self::with_seed(seed)
    }

    /// Creates a generator with a fixed seed, producing a reproducible
    /// sequence.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for TimeSeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandSource for TimeSeededRandom {
    fn rand_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_stay_in_range() {
        let mut rng = TimeSeededRandom::new();
        for upper in [1, 2, 7, 1000] {
            for _ in 0..500 {
                assert!(rng.rand_index(upper) < upper);
            }
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = TimeSeededRandom::with_seed(7);
        let mut b = TimeSeededRandom::with_seed(7);
        let xs: Vec<usize> = (0..64).map(|_| a.rand_index(100)).collect();
        let ys: Vec<usize> = (0..64).map(|_| b.rand_index(100)).collect();
        assert_eq!(xs, ys);
    }
}
