//! Sources of uniform random numbers for the snapshot generator.
//!
//! Generation code never calls an RNG directly; it draws from a
//! [`RandomSource`] so tests can substitute a fixed sequence.

use rand::Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A source of uniformly distributed values in `[0, 1)`.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::rng().random::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// An empty list always yields `0.0`. Values are returned as given; callers
/// clamp whatever they derive from them.
///
/// # Examples
///
/// ```
/// use business_snapshot::utils::random::{RandomSource, SequenceRandom};
///
/// let source = SequenceRandom::new([0.0, 0.5]);
/// assert_eq!(source.next_unit(), 0.0);
/// assert_eq!(source.next_unit(), 0.5);
/// assert_eq!(source.next_unit(), 0.0);
/// ```
#[derive(Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let position = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[position % self.values.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_in_unit_interval() {
        let source = ThreadRandom;
        for _ in 0..1000 {
            let value = source.next_unit();
            assert!((0.0..1.0).contains(&value));
        }
    }

    #[test]
    fn test_sequence_wraps_around() {
        let source = SequenceRandom::new(vec![0.1, 0.2, 0.3]);
        let drawn: Vec<f64> = (0..5).map(|_| source.next_unit()).collect();
        assert_eq!(drawn, vec![0.1, 0.2, 0.3, 0.1, 0.2]);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let source = SequenceRandom::new(Vec::new());
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.next_unit(), 0.0);
    }
}
