//! Random samples of heroes or maps for casual play.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

/// Draws up to `count` distinct items from a fixed list.
#[derive(Debug, Clone)]
pub struct RandomSample<T> {
    items: Vec<T>,
    count: usize,
}

impl<T: Clone> RandomSample<T> {
    /// Creates a sampler that draws `count` items from `items`.
    #[instrument(skip(items), fields(items = items.len()))]
    pub fn new(items: Vec<T>, count: usize) -> Self {
        Self { items, count }
    }

    /// Returns the requested sample size.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Sets the requested sample size.
    pub fn set_count(&mut self, count: usize) {
        self.count = count;
    }

    /// Returns the largest possible sample size.
    pub fn max_count(&self) -> usize {
        self.items.len()
    }

    /// Draws a sample.
    ///
    /// A requested size above [`RandomSample::max_count`] is clamped first,
    /// and stays clamped.
    #[instrument(skip(self, rng), fields(count = self.count))]
    pub fn generate(&mut self, rng: &mut impl Rng) -> Vec<T> {
        if self.count > self.max_count() {
            debug!(max = self.max_count(), "Clamping sample size");
            self.count = self.max_count();
        }

        let mut shuffled = self.items.clone();
        shuffled.shuffle(rng);
        shuffled.truncate(self.count);
        shuffled
    }
}
