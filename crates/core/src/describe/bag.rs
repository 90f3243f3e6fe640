//! Shuffle-bag delivery over a fixed item pool.

use std::collections::VecDeque;

use crate::error::ConfigError;
use crate::rng::RandomSource;

/// When a bag reorders the items it has not yet delivered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReshufflePolicy {
    /// Refill and reshuffle only once every item has been delivered.
    #[default]
    OnExhaustion,
    /// Additionally reshuffle the leftovers whenever fewer than this many remain after a draw.
    LowWater(usize),
}

impl ReshufflePolicy {
    /// `0` selects plain shuffle-bag behaviour.
    pub fn from_low_water_mark(mark: usize) -> Self {
        if mark == 0 { Self::OnExhaustion } else { Self::LowWater(mark) }
    }
}

/// Delivers every pool item once, in random order, before any item repeats.
#[derive(Clone, Debug)]
pub struct ShuffleBag<T> {
    source: Vec<T>,
    pending: VecDeque<T>,
    policy: ReshufflePolicy,
}

impl<T: Clone> ShuffleBag<T> {
    pub fn new(
        items: impl IntoIterator<Item = T>,
        policy: ReshufflePolicy,
    ) -> Result<Self, ConfigError> {
        let source: Vec<T> = items.into_iter().collect();
        if source.is_empty() {
            return Err(ConfigError::EmptyPool);
        }
        Ok(Self { source, pending: VecDeque::new(), policy })
    }

    pub fn draw(&mut self, rng: &mut RandomSource) -> T {
        if self.pending.is_empty() {
            self.refill(rng);
        }
        let item = self.pending.pop_front().expect("refilled bag is non-empty");

        if let ReshufflePolicy::LowWater(mark) = self.policy {
            if !self.pending.is_empty() && self.pending.len() < mark {
                rng.shuffle(self.pending.make_contiguous());
            }
        }
        item
    }

    /// Items left before the next full reshuffle.
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn pool_size(&self) -> usize {
        self.source.len()
    }

    fn refill(&mut self, rng: &mut RandomSource) {
        let mut fresh = self.source.clone();
        rng.shuffle(&mut fresh);
        self.pending = fresh.into();
    }
}
