use alloc::collections::VecDeque;
use alloc::vec::Vec;
pub use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform choices the engines make: prize placement, the
/// host's reveal and the auto-play picks.
pub trait RandomSource {
    /// Uniform index in `0..upper`. Callers never pass zero.
    fn pick_index(&mut self, upper: usize) -> usize;

    fn flip_coin(&mut self) -> bool {
        self.pick_index(2) == 0
    }
}

impl RandomSource for SmallRng {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }

    fn flip_coin(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

/// Replays a scripted list of picks, each reduced modulo the requested range.
/// Returns 0 once the script runs out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FixedSequence {
    picks: VecDeque<usize>,
}

impl FixedSequence {
    pub fn new(picks: impl IntoIterator<Item = usize>) -> Self {
        Self {
            picks: picks.into_iter().collect(),
        }
    }

    pub fn push(&mut self, pick: usize) {
        self.picks.push_back(pick);
    }

    pub fn remaining(&self) -> Vec<usize> {
        self.picks.iter().copied().collect()
    }
}

impl RandomSource for FixedSequence {
    fn pick_index(&mut self, upper: usize) -> usize {
        self.picks.pop_front().map_or(0, |pick| pick % upper)
    }
}
