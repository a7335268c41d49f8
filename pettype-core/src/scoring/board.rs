//! Per-trait score accumulator.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::personality::{Trait, TraitPair};

/// Accumulated points for each of the eight traits.
///
/// A fresh board is all zeros. Boards are values: applying an answer
/// produces a new board rather than mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreBoard {
    scores: [u32; 8],
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with explicit scores, in `E I S N T F J P` order.
    pub fn from_scores(scores: [u32; 8]) -> Self {
        Self { scores }
    }

    pub fn get(&self, t: Trait) -> u32 {
        self.scores[t.index()]
    }

    /// Add `points` to `t`, saturating at `u32::MAX`.
    pub(crate) fn add(&mut self, t: Trait, points: u32) {
        let slot = &mut self.scores[t.index()];
        *slot = slot.saturating_add(points);
    }

    /// Scores for both sides of `pair`, first symbol first.
    pub fn pair(&self, pair: TraitPair) -> (u32, u32) {
        (self.get(pair.first()), self.get(pair.second()))
    }

    /// Sum of every accumulator.
    pub fn total(&self) -> u64 {
        self.scores.iter().map(|s| u64::from(*s)).sum()
    }

    pub fn is_zero(&self) -> bool {
        self.scores.iter().all(|s| *s == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, u32)> + '_ {
        Trait::ALL.iter().map(move |t| (*t, self.get(*t)))
    }
}

impl Index<Trait> for ScoreBoard {
    type Output = u32;

    fn index(&self, t: Trait) -> &u32 {
        &self.scores[t.index()]
    }
}
