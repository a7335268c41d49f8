//! Sources of tie-break draws.

use rand::prelude::*;
use rand::rngs::StdRng;

/// Produces uniform draws in `[0, 1)` for breaking score ties.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Draws from the thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Deterministic generator seeded from a `u64`.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed from `(question, option)` pairs, so the same answers always break
    /// ties the same way, on every platform and toolchain.
    pub fn from_answers(answers: impl IntoIterator<Item = (usize, usize)>) -> Self {
        Self::new(answer_seed(answers))
    }
}

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// FNV-1a over each index as little-endian `u32`.
fn answer_seed(answers: impl IntoIterator<Item = (usize, usize)>) -> u64 {
    let mut hash = FNV_OFFSET;
    for (question, option) in answers {
        for index in [question, option] {
            for byte in (index as u32).to_le_bytes() {
                hash ^= u64::from(byte);
                hash = hash.wrapping_mul(FNV_PRIME);
            }
        }
    }
    hash
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy)]
pub struct FixedRandom(pub f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Cycles through a fixed list of values.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    next: usize,
}

impl SequenceRandom {
    /// An empty list behaves like `FixedRandom(0.0)`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            self.next += 1;
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
