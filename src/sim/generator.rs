//! Obstacle column generator
//!
//! Streams one (top, bottom) column per obstacle advance from the pattern
//! catalog. When a pattern runs out, the next one is chosen from a seed
//! derived from elapsed ticks and the player's latest reaction interval.
//! This is deterministic and cheap, and it is not random. Tests inject
//! seeds through [`SeedSource`].

use serde::{Deserialize, Serialize};

use super::patterns::{self, PatternIndex};
use super::state::Cell;
use crate::consts::PATTERN_WIDTH;

/// Produces the seed for the next pattern selection
pub trait SeedSource {
    fn seed(&mut self, elapsed_ticks: u64, input_interval: u64) -> u64;
}

/// `(1 + input_interval) * elapsed_ticks`, wrapping
#[derive(Debug, Clone, Copy, Default)]
pub struct LatencySeed;

impl SeedSource for LatencySeed {
    fn seed(&mut self, elapsed_ticks: u64, input_interval: u64) -> u64 {
        input_interval.wrapping_add(1).wrapping_mul(elapsed_ticks)
    }
}

/// Replays a fixed list of seeds, repeating the last one once exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSeeds<'a> {
    seeds: &'a [u64],
    next: usize,
}

impl<'a> ScriptedSeeds<'a> {
    pub fn new(seeds: &'a [u64]) -> Self {
        Self { seeds, next: 0 }
    }
}

impl SeedSource for ScriptedSeeds<'_> {
    fn seed(&mut self, _elapsed_ticks: u64, _input_interval: u64) -> u64 {
        let seed = self
            .seeds
            .get(self.next)
            .or_else(|| self.seeds.last())
            .copied()
            .unwrap_or(0);
        self.next = self.next.saturating_add(1);
        seed
    }
}

/// Most significant decimal digit of `seed` (0 for 0)
pub fn leading_digit(mut seed: u64) -> u8 {
    while seed >= 10 {
        seed /= 10;
    }
    seed as u8
}

/// Generator bookkeeping, part of the game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ObstacleGenerator {
    /// Tick of the last resolved button intent
    pub last_input_tick: u64,
    /// Ticks between the last two resolved intents
    pub input_interval: u64,
    /// Next column of the selected pattern
    pub cursor: usize,
    /// Pattern currently being streamed
    pub selected: PatternIndex,
}

impl ObstacleGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Note a resolved button intent for the latency seed
    pub fn record_input(&mut self, elapsed_ticks: u64) {
        self.input_interval = elapsed_ticks.saturating_sub(self.last_input_tick);
        self.last_input_tick = elapsed_ticks;
    }

    /// Next column to feed into both lanes.
    ///
    /// The last column of each pattern is never emitted: reaching it selects
    /// a new pattern and emits that pattern's first column instead.
    pub fn next_column(
        &mut self,
        elapsed_ticks: u64,
        seeds: &mut impl SeedSource,
    ) -> (Cell, Cell) {
        if self.cursor >= PATTERN_WIDTH - 1 {
            let seed = seeds.seed(elapsed_ticks, self.input_interval);
            let digit = leading_digit(seed);
            self.selected = PatternIndex::clamped(usize::from(digit));
            if usize::from(digit) != self.selected.get() {
                log::debug!("Pattern selector digit {} clamped to {}", digit, self.selected.get());
            }
            log::trace!("Seed {} selects pattern {}", seed, self.selected.get());
            self.cursor = 0;
        }

        let column =
            patterns::column(self.selected, self.cursor).unwrap_or((Cell::Empty, Cell::Empty));
        self.cursor += 1;
        column
    }
}
