//! Game state and core simulation types
//!
//! Everything the loop mutates lives in one owned [`GameState`]. It is built
//! and replaced wholesale by [`GameState::new`] / [`GameState::reinitialize`];
//! nothing is torn down piecemeal.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::generator::ObstacleGenerator;
use super::input::IntentResolver;
use super::lane::LaneBuffer;
use super::missile::MissileTrack;
use super::player::Player;
use crate::consts::LANE_COUNT;
use crate::tuning::Tuning;

/// Contents of one lane cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Rock,
    AmmoPickup,
}

/// One of the two parallel tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lane {
    #[default]
    Top,
    Bottom,
}

impl Lane {
    pub const ALL: [Lane; LANE_COUNT] = [Lane::Top, Lane::Bottom];

    /// Display row / storage slot for this lane
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Lane::Top => 0,
            Lane::Bottom => 1,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Lane::Top => Lane::Bottom,
            Lane::Bottom => Lane::Top,
        }
    }
}

/// A value held once per lane, indexed by [`Lane`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PerLane<T> {
    pub top: T,
    pub bottom: T,
}

impl<T> PerLane<T> {
    pub fn new(top: T, bottom: T) -> Self {
        Self { top, bottom }
    }

    /// Iterate `(lane, value)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (Lane, &T)> {
        [(Lane::Top, &self.top), (Lane::Bottom, &self.bottom)].into_iter()
    }

    /// Iterate `(lane, value)` mutably in display order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Lane, &mut T)> {
        [(Lane::Top, &mut self.top), (Lane::Bottom, &mut self.bottom)].into_iter()
    }
}

impl<T> Index<Lane> for PerLane<T> {
    type Output = T;

    fn index(&self, lane: Lane) -> &T {
        match lane {
            Lane::Top => &self.top,
            Lane::Bottom => &self.bottom,
        }
    }
}

impl<T> IndexMut<Lane> for PerLane<T> {
    fn index_mut(&mut self, lane: Lane) -> &mut T {
        match lane {
            Lane::Top => &mut self.top,
            Lane::Bottom => &mut self.bottom,
        }
    }
}

/// Loop countdowns and the run clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Timers {
    /// Ticks until the lanes scroll (scrolls when 0)
    pub obstacle_countdown: u32,
    /// Ticks until missiles move (moves when 0)
    pub missile_countdown: u32,
    /// Ticks since (re)initialization
    pub elapsed_ticks: u64,
}

impl Timers {
    /// End-of-tick bookkeeping: countdowns run down to 0 and hold there
    pub fn advance(&mut self) {
        self.obstacle_countdown = self.obstacle_countdown.saturating_sub(1);
        self.missile_countdown = self.missile_countdown.saturating_sub(1);
        self.elapsed_ticks += 1;
    }
}

/// Complete game state (deterministic, serializable, no heap)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Balance knobs; survive reinitialization unchanged
    pub tuning: Tuning,
    /// Obstacle cells, index 0 nearest the player
    pub lanes: PerLane<LaneBuffer>,
    /// Missile flags, index 0 nearest the player
    pub missiles: PerLane<MissileTrack>,
    pub player: Player,
    pub timers: Timers,
    pub generator: ObstacleGenerator,
    pub input: IntentResolver,
}

impl GameState {
    /// Build the first state of a run
    pub fn new(tuning: Tuning) -> Self {
        let tuning = tuning.sanitized();
        Self {
            tuning,
            lanes: PerLane::default(),
            missiles: PerLane::default(),
            player: Player::new(&tuning),
            timers: Timers::default(),
            generator: ObstacleGenerator::new(),
            input: IntentResolver::new(),
        }
    }

    /// Replace everything with a fresh run using the same tuning
    pub fn reinitialize(&mut self) {
        *self = Self::new(self.tuning);
    }

    /// Obstacle cell the player currently sits on
    pub fn collide_cell(&self) -> Cell {
        self.lanes[self.player.lane].leading()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
