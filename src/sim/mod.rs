//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to [`tick`] per external tick, no timing of its own
//! - Pattern seeds come from a [`SeedSource`], never from wall-clock time
//! - Fixed-size buffers only, no heap allocation per tick
//! - No display, LED or button driver dependencies

pub mod collision;
pub mod generator;
pub mod input;
pub mod lane;
pub mod missile;
pub mod patterns;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::CollisionReport;
pub use generator::{LatencySeed, ObstacleGenerator, ScriptedSeeds, SeedSource};
pub use input::{Button, ButtonEdges, Intent, IntentResolver};
pub use lane::LaneBuffer;
pub use missile::MissileTrack;
pub use patterns::PatternIndex;
pub use player::Player;
pub use state::{Cell, GameState, Lane, PerLane, Timers};
pub use tick::{TickInput, TickOutput, tick, tick_with_seeds};

#[cfg(test)]
mod proptests;
