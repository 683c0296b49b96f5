//! Lane Runner - a two-lane obstacle-avoidance game for a character display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (lanes, missiles, collisions, player)
//! - `renderer`: Projections from state to the display lines and LED bank
//! - `platform`: Collaborator traits and the per-iteration driver frame
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Fixed dimensions of the hardware and the pattern catalog
pub mod consts {
    /// Characters per display line (one lane per line)
    pub const WIDTH: usize = 20;
    /// Display lines, one per lane
    pub const LANE_COUNT: usize = 2;

    /// Columns per obstacle pattern
    pub const PATTERN_WIDTH: usize = 8;
    /// Patterns in the catalog
    pub const PATTERN_COUNT: usize = 9;

    /// LEDs in the ammo bank
    pub const LED_COUNT: usize = 4;
    /// Logical buttons, in priority order
    pub const BUTTON_COUNT: usize = 4;

    /// Missiles spawn here, one cell ahead of the collide cell
    pub const MISSILE_SPAWN_INDEX: usize = 1;
}
