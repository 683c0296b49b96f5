//! Character display projection
//!
//! One lane per line. Missiles draw over obstacles, and the player marker
//! draws over everything in column 0 of the occupied lane.

use serde::{Deserialize, Serialize};

use crate::consts::WIDTH;
use crate::sim::lane::LaneBuffer;
use crate::sim::missile::MissileTrack;
use crate::sim::state::{Cell, GameState, Lane, PerLane};

pub const GLYPH_EMPTY: u8 = b' ';
pub const GLYPH_ROCK: u8 = b'0';
pub const GLYPH_PICKUP: u8 = b'+';
pub const GLYPH_MISSILE: u8 = b'-';
pub const GLYPH_PLAYER: u8 = b'>';

/// Shown instead of the lanes once the player is destroyed
pub const GAME_OVER: &str = "Game Over";

/// What the display should show after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisplayFrame {
    /// Two full-width ASCII lines
    Lanes(PerLane<[u8; WIDTH]>),
    GameOver,
}

impl DisplayFrame {
    /// Text of one lane's line; `None` for the game over screen
    pub fn line(&self, lane: Lane) -> Option<&str> {
        match self {
            DisplayFrame::Lanes(lines) => std::str::from_utf8(&lines[lane]).ok(),
            DisplayFrame::GameOver => None,
        }
    }
}

fn glyph(cell: Cell) -> u8 {
    match cell {
        Cell::Empty => GLYPH_EMPTY,
        Cell::Rock => GLYPH_ROCK,
        Cell::AmmoPickup => GLYPH_PICKUP,
    }
}

/// Render one lane without the player marker
pub fn render_lane(lane: &LaneBuffer, track: &MissileTrack) -> [u8; WIDTH] {
    let mut line = [GLYPH_EMPTY; WIDTH];
    for (i, (cell, missile)) in lane.cells().iter().zip(track.flags()).enumerate() {
        line[i] = if *missile { GLYPH_MISSILE } else { glyph(*cell) };
    }
    line
}

/// Project the whole state onto the display
pub fn render(state: &GameState) -> DisplayFrame {
    if state.player.destroyed {
        return DisplayFrame::GameOver;
    }

    let mut lines = PerLane::new(
        render_lane(&state.lanes.top, &state.missiles.top),
        render_lane(&state.lanes.bottom, &state.missiles.bottom),
    );
    lines[state.player.lane][0] = GLYPH_PLAYER;
    DisplayFrame::Lanes(lines)
}
