//! Missile tracks and their movement
//!
//! Missiles move away from the player on their own cadence, independent of
//! the obstacle scroll.

use serde::{Deserialize, Serialize};

use super::player::Player;
use super::state::PerLane;
use crate::consts::{MISSILE_SPAWN_INDEX, WIDTH};

/// Missile-present flags for one lane, indices increasing away from the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissileTrack {
    present: [bool; WIDTH],
}

impl MissileTrack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a missile just ahead of the collide cell
    pub fn launch(&mut self) {
        self.present[MISSILE_SPAWN_INDEX] = true;
    }

    pub fn is_present(&self, index: usize) -> bool {
        self.present.get(index).copied().unwrap_or(false)
    }

    pub fn clear(&mut self, index: usize) {
        if let Some(flag) = self.present.get_mut(index) {
            *flag = false;
        }
    }

    /// Set a flag directly; returns false for an out-of-range index
    pub fn set(&mut self, index: usize) -> bool {
        match self.present.get_mut(index) {
            Some(flag) => {
                *flag = true;
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.present.iter().filter(|p| **p).count()
    }

    pub fn flags(&self) -> &[bool; WIDTH] {
        &self.present
    }

    /// Move every missile one cell outward.
    ///
    /// The missile at the far end leaves the field. The scan runs far to near
    /// so no missile moves twice in one pass.
    pub fn advance(&mut self) {
        self.present[WIDTH - 1] = false;
        for i in (1..WIDTH - 1).rev() {
            if self.present[i] {
                self.present[i + 1] = true;
                self.present[i] = false;
            }
        }
    }
}

/// Spend one round and launch in the player's lane. No-op without ammo.
pub fn fire_if_possible(player: &mut Player, tracks: &mut PerLane<MissileTrack>) -> bool {
    if player.ammo == 0 {
        return false;
    }
    player.ammo -= 1;
    tracks[player.lane].launch();
    log::debug!("Missile launched in {:?} lane, {} rounds left", player.lane, player.ammo);
    true
}

/// Advance the missiles in both lanes
pub fn advance_all(tracks: &mut PerLane<MissileTrack>) {
    for (_, track) in tracks.iter_mut() {
        track.advance();
    }
}
