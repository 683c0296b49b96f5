//! Player model and its per-tick transitions

use serde::{Deserialize, Serialize};

use super::collision::CollisionReport;
use super::input::Intent;
use super::lane::LaneBuffer;
use super::missile::{self, MissileTrack};
use super::state::{Cell, Lane, PerLane};
use crate::tuning::Tuning;

/// The player's ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub shields: u8,
    /// Always within `0..=ammo_cap`
    pub ammo: u8,
    pub lane: Lane,
    /// Took a rock hit this tick
    pub damaged: bool,
    /// Latched once shields hit zero; only reinitialization clears it
    pub destroyed: bool,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            shields: tuning.start_shields,
            ammo: tuning.start_ammo.min(tuning.ammo_cap),
            lane: Lane::default(),
            damaged: false,
            destroyed: tuning.start_shields == 0,
        }
    }

    /// Apply this tick's intent and collision outcome.
    ///
    /// A rock under the player is left in place, so sitting on it keeps
    /// draining shields until it scrolls away. A pickup is consumed only when
    /// the full bonus fits under the cap, and the leading cell cleared is the
    /// one in the lane the player occupies after this tick's switch.
    pub fn apply_tick(
        &mut self,
        intent: Option<Intent>,
        report: &CollisionReport,
        lanes: &mut PerLane<LaneBuffer>,
        tracks: &mut PerLane<MissileTrack>,
        tuning: &Tuning,
    ) {
        match intent {
            Some(Intent::SwitchLane) => self.lane = self.lane.toggled(),
            Some(Intent::Fire) => {
                missile::fire_if_possible(self, tracks);
            }
            Some(Intent::Aux1 | Intent::Aux2) | None => {}
        }

        self.damaged = false;
        match report.collide_with {
            Cell::Rock => {
                self.shields = self.shields.saturating_sub(1);
                self.damaged = true;
                log::debug!("Rock hit in {:?} lane, shields {}", report.lane, self.shields);
            }
            Cell::AmmoPickup => {
                if u16::from(self.ammo) + u16::from(tuning.pickup_bonus) <= u16::from(tuning.ammo_cap)
                {
                    self.ammo += tuning.pickup_bonus;
                    lanes[self.lane].clear(0);
                    log::debug!("Ammo pickup collected, {} rounds", self.ammo);
                }
            }
            Cell::Empty => {}
        }

        if self.shields == 0 && !self.destroyed {
            self.destroyed = true;
            log::info!("Player destroyed");
        }
    }
}
