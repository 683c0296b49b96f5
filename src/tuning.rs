//! Game balance knobs
//!
//! Defaults reproduce the reference cadence and limits. A tuning file only
//! needs the fields it changes; everything else falls back to the default.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Data-driven gameplay constants, fixed for the lifetime of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Shields at (re)initialization
    pub start_shields: u8,
    /// Ammo at (re)initialization
    pub start_ammo: u8,
    /// Ammo never exceeds this
    pub ammo_cap: u8,
    /// Ammo granted by a pickup
    pub pickup_bonus: u8,

    /// Ticks between missile advances
    pub missile_period: u32,
    /// Ticks between obstacle advances at the start of a run
    pub obstacle_base_period: u32,
    /// Obstacle period shrinks by this much per `ramp_interval` elapsed ticks
    pub ramp_step: u32,
    /// Elapsed ticks per ramp step
    pub ramp_interval: u64,
    /// The obstacle period never drops below this
    pub obstacle_min_period: u32,

    /// PWM level for a lit ammo LED
    pub led_level: u8,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            start_shields: 3,
            start_ammo: 3,
            ammo_cap: 7,
            pickup_bonus: 2,

            missile_period: 100,
            obstacle_base_period: 500,
            ramp_step: 2,
            ramp_interval: 1000,
            obstacle_min_period: 1,

            led_level: 6,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) tuning document
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(|t| t.sanitized())
    }

    /// Load tuning from disk, falling back to defaults if the file is
    /// missing or malformed.
    ///
    /// This is the firmware path: a bad file must never stop the game. The
    /// host harness reads its `--tuning` file through [`Tuning::from_json`]
    /// instead so a typo fails loudly.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Malformed tuning in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would stall the loop, start the game destroyed, or
    /// break the ammo invariant
    pub fn sanitized(mut self) -> Self {
        self.start_shields = self.start_shields.max(1);
        self.missile_period = self.missile_period.max(1);
        self.obstacle_min_period = self.obstacle_min_period.max(1);
        self.obstacle_base_period = self.obstacle_base_period.max(self.obstacle_min_period);
        self.ramp_interval = self.ramp_interval.max(1);
        self.start_ammo = self.start_ammo.min(self.ammo_cap);
        self
    }

    /// Obstacle reload value after `elapsed_ticks` of play.
    ///
    /// Non-increasing in `elapsed_ticks` and never below `obstacle_min_period`.
    pub fn obstacle_period(&self, elapsed_ticks: u64) -> u32 {
        let steps = elapsed_ticks / self.ramp_interval.max(1);
        let shrink = steps.saturating_mul(u64::from(self.ramp_step));
        let period = u64::from(self.obstacle_base_period).saturating_sub(shrink);
        let floor = u64::from(self.obstacle_min_period.max(1));
        if period < floor {
            log::trace!("Obstacle period floored at {} (tick {})", floor, elapsed_ticks);
        }
        period.max(floor) as u32
    }
}
