//! Fixed-period simulation tick
//!
//! One call per external tick, in a fixed order: resolve input, then (while
//! the player is alive) collisions, obstacle scroll, missile advance, player
//! update and LED projection, then the display projection, the timers, and
//! finally the restart check.

use serde::{Deserialize, Serialize};

use super::collision::{self, CollisionReport};
use super::generator::{LatencySeed, SeedSource};
use super::input::{Button, ButtonEdges, Intent};
use super::missile;
use super::state::GameState;
use crate::renderer::{DisplayFrame, LedFrame, leds, text};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pending button edges sampled this tick
    pub edges: ButtonEdges,
}

impl TickInput {
    pub fn press(button: Button) -> Self {
        Self {
            edges: ButtonEdges::only(button),
        }
    }
}

/// Everything the drivers need after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickOutput {
    /// Button whose edge was consumed; the caller acknowledges it
    pub acknowledged: Option<Button>,
    pub intent: Option<Intent>,
    /// Absent while destroyed
    pub collision: Option<CollisionReport>,
    /// Absent while destroyed; the LEDs keep their last levels
    pub leds: Option<LedFrame>,
    pub display: DisplayFrame,
    /// The state was reinitialized at the end of this tick
    pub restarted: bool,
}

/// Advance the game by one tick using the latency-derived pattern seed
pub fn tick(state: &mut GameState, input: &TickInput) -> TickOutput {
    tick_with_seeds(state, input, &mut LatencySeed)
}

/// Advance the game by one tick with an injected pattern seed source
pub fn tick_with_seeds(
    state: &mut GameState,
    input: &TickInput,
    seeds: &mut impl SeedSource,
) -> TickOutput {
    let acknowledged = state.input.resolve(input.edges);
    let intent = acknowledged.map(Button::intent);
    if intent.is_some() {
        state.generator.record_input(state.timers.elapsed_ticks);
    }

    let mut collision = None;
    let mut led_frame = None;

    if !state.player.destroyed {
        let report = collision::resolve(&mut state.lanes, &mut state.missiles, state.player.lane);

        if state.timers.obstacle_countdown == 0 {
            let elapsed = state.timers.elapsed_ticks;
            let (top, bottom) = state.generator.next_column(elapsed, seeds);
            state.lanes.top.advance(top);
            state.lanes.bottom.advance(bottom);
            state.timers.obstacle_countdown = state.tuning.obstacle_period(elapsed);
        }

        if state.timers.missile_countdown == 0 {
            missile::advance_all(&mut state.missiles);
            state.timers.missile_countdown = state.tuning.missile_period;
        }

        state.player.apply_tick(
            intent,
            &report,
            &mut state.lanes,
            &mut state.missiles,
            &state.tuning,
        );

        collision = Some(report);
        led_frame = Some(leds::project(state.player.ammo, state.tuning.led_level));
    }

    let display = text::render(state);

    state.timers.advance();

    let restarted = state.player.destroyed && intent == Some(Intent::SwitchLane);
    if restarted {
        log::info!("Restart after {} ticks", state.timers.elapsed_ticks);
        state.reinitialize();
    }

    TickOutput {
        acknowledged,
        intent,
        collision,
        leds: led_frame,
        display,
        restarted,
    }
}
