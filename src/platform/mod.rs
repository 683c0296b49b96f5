//! Platform abstraction layer
//!
//! The simulation never touches hardware. These traits describe the
//! collaborators the loop needs:
//! - Tick source (fixed-period wait)
//! - Buttons (edge query + acknowledge)
//! - Character display
//! - LED bank and RGB status LED
//!
//! Every call is synchronous and expected to return well within one tick.
//! A driver that blocks stalls the whole loop.

pub mod host;

use crate::renderer::{DisplayFrame, LedFrame, Rgb, leds};
use crate::sim::{Button, ButtonEdges, GameState, Lane, TickInput, TickOutput, tick};
use crate::tuning::Tuning;

pub use crate::renderer::text::GAME_OVER;

/// Blocks until the next tick boundary
pub trait TickSource {
    fn wait_tick(&mut self);
}

/// Edge-triggered buttons
pub trait ButtonSource {
    /// A press edge is pending for `button`
    fn was_pressed(&self, button: Button) -> bool;
    /// Clear the pending edge for `button`
    fn acknowledge(&mut self, button: Button);
}

/// Character display
pub trait DisplaySink {
    fn clear(&mut self);
    fn set_cursor(&mut self, row: u8, column: u8);
    fn write_str(&mut self, text: &str);
}

/// Ammo LED bank and status LED
pub trait LedSink {
    fn set_level(&mut self, led: usize, level: u8);
    fn off(&mut self, led: usize);
    fn set_rgb(&mut self, color: Rgb);
}

/// Push a display frame to the sink
pub fn present_display(display: &mut impl DisplaySink, frame: &DisplayFrame) {
    match frame {
        DisplayFrame::Lanes(_) => {
            for lane in Lane::ALL {
                if let Some(line) = frame.line(lane) {
                    display.set_cursor(lane.index() as u8, 0);
                    display.write_str(line);
                }
            }
        }
        DisplayFrame::GameOver => {
            display.clear();
            display.set_cursor(0, 0);
            display.write_str(GAME_OVER);
        }
    }
}

/// Push an LED frame to the sink
pub fn present_leds(sink: &mut impl LedSink, frame: &LedFrame) {
    for (led, level) in frame.0.iter().enumerate() {
        if *level > 0 {
            sink.set_level(led, *level);
        } else {
            sink.off(led);
        }
    }
}

/// The firmware main loop: owns the drivers and the game state
pub struct Console<T, B, D, L> {
    ticks: T,
    buttons: B,
    display: D,
    leds: L,
    state: GameState,
}

impl<T, B, D, L> Console<T, B, D, L>
where
    T: TickSource,
    B: ButtonSource,
    D: DisplaySink,
    L: LedSink,
{
    pub fn new(ticks: T, buttons: B, display: D, mut led_sink: L, tuning: Tuning) -> Self {
        led_sink.set_rgb(leds::status_color());
        log::info!("Console ready: {:?}", tuning);
        Self {
            ticks,
            buttons,
            display,
            leds: led_sink,
            state: GameState::new(tuning),
        }
    }

    /// Run one loop iteration and wait for the next tick
    pub fn step(&mut self) -> TickOutput {
        let input = TickInput {
            edges: ButtonEdges::sample(|b| self.buttons.was_pressed(b)),
        };

        let out = tick(&mut self.state, &input);

        if let Some(button) = out.acknowledged {
            self.buttons.acknowledge(button);
        }
        if let Some(frame) = &out.leds {
            present_leds(&mut self.leds, frame);
        }
        present_display(&mut self.display, &out.display);
        if out.restarted {
            self.leds.set_rgb(leds::status_color());
        }

        self.ticks.wait_tick();
        out
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn buttons_mut(&mut self) -> &mut B {
        &mut self.buttons
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn leds(&self) -> &L {
        &self.leds
    }
}

#[cfg(test)]
mod tests {
    use super::host::{BufferDisplay, BufferLeds, FreeRunning, ScriptedButtons};
    use super::*;
    use crate::sim::Cell;

    fn console() -> Console<FreeRunning, ScriptedButtons, BufferDisplay, BufferLeds> {
        Console::new(
            FreeRunning::default(),
            ScriptedButtons::default(),
            BufferDisplay::default(),
            BufferLeds::default(),
            Tuning::default(),
        )
    }

    #[test]
    fn test_step_draws_lanes_and_leds() {
        let mut c = console();
        c.step();
        // The first scroll brings pattern 0's leading rock into the far column
        assert_eq!(c.display().row(0), Some(">                  0"));
        assert_eq!(c.display().row(1), Some("                    "));
        assert_eq!(c.leds().levels, [6, 6, 6, 0]);
        assert_eq!(c.leds().rgb, Some(leds::GHOST_WHITE));
    }

    #[test]
    fn test_step_acknowledges_consumed_button() {
        let mut c = console();
        c.buttons_mut().press(Button::LeftMid);
        let out = c.step();
        assert_eq!(out.acknowledged, Some(Button::LeftMid));
        assert!(!c.buttons_mut().was_pressed(Button::LeftMid));
        assert_eq!(c.leds().levels, [6, 6, 0, 0]);
    }

    #[test]
    fn test_suppressed_repeat_stays_pending() {
        let mut c = console();
        c.buttons_mut().press(Button::LeftMid);
        c.step();
        c.buttons_mut().press(Button::LeftMid);
        let out = c.step();
        assert_eq!(out.acknowledged, None);
        assert!(c.buttons_mut().was_pressed(Button::LeftMid));

        // Consumed on the following tick
        let out = c.step();
        assert_eq!(out.acknowledged, Some(Button::LeftMid));
        assert_eq!(c.state().player.ammo, 1);
    }

    #[test]
    fn test_game_over_message_and_restart() {
        let mut c = console();
        c.state.player.shields = 1;
        c.state.lanes.top.set(0, Cell::Rock);
        c.state.timers.obstacle_countdown = 50;
        c.step();
        assert_eq!(c.display().row(0), Some(GAME_OVER));
        assert_eq!(c.display().row(1), Some(""));

        c.buttons_mut().press(Button::Left);
        let out = c.step();
        assert!(out.restarted);
        assert!(!c.state().player.destroyed);

        c.step();
        assert_eq!(c.display().row(0), Some(">                  0"));
    }
}
