//! Host-side collaborators for tests and the desktop harness

use std::thread;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::{ButtonSource, DisplaySink, LedSink, TickSource};
use crate::consts::{BUTTON_COUNT, LANE_COUNT, LED_COUNT};
use crate::renderer::Rgb;
use crate::sim::Button;

/// Never waits; ticks run back to back
#[derive(Debug, Default)]
pub struct FreeRunning;

impl TickSource for FreeRunning {
    fn wait_tick(&mut self) {}
}

/// Sleeps out the remainder of a fixed period
#[derive(Debug)]
pub struct Sleeping {
    period: Duration,
    deadline: Instant,
}

impl Sleeping {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }
}

impl TickSource for Sleeping {
    fn wait_tick(&mut self) {
        let now = Instant::now();
        if now < self.deadline {
            thread::sleep(self.deadline - now);
            self.deadline += self.period;
        } else {
            // Overran the tick; resynchronise instead of bursting
            log::trace!("Tick overran by {:?}", now - self.deadline);
            self.deadline = now + self.period;
        }
    }
}

/// Pending edges set by hand
#[derive(Debug, Default)]
pub struct ScriptedButtons {
    pending: [bool; BUTTON_COUNT],
}

impl ScriptedButtons {
    pub fn press(&mut self, button: Button) {
        self.pending[button.index()] = true;
    }
}

impl ButtonSource for ScriptedButtons {
    fn was_pressed(&self, button: Button) -> bool {
        self.pending[button.index()]
    }

    fn acknowledge(&mut self, button: Button) {
        self.pending[button.index()] = false;
    }
}

/// Attract-mode player: presses a random button now and then, reproducibly
#[derive(Debug)]
pub struct RandomButtons {
    rng: Pcg32,
    pending: [bool; BUTTON_COUNT],
    /// Chance per tick of a new press
    press_chance: f64,
}

impl RandomButtons {
    /// `press_chance` is clamped to `0.0..=1.0`; NaN means never press
    pub fn new(seed: u64, press_chance: f64) -> Self {
        let press_chance = if press_chance.is_nan() {
            0.0
        } else {
            press_chance.clamp(0.0, 1.0)
        };
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pending: [false; BUTTON_COUNT],
            press_chance,
        }
    }

    /// Roll for this tick's press; call once before each step
    pub fn roll(&mut self) {
        if self.rng.random_bool(self.press_chance) {
            let button = Button::PRIORITY[self.rng.random_range(0..BUTTON_COUNT)];
            self.pending[button.index()] = true;
        }
    }
}

impl ButtonSource for RandomButtons {
    fn was_pressed(&self, button: Button) -> bool {
        self.pending[button.index()]
    }

    fn acknowledge(&mut self, button: Button) {
        self.pending[button.index()] = false;
    }
}

/// In-memory character display
#[derive(Debug, Default)]
pub struct BufferDisplay {
    rows: [String; LANE_COUNT],
    cursor: (usize, usize),
    /// Set by every write; cleared by [`BufferDisplay::take_dirty`]
    dirty: bool,
}

impl BufferDisplay {
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// True if anything changed since the last call
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

impl DisplaySink for BufferDisplay {
    fn clear(&mut self) {
        let changed = self.rows.iter().any(|r| !r.is_empty());
        for row in &mut self.rows {
            row.clear();
        }
        self.cursor = (0, 0);
        self.dirty |= changed;
    }

    fn set_cursor(&mut self, row: u8, column: u8) {
        self.cursor = (usize::from(row), usize::from(column));
    }

    fn write_str(&mut self, text: &str) {
        let (row, column) = self.cursor;
        let Some(line) = self.rows.get_mut(row) else {
            return;
        };

        let mut chars: Vec<char> = line.chars().collect();
        if chars.len() < column {
            chars.resize(column, ' ');
        }
        for (i, ch) in text.chars().enumerate() {
            match chars.get_mut(column + i) {
                Some(slot) => *slot = ch,
                None => chars.push(ch),
            }
        }
        let updated: String = chars.into_iter().collect();
        if updated != *line {
            *line = updated;
            self.dirty = true;
        }
        self.cursor.1 = column + text.chars().count();
    }
}

/// In-memory LED bank
#[derive(Debug, Default)]
pub struct BufferLeds {
    pub levels: [u8; LED_COUNT],
    pub rgb: Option<Rgb>,
}

impl LedSink for BufferLeds {
    fn set_level(&mut self, led: usize, level: u8) {
        if let Some(slot) = self.levels.get_mut(led) {
            *slot = level;
        }
    }

    fn off(&mut self, led: usize) {
        self.set_level(led, 0);
    }

    fn set_rgb(&mut self, color: Rgb) {
        self.rgb = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_overwrites_in_place() {
        let mut d = BufferDisplay::default();
        d.set_cursor(1, 3);
        d.write_str("ab");
        assert_eq!(d.row(1), Some("   ab"));
        assert!(d.take_dirty());
        assert!(!d.take_dirty());

        d.set_cursor(1, 0);
        d.write_str("   ab");
        assert!(!d.take_dirty());

        d.set_cursor(5, 0);
        d.write_str("ignored");
        assert_eq!(d.row(5), None);
    }

    #[test]
    fn test_random_buttons_reproducible() {
        let mut a = RandomButtons::new(7, 0.5);
        let mut b = RandomButtons::new(7, 0.5);
        for _ in 0..200 {
            a.roll();
            b.roll();
            for button in Button::PRIORITY {
                assert_eq!(a.was_pressed(button), b.was_pressed(button));
            }
            for button in Button::PRIORITY {
                a.acknowledge(button);
                b.acknowledge(button);
            }
        }
    }

    #[test]
    fn test_random_buttons_odd_chances() {
        for chance in [f64::NAN, f64::NEG_INFINITY, -1.0, 2.0, f64::INFINITY] {
            let mut bot = RandomButtons::new(3, chance);
            for _ in 0..50 {
                bot.roll();
            }
        }

        let mut idle = RandomButtons::new(3, f64::NAN);
        for _ in 0..50 {
            idle.roll();
        }
        assert!(Button::PRIORITY.iter().all(|b| !idle.was_pressed(*b)));
    }

    #[test]
    fn test_led_sink_ignores_unknown_led() {
        let mut leds = BufferLeds::default();
        leds.set_level(LED_COUNT + 1, 6);
        leds.set_level(0, 6);
        leds.off(0);
        assert_eq!(leds.levels, [0; LED_COUNT]);
    }
}
