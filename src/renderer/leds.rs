//! Ammo LED bank and the RGB status LED

use serde::{Deserialize, Serialize};

use crate::consts::LED_COUNT;

/// PWM level per ammo LED; 0 means off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LedFrame(pub [u8; LED_COUNT]);

impl LedFrame {
    pub fn level(&self, led: usize) -> Option<u8> {
        self.0.get(led).copied()
    }

    pub fn lit(&self) -> usize {
        self.0.iter().filter(|l| **l > 0).count()
    }
}

/// RGB status LED colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Colour the status LED shows for a running game
pub const GHOST_WHITE: Rgb = Rgb {
    r: 0xF8,
    g: 0xF8,
    b: 0xFF,
};

/// Light the first `min(ammo, LED_COUNT)` LEDs at `level`
pub fn project(ammo: u8, level: u8) -> LedFrame {
    let mut frame = LedFrame::default();
    for (i, slot) in frame.0.iter_mut().enumerate() {
        if i < usize::from(ammo) {
            *slot = level;
        }
    }
    frame
}

/// Status colour pushed after every (re)initialization
pub fn status_color() -> Rgb {
    GHOST_WHITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ammo_lights_prefix() {
        let frame = project(2, 6);
        assert_eq!(frame.level(0), Some(6));
        assert_eq!(frame.level(1), Some(6));
        assert_eq!(frame.level(2), Some(0));
        assert_eq!(frame.lit(), 2);
    }

    #[test]
    fn test_more_ammo_than_leds() {
        assert_eq!(project(7, 6).lit(), LED_COUNT);
        assert_eq!(project(0, 6), LedFrame::default());
    }
}
