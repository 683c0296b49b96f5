//! Projections from game state to the two output surfaces
//!
//! Both projections are pure: they read state and return fixed-size frames
//! that the platform layer pushes to its sinks.

pub mod leds;
pub mod text;

pub use leds::{LedFrame, Rgb};
pub use text::DisplayFrame;
