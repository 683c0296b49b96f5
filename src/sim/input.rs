//! Button intent resolution
//!
//! At most one intent per tick: the first pressed button in priority order
//! that does not repeat the previous tick's intent. A suppressed repeat is
//! left unacknowledged so its edge is still pending next tick.

use serde::{Deserialize, Serialize};

use crate::consts::BUTTON_COUNT;

/// Logical buttons, declared in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Button {
    Left,
    LeftMid,
    RightMid,
    Right,
}

impl Button {
    pub const PRIORITY: [Button; BUTTON_COUNT] =
        [Button::Left, Button::LeftMid, Button::RightMid, Button::Right];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn intent(self) -> Intent {
        match self {
            Button::Left => Intent::SwitchLane,
            Button::LeftMid => Intent::Fire,
            Button::RightMid => Intent::Aux1,
            Button::Right => Intent::Aux2,
        }
    }
}

/// What the player asked for this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    /// Toggle lane; also restarts a destroyed game
    SwitchLane,
    Fire,
    /// Resolved but without gameplay effect
    Aux1,
    /// Resolved but without gameplay effect
    Aux2,
}

/// Edge-triggered "was pressed" snapshot of every button for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ButtonEdges([bool; BUTTON_COUNT]);

impl ButtonEdges {
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot with exactly one button pressed
    pub fn only(button: Button) -> Self {
        let mut edges = Self::default();
        edges.set(button, true);
        edges
    }

    /// Build a snapshot by querying each button
    pub fn sample(mut was_pressed: impl FnMut(Button) -> bool) -> Self {
        let mut edges = Self::default();
        for button in Button::PRIORITY {
            edges.set(button, was_pressed(button));
        }
        edges
    }

    pub fn set(&mut self, button: Button, pressed: bool) {
        self.0[button.index()] = pressed;
    }

    pub fn is_pressed(&self, button: Button) -> bool {
        self.0[button.index()]
    }
}

/// The previous tick's intent, which the next tick may not repeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntentResolver {
    last: Option<Intent>,
}

impl IntentResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<Intent> {
        self.last
    }

    /// Pick this tick's button. The caller acknowledges the returned button.
    ///
    /// The result, including `None`, becomes the register for the next tick.
    pub fn resolve(&mut self, edges: ButtonEdges) -> Option<Button> {
        let last = self.last;
        let chosen = Button::PRIORITY
            .into_iter()
            .find(|b| edges.is_pressed(*b) && Some(b.intent()) != last);
        self.last = chosen.map(Button::intent);
        chosen
    }
}
