//! Logical controls polled by the simulation
//!
//! Key mapping and edge detection belong to the host; the wave only asks
//! whether a control is held right now.

/// Controls the wave reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    Left,
    Right,
    Fire,
}

/// Query for the current held state of a control
pub trait InputState {
    fn is_held(&self, control: Control) -> bool;
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaveInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

impl WaveInput {
    pub fn fire() -> Self {
        Self {
            fire: true,
            ..Default::default()
        }
    }
}

impl InputState for WaveInput {
    fn is_held(&self, control: Control) -> bool {
        match control {
            Control::Left => self.left,
            Control::Right => self.right,
            Control::Fire => self.fire,
        }
    }
}
