//! Alien Invaders - single-wave simulation engine
//!
//! Core modules:
//! - `sim`: Deterministic wave simulation (ship, formation, bolts, scoring)
//! - `input`: Logical controls the simulation polls each frame
//! - `audio`: Sound cues triggered by the simulation
//! - `render`: Draw primitives emitted for a host renderer
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences

pub mod audio;
pub mod error;
pub mod input;
pub mod render;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use audio::{AudioManager, AudioSink, NullAudio, SoundEffect};
pub use error::ConfigError;
pub use input::{Control, InputState, WaveInput};
pub use render::{DrawCommand, RenderSink};
pub use settings::Settings;
pub use sim::Wave;
pub use tuning::Tuning;

/// Default gameplay constants (classic arcade layout)
///
/// Coordinates are y-up: the origin is the bottom-left corner of the field.
pub mod consts {
    /// Play-field dimensions
    pub const GAME_WIDTH: f32 = 800.0;
    pub const GAME_HEIGHT: f32 = 700.0;

    /// Ship defaults
    pub const SHIP_WIDTH: f32 = 44.0;
    pub const SHIP_HEIGHT: f32 = 44.0;
    /// Centre y of a freshly spawned ship
    pub const SHIP_BOTTOM: f32 = 32.0;
    /// Lateral distance per frame while a direction is held
    pub const SHIP_MOVEMENT: f32 = 5.0;
    pub const SHIP_LIVES: u32 = 3;

    /// Horizontal line the aliens must not reach
    pub const DEFENSE_LINE: f32 = 100.0;

    /// Alien defaults
    pub const ALIEN_WIDTH: f32 = 33.0;
    pub const ALIEN_HEIGHT: f32 = 33.0;
    pub const ALIEN_H_SEP: f32 = 16.0;
    pub const ALIEN_V_SEP: f32 = 16.0;
    /// Gap between the top of the field and the first row
    pub const ALIEN_CEILING: f32 = 100.0;
    pub const ALIEN_ROWS: usize = 5;
    pub const ALIENS_IN_ROW: usize = 12;
    pub const ALIEN_H_WALK: f32 = 8.0; // ALIEN_WIDTH / 4, floored
    pub const ALIEN_V_WALK: f32 = 16.0; // ALIEN_HEIGHT / 2, floored
    /// Seconds between formation steps
    pub const ALIEN_SPEED: f32 = 1.0;

    /// Bolt defaults
    pub const BOLT_WIDTH: f32 = 4.0;
    pub const BOLT_HEIGHT: f32 = 16.0;
    /// Vertical distance per frame
    pub const BOLT_SPEED: f32 = 10.0;
    /// Upper bound (inclusive) on formation steps between alien shots
    pub const BOLT_RATE: u32 = 5;

    /// Score tiers
    pub const UPPER_TIER_POINTS: u64 = 20;
    pub const LOWER_TIER_POINTS: u64 = 10;
}
