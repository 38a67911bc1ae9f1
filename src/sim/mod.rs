//! Deterministic wave simulation
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only from the caller's frame delta
//! - Seeded RNG only
//! - Stable iteration order (row-major grid, insertion-order bolts)
//! - No rendering, audio or platform dependencies beyond the sink traits

pub mod bolts;
pub mod collision;
pub mod entities;
pub mod formation;
pub mod wave;

pub use bolts::BoltPool;
pub use collision::{BoltTarget, corners_inside};
pub use entities::{Alien, AlienVariant, Bolt, BoltOwner, Bounds, Ship};
pub use formation::{AlienGrid, DropState, Formation, MarchDirection, MarchState, MarchStep};
pub use wave::Wave;
