//! Bolt collision detection
//!
//! A target counts as hit when any of the bolt's four corners lies inside the
//! target's bounds. This is a sampling approximation, not a full rectangle
//! intersection: a bolt wider than its target can straddle it with every
//! corner outside and pass through untouched.

use super::entities::{Alien, Bolt, BoltOwner, Bounds, Ship};

/// True if any corner of `bolt` falls inside `bounds`
pub fn corners_inside(bounds: &Bounds, bolt: &Bolt) -> bool {
    bolt.corners().iter().any(|&corner| bounds.contains(corner))
}

/// Something a bolt can destroy
pub trait BoltTarget {
    /// Bolts from this side are the only ones that register
    const HOSTILE: BoltOwner;

    fn bounds(&self) -> Bounds;

    /// Check collision with a bolt, ignoring friendly fire
    fn collides(&self, bolt: &Bolt) -> bool {
        bolt.owner() == Self::HOSTILE && corners_inside(&self.bounds(), bolt)
    }
}

impl BoltTarget for Ship {
    const HOSTILE: BoltOwner = BoltOwner::Alien;

    fn bounds(&self) -> Bounds {
        Ship::bounds(self)
    }
}

impl BoltTarget for Alien {
    const HOSTILE: BoltOwner = BoltOwner::Player;

    fn bounds(&self) -> Bounds {
        Alien::bounds(self)
    }
}
