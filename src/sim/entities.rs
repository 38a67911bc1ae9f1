//! Ship, alien and bolt entities
//!
//! Plain data positioned by centre point. Constructors check their
//! preconditions and panic on violation; nothing is silently clamped.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box, edges inclusive
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

fn assert_position(what: &str, pos: Vec2) {
    assert!(
        pos.is_finite() && pos.x >= 0.0 && pos.y >= 0.0,
        "{what} position must be finite and non-negative, got {pos}"
    );
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Ship {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        assert_position("ship", pos);
        Self { pos, size }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.pos, self.size)
    }

    /// Where a fired bolt appears (top centre of the hull)
    pub fn nose(&self) -> Vec2 {
        Vec2::new(self.pos.x, self.pos.y + self.size.y / 2.0)
    }
}

/// Cosmetic alien sprite; cycles every two rows counted from the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AlienVariant {
    #[default]
    Crab,
    Octopus,
    Squid,
}

impl AlienVariant {
    const CYCLE: [AlienVariant; 3] = [AlienVariant::Crab, AlienVariant::Octopus, AlienVariant::Squid];

    /// Variant for a grid row (row 0 is the top)
    pub fn for_row(row: usize, rows: usize) -> Self {
        let from_bottom = rows - 1 - row;
        Self::CYCLE[(from_bottom % (Self::CYCLE.len() * 2)) / 2]
    }
}

/// A single alien in the formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alien {
    pub pos: Vec2,
    pub size: Vec2,
    pub variant: AlienVariant,
}

impl Alien {
    pub fn new(pos: Vec2, size: Vec2, variant: AlienVariant) -> Self {
        assert_position("alien", pos);
        Self { pos, size, variant }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.pos, self.size)
    }

    /// y of the alien's lower edge
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }
}

/// Which side fired a bolt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoltOwner {
    Player,
    Alien,
}

/// A laser bolt
///
/// Velocity and owner are fixed at creation; only the position changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bolt {
    pos: Vec2,
    size: Vec2,
    velocity: f32,
    owner: BoltOwner,
}

impl Bolt {
    pub fn new(pos: Vec2, size: Vec2, velocity: f32, owner: BoltOwner) -> Self {
        assert_position("bolt", pos);
        assert!(
            velocity.is_finite() && velocity != 0.0,
            "bolt velocity must be finite and non-zero, got {velocity}"
        );
        Self {
            pos,
            size,
            velocity,
            owner,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Signed vertical velocity (per frame, y-up)
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn owner(&self) -> BoltOwner {
        self.owner
    }

    pub fn is_player_bolt(&self) -> bool {
        self.owner == BoltOwner::Player
    }

    /// Move one frame along the velocity
    pub fn advance(&mut self) {
        self.pos.y += self.velocity;
    }

    /// The four corner points sampled by collision
    pub fn corners(&self) -> [Vec2; 4] {
        let h = self.size / 2.0;
        let p = self.pos;
        [
            Vec2::new(p.x - h.x, p.y + h.y),
            Vec2::new(p.x - h.x, p.y - h.y),
            Vec2::new(p.x + h.x, p.y - h.y),
            Vec2::new(p.x + h.x, p.y + h.y),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        let b = Bounds::from_center(Vec2::new(10.0, 10.0), Vec2::new(4.0, 2.0));
        assert!(b.contains(Vec2::new(8.0, 9.0)));
        assert!(b.contains(Vec2::new(12.0, 11.0)));
        assert!(!b.contains(Vec2::new(12.1, 10.0)));
    }

    #[test]
    fn test_variant_cycles_in_row_pairs_from_bottom() {
        let rows = 5;
        let got: Vec<_> = (0..rows).map(|r| AlienVariant::for_row(r, rows)).collect();
        assert_eq!(
            got,
            vec![
                AlienVariant::Squid,
                AlienVariant::Octopus,
                AlienVariant::Octopus,
                AlienVariant::Crab,
                AlienVariant::Crab,
            ]
        );
    }

    #[test]
    fn test_bolt_advance_and_nose() {
        let ship = Ship::new(Vec2::new(400.0, 32.0), Vec2::new(44.0, 44.0));
        assert_eq!(ship.nose(), Vec2::new(400.0, 54.0));

        let mut bolt = Bolt::new(ship.nose(), Vec2::new(4.0, 16.0), 10.0, BoltOwner::Player);
        bolt.advance();
        assert_eq!(bolt.pos(), Vec2::new(400.0, 64.0));
        assert!(bolt.is_player_bolt());
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_negative_position_is_contract_failure() {
        Ship::new(Vec2::new(-1.0, 0.0), Vec2::splat(10.0));
    }

    #[test]
    #[should_panic(expected = "non-zero")]
    fn test_zero_velocity_is_contract_failure() {
        Bolt::new(Vec2::ZERO, Vec2::splat(1.0), 0.0, BoltOwner::Alien);
    }
}
