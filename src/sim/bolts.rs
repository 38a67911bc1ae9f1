//! In-flight projectiles
//!
//! Bolts keep insertion order. The pool only ever adds, moves and removes;
//! a bolt's velocity and owner never change after spawn.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entities::{Bolt, BoltOwner};
use crate::tuning::Tuning;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoltPool {
    bolts: Vec<Bolt>,
}

impl BoltPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.bolts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bolts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bolt> {
        self.bolts.iter()
    }

    pub fn has_player_bolt(&self) -> bool {
        self.bolts.iter().any(Bolt::is_player_bolt)
    }

    /// Spawn a player bolt moving up, unless one is already in flight
    pub fn spawn_player(&mut self, origin: Vec2, tuning: &Tuning) -> bool {
        if self.has_player_bolt() {
            return false;
        }
        self.push(Bolt::new(origin, bolt_size(tuning), tuning.bolt_speed, BoltOwner::Player));
        true
    }

    /// Spawn an alien bolt moving down
    pub fn spawn_alien(&mut self, origin: Vec2, tuning: &Tuning) {
        self.push(Bolt::new(origin, bolt_size(tuning), -tuning.bolt_speed, BoltOwner::Alien));
    }

    /// Add an already-built bolt at the end of the pool
    pub fn push(&mut self, bolt: Bolt) {
        self.bolts.push(bolt);
    }

    pub fn remove(&mut self, index: usize) -> Bolt {
        self.bolts.remove(index)
    }

    /// Move every bolt one frame
    pub fn advance(&mut self) {
        for bolt in &mut self.bolts {
            bolt.advance();
        }
    }

    /// Drop bolts that have fully left the field; returns how many
    pub fn cull(&mut self, tuning: &Tuning) -> usize {
        let before = self.bolts.len();
        let top = tuning.field_height + tuning.bolt_height / 2.0;
        let bottom = -tuning.bolt_height / 2.0;
        self.bolts.retain(|b| {
            let y = b.pos().y;
            y <= top && y >= bottom
        });
        before - self.bolts.len()
    }
}

fn bolt_size(tuning: &Tuning) -> Vec2 {
    Vec2::new(tuning.bolt_width, tuning.bolt_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_player_bolt() {
        let tuning = Tuning::default();
        let mut pool = BoltPool::new();
        assert!(pool.spawn_player(Vec2::new(400.0, 54.0), &tuning));
        assert!(!pool.spawn_player(Vec2::new(400.0, 54.0), &tuning));
        pool.spawn_alien(Vec2::new(100.0, 400.0), &tuning);
        pool.spawn_alien(Vec2::new(120.0, 400.0), &tuning);
        assert_eq!(pool.len(), 3);
        assert_eq!(pool.iter().filter(|b| b.is_player_bolt()).count(), 1);
    }

    #[test]
    fn test_advance_uses_signed_velocity() {
        let tuning = Tuning::default();
        let mut pool = BoltPool::new();
        pool.spawn_player(Vec2::new(400.0, 54.0), &tuning);
        pool.spawn_alien(Vec2::new(100.0, 400.0), &tuning);
        pool.advance();
        let ys: Vec<f32> = pool.iter().map(|b| b.pos().y).collect();
        assert_eq!(ys, vec![64.0, 390.0]);
    }

    #[test]
    fn test_cull_off_both_edges() {
        let tuning = Tuning::default();
        let mut pool = BoltPool::new();
        pool.spawn_player(Vec2::new(400.0, tuning.field_height + 5.0), &tuning);
        pool.spawn_alien(Vec2::new(100.0, 3.0), &tuning);
        pool.spawn_alien(Vec2::new(200.0, 300.0), &tuning);

        pool.advance();
        // Player bolt at 715 > 708, alien bolt at -7 still inside the margin
        assert_eq!(pool.cull(&tuning), 1);
        pool.advance();
        // Alien bolt at -17 < -8
        assert_eq!(pool.cull(&tuning), 1);
        assert_eq!(pool.len(), 1);
        assert!(!pool.has_player_bolt());
    }
}
