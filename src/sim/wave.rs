//! Wave controller
//!
//! Owns the ship, formation and bolts for one wave and advances them one
//! frame per [`Wave::update`]. The pipeline order is fixed:
//!
//! 1. move ship
//! 2. accumulate frame time
//! 3. march the formation
//! 4. spawn player bolt
//! 5. spawn alien bolt
//! 6. move bolts
//! 7. resolve bolt vs alien
//! 8. resolve bolt vs ship
//! 9. cull off-field bolts
//! 10. check for a cleared grid
//! 11. check the defense line
//!
//! Finishing does not stop the simulation; the host decides when to stop
//! calling `update`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bolts::BoltPool;
use super::collision::BoltTarget;
use super::entities::Ship;
use super::formation::{AlienGrid, Formation, MarchState, MarchStep};
use crate::audio::{AudioSink, NullAudio, SoundEffect};
use crate::input::{Control, InputState};
use crate::render::{DrawCommand, RenderSink};
use crate::tuning::Tuning;

/// One wave of the game
#[derive(Debug)]
pub struct Wave<A: AudioSink = NullAudio, R: Rng = Pcg32> {
    tuning: Tuning,
    /// `None` while the ship is destroyed and awaiting respawn
    ship: Option<Ship>,
    formation: Formation,
    bolts: BoltPool,
    lives: u32,
    score: u64,
    finished: bool,
    won: bool,
    rng: R,
    audio: A,
}

impl<A: AudioSink> Wave<A, Pcg32> {
    /// Create a wave with a seeded PCG generator
    pub fn new(tuning: Tuning, seed: u64, audio: A) -> Self {
        log::info!("Wave created with seed: {}", seed);
        Self::with_rng(tuning, Pcg32::seed_from_u64(seed), audio)
    }
}

impl<A: AudioSink, R: Rng> Wave<A, R> {
    /// Create a wave driven by any random generator
    ///
    /// # Panics
    /// If `tuning` fails [`Tuning::validate`].
    pub fn with_rng(tuning: Tuning, mut rng: R, audio: A) -> Self {
        if let Err(err) = tuning.validate() {
            panic!("invalid tuning: {err}");
        }
        let formation = Formation::new(&tuning, &mut rng);
        let ship = Some(Ship::new(tuning.ship_spawn(), ship_size(&tuning)));
        log::info!(
            "Wave: {}x{} aliens, {} lives",
            tuning.alien_rows,
            tuning.aliens_in_row,
            tuning.ship_lives
        );
        Self {
            lives: tuning.ship_lives,
            tuning,
            ship,
            formation,
            bolts: BoltPool::new(),
            score: 0,
            finished: false,
            won: false,
            rng,
            audio,
        }
    }

    /// Advance the wave by one frame
    ///
    /// # Panics
    /// If `dt` is negative or not finite.
    pub fn update<I: InputState + ?Sized>(&mut self, input: &I, dt: f32) {
        assert!(
            dt.is_finite() && dt >= 0.0,
            "frame delta must be finite and non-negative, got {dt}"
        );
        let was_finished = self.finished;

        self.move_ship(input);
        self.formation.add_time(dt);
        if let Some(MarchStep::Drop) = self.formation.march(&self.tuning) {
            log::debug!("Formation dropped, now heading {:?}", self.formation.march_state().direction);
        }
        self.spawn_player_bolt(input);
        self.spawn_alien_bolt();
        self.bolts.advance();
        self.resolve_alien_hits();
        self.resolve_ship_hits();
        self.bolts.cull(&self.tuning);
        self.check_cleared();
        self.check_defense_line();

        if self.finished && !was_finished {
            log::info!(
                "Wave finished: {} (score {}, lives {})",
                if self.won { "won" } else { "lost" },
                self.score,
                self.lives
            );
        }
    }

    /// Emit draw requests: aliens, ship, defense line, bolts
    pub fn draw<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for (_, _, alien) in self.formation.grid().iter_live() {
            sink.draw(DrawCommand::Alien {
                pos: alien.pos,
                size: alien.size,
                variant: alien.variant,
            });
        }
        if let Some(ship) = &self.ship {
            sink.draw(DrawCommand::Ship {
                pos: ship.pos,
                size: ship.size,
            });
        }
        sink.draw(DrawCommand::DefenseLine {
            y: self.tuning.defense_line,
            width: self.tuning.field_width,
        });
        for bolt in self.bolts.iter() {
            sink.draw(DrawCommand::Bolt {
                pos: bolt.pos(),
                size: bolt.size(),
                owner: bolt.owner(),
            });
        }
    }

    /// Put a fresh ship at the spawn point
    pub fn respawn_ship(&mut self) {
        self.ship = Some(Ship::new(self.tuning.ship_spawn(), ship_size(&self.tuning)));
        log::debug!("Ship respawned ({} lives left)", self.lives);
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn finished(&self) -> bool {
        self.finished
    }

    /// Only meaningful once [`Wave::finished`] is true
    pub fn won(&self) -> bool {
        self.won
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.ship.as_ref()
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn grid(&self) -> &AlienGrid {
        self.formation.grid()
    }

    /// Direct grid access for scripted scenarios and debug tools
    pub fn grid_mut(&mut self) -> &mut AlienGrid {
        self.formation.grid_mut()
    }

    pub fn bolts(&self) -> &BoltPool {
        &self.bolts
    }

    /// Direct bolt access for scripted scenarios and debug tools
    pub fn bolts_mut(&mut self) -> &mut BoltPool {
        &mut self.bolts
    }

    pub fn march_state(&self) -> &MarchState {
        self.formation.march_state()
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    fn move_ship<I: InputState + ?Sized>(&mut self, input: &I) {
        let Some(ship) = &mut self.ship else { return };

        let mut dx = 0.0;
        if input.is_held(Control::Left) {
            dx -= self.tuning.ship_movement;
        }
        if input.is_held(Control::Right) {
            dx += self.tuning.ship_movement;
        }

        let new_x = ship.pos.x + dx;
        let half = self.tuning.ship_width / 2.0;
        if new_x > self.tuning.field_width - half || new_x < half {
            return;
        }
        ship.pos.x = new_x;
    }

    fn spawn_player_bolt<I: InputState + ?Sized>(&mut self, input: &I) {
        let Some(ship) = &self.ship else { return };
        if !input.is_held(Control::Fire) {
            return;
        }
        if self.bolts.spawn_player(ship.nose(), &self.tuning) {
            self.audio.play(SoundEffect::PlayerFire);
        }
    }

    fn spawn_alien_bolt(&mut self) {
        if let Some(origin) = self.formation.take_shot(&self.tuning, &mut self.rng) {
            self.bolts.spawn_alien(origin, &self.tuning);
            self.audio.play(SoundEffect::AlienFire);
        }
    }

    /// At most one alien falls per frame
    fn resolve_alien_hits(&mut self) {
        let hit = self
            .bolts
            .iter()
            .enumerate()
            .filter(|(_, bolt)| bolt.is_player_bolt())
            .find_map(|(i, bolt)| self.formation.grid().first_hit(bolt).map(|cell| (i, cell)));

        let Some((bolt_idx, (row, col))) = hit else { return };
        self.formation.grid_mut().tombstone(row, col);
        self.bolts.remove(bolt_idx);
        let points = self.tuning.points_for_row(row);
        self.score += points;
        self.audio.play(SoundEffect::AlienDestroyed);
        log::debug!("Alien ({}, {}) destroyed, +{} -> {}", row, col, points, self.score);
    }

    fn resolve_ship_hits(&mut self) {
        let Some(ship) = &self.ship else { return };
        let Some(bolt_idx) = self.bolts.iter().position(|bolt| ship.collides(bolt)) else {
            return;
        };

        self.ship = None;
        self.bolts.remove(bolt_idx);
        self.lives = self.lives.saturating_sub(1);
        self.audio.play(SoundEffect::ShipDestroyed);
        log::debug!("Ship destroyed, {} lives left", self.lives);

        if self.lives == 0 {
            self.finished = true;
            self.won = false;
        }
    }

    /// A cleared grid wins, unless the last life went in the same frame
    fn check_cleared(&mut self) {
        if self.formation.grid().is_cleared() {
            self.finished = true;
            self.won = self.lives > 0;
        }
    }

    /// Only the lowest occupied row can be the first to reach the line
    fn check_defense_line(&mut self) {
        let grid = self.formation.grid();
        let Some(row) = grid.lowest_occupied_row() else { return };
        let breached = (0..grid.cols())
            .filter_map(|col| grid.get(row, col))
            .any(|alien| alien.bottom() <= self.tuning.defense_line);
        if breached {
            self.finished = true;
        }
    }
}

fn ship_size(tuning: &Tuning) -> Vec2 {
    Vec2::new(tuning.ship_width, tuning.ship_height)
}
