//! Alien formation: grid, marching and firing policy
//!
//! The grid keeps its rows x columns shape for the whole wave. A destroyed
//! alien leaves an empty cell behind; nothing ever shifts.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::BoltTarget;
use super::entities::{Alien, AlienVariant, Bolt};
use crate::tuning::Tuning;

/// Dense row-major grid of optional aliens (row 0 is the top row)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlienGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Alien>>,
}

impl AlienGrid {
    /// Spawn a full formation in its starting layout
    pub fn new(tuning: &Tuning) -> Self {
        let (rows, cols) = (tuning.alien_rows, tuning.aliens_in_row);
        let size = Vec2::new(tuning.alien_width, tuning.alien_height);
        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let variant = AlienVariant::for_row(row, rows);
            for col in 0..cols {
                let pos = Vec2::new(tuning.column_x(col), tuning.row_y(row));
                cells.push(Some(Alien::new(pos, size, variant)));
            }
        }
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) outside {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Alien> {
        self.cells[self.index(row, col)].as_ref()
    }

    /// Destroy the alien in a cell, returning it if one was there
    pub fn tombstone(&mut self, row: usize, col: usize) -> Option<Alien> {
        let i = self.index(row, col);
        self.cells[i].take()
    }

    /// Live aliens with their (row, col), in row-major order
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize, &Alien)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref().map(|alien| (i / self.cols, i % self.cols, alien))
        })
    }

    fn live_mut(&mut self) -> impl Iterator<Item = &mut Alien> + '_ {
        self.cells.iter_mut().flatten()
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// True once every cell is empty
    pub fn is_cleared(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    pub fn is_column_empty(&self, col: usize) -> bool {
        (0..self.rows).all(|row| self.get(row, col).is_none())
    }

    /// Whole-row emptiness (every cell in the row is checked)
    pub fn is_row_empty(&self, row: usize) -> bool {
        (0..self.cols).all(|col| self.get(row, col).is_none())
    }

    /// Lowest live alien in a column, with its row
    pub fn lowest_in_column(&self, col: usize) -> Option<(usize, &Alien)> {
        (0..self.rows)
            .rev()
            .find_map(|row| self.get(row, col).map(|alien| (row, alien)))
    }

    /// Lowest non-empty row
    pub fn lowest_occupied_row(&self) -> Option<usize> {
        (0..self.rows).rev().find(|&row| !self.is_row_empty(row))
    }

    /// Boundary aliens: (rightmost occupied column, leftmost occupied column)
    pub fn boundary_aliens(&self) -> Option<(&Alien, &Alien)> {
        let right = (0..self.cols).rev().find_map(|col| self.lowest_in_column(col))?;
        let left = (0..self.cols).find_map(|col| self.lowest_in_column(col))?;
        Some((right.1, left.1))
    }

    /// First live alien (row-major) a bolt collides with
    pub fn first_hit(&self, bolt: &Bolt) -> Option<(usize, usize)> {
        self.iter_live()
            .find(|(_, _, alien)| alien.collides(bolt))
            .map(|(row, col, _)| (row, col))
    }
}

/// Direction the formation is advancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarchDirection {
    Right,
    Left,
}

impl MarchDirection {
    fn flipped(self) -> Self {
        match self {
            MarchDirection::Right => MarchDirection::Left,
            MarchDirection::Left => MarchDirection::Right,
        }
    }
}

/// What the previous step was; decides which edge is tested next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropState {
    JustMovedDown,
    SweepingRight,
    SweepingLeft,
}

/// A single formation step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarchStep {
    Lateral(MarchDirection),
    Drop,
}

/// Marching clock and firing cadence, owned by the formation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarchState {
    pub direction: MarchDirection,
    pub drop_state: DropState,
    /// Seconds since the last step
    pub elapsed: f32,
    /// Steps taken since the last alien shot
    pub steps_since_shot: u32,
    /// Step count at which the next shot fires (1..=bolt_rate)
    pub shot_target: u32,
}

impl MarchState {
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            direction: MarchDirection::Right,
            drop_state: DropState::SweepingRight,
            elapsed: 0.0,
            steps_since_shot: 0,
            shot_target: draw_shot_target(tuning, rng),
        }
    }
}

fn draw_shot_target<R: Rng>(tuning: &Tuning, rng: &mut R) -> u32 {
    rng.random_range(1..=tuning.bolt_rate)
}

/// The alien grid plus its shared marching state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    grid: AlienGrid,
    march: MarchState,
}

impl Formation {
    pub fn new<R: Rng>(tuning: &Tuning, rng: &mut R) -> Self {
        Self {
            grid: AlienGrid::new(tuning),
            march: MarchState::new(tuning, rng),
        }
    }

    pub fn grid(&self) -> &AlienGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut AlienGrid {
        &mut self.grid
    }

    pub fn march_state(&self) -> &MarchState {
        &self.march
    }

    pub fn march_state_mut(&mut self) -> &mut MarchState {
        &mut self.march
    }

    /// Accumulate frame time toward the next step
    pub fn add_time(&mut self, dt: f32) {
        self.march.elapsed += dt;
    }

    /// Take one step if the step interval has elapsed
    ///
    /// Returns the step taken. An empty grid has no boundary aliens, so the
    /// clock resets but nothing moves and no step is counted.
    pub fn march(&mut self, tuning: &Tuning) -> Option<MarchStep> {
        if self.march.elapsed <= tuning.alien_speed {
            return None;
        }
        self.march.elapsed = 0.0;

        let step = self.next_step(tuning)?;
        match step {
            MarchStep::Lateral(dir) => {
                let dx = match dir {
                    MarchDirection::Right => tuning.alien_h_walk,
                    MarchDirection::Left => -tuning.alien_h_walk,
                };
                for alien in self.grid.live_mut() {
                    alien.pos.x += dx;
                }
                self.march.drop_state = match dir {
                    MarchDirection::Right => DropState::SweepingRight,
                    MarchDirection::Left => DropState::SweepingLeft,
                };
            }
            MarchStep::Drop => {
                for alien in self.grid.live_mut() {
                    alien.pos.y -= tuning.alien_v_walk;
                }
                self.march.direction = self.march.direction.flipped();
                self.march.drop_state = DropState::JustMovedDown;
            }
        }
        self.march.steps_since_shot += 1;
        log::trace!("formation step {:?}", step);
        Some(step)
    }

    fn next_step(&self, tuning: &Tuning) -> Option<MarchStep> {
        let (right, left) = self.grid.boundary_aliens()?;
        let margin = tuning.alien_h_sep + tuning.alien_width / 2.0;

        let step = match self.march.drop_state {
            DropState::SweepingRight if right.pos.x > tuning.field_width - margin => MarchStep::Drop,
            DropState::SweepingLeft if left.pos.x < margin => MarchStep::Drop,
            _ => MarchStep::Lateral(self.march.direction),
        };
        Some(step)
    }

    /// Fire if enough steps have passed, returning the bolt origin
    ///
    /// Picks a random non-empty column and shoots from its lowest alien. An
    /// alien that has marched off the field (below it or past the left edge)
    /// cannot fire.
    pub fn take_shot<R: Rng>(&mut self, tuning: &Tuning, rng: &mut R) -> Option<Vec2> {
        if self.march.steps_since_shot < self.march.shot_target {
            return None;
        }
        self.march.steps_since_shot = 0;
        self.march.shot_target = draw_shot_target(tuning, rng);

        let columns: Vec<usize> = (0..self.grid.cols())
            .filter(|&col| !self.grid.is_column_empty(col))
            .collect();
        if columns.is_empty() {
            return None;
        }
        let col = columns[rng.random_range(0..columns.len())];
        let (_, shooter) = self.grid.lowest_in_column(col)?;
        shooter.pos.cmpge(Vec2::ZERO).all().then_some(shooter.pos)
    }
}
