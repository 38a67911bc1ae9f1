//! Data-driven game balance
//!
//! Every number the wave simulation uses lives here, so a host can swap in a
//! JSON document without recompiling. Missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Gameplay constants for one wave
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    /// y-coordinate of the defense line
    pub defense_line: f32,

    // === Ship ===
    pub ship_width: f32,
    pub ship_height: f32,
    /// Centre y where the ship (re)spawns
    pub ship_bottom: f32,
    /// Lateral distance per frame
    pub ship_movement: f32,
    pub ship_lives: u32,

    // === Formation ===
    pub alien_width: f32,
    pub alien_height: f32,
    pub alien_h_sep: f32,
    pub alien_v_sep: f32,
    pub alien_ceiling: f32,
    pub alien_rows: usize,
    pub aliens_in_row: usize,
    pub alien_h_walk: f32,
    pub alien_v_walk: f32,
    /// Seconds between formation steps
    pub alien_speed: f32,

    // === Bolts ===
    pub bolt_width: f32,
    pub bolt_height: f32,
    pub bolt_speed: f32,
    /// Alien shots happen every 1..=bolt_rate steps
    pub bolt_rate: u32,

    // === Scoring ===
    pub upper_tier_points: u64,
    pub lower_tier_points: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: GAME_WIDTH,
            field_height: GAME_HEIGHT,
            defense_line: DEFENSE_LINE,

            ship_width: SHIP_WIDTH,
            ship_height: SHIP_HEIGHT,
            ship_bottom: SHIP_BOTTOM,
            ship_movement: SHIP_MOVEMENT,
            ship_lives: SHIP_LIVES,

            alien_width: ALIEN_WIDTH,
            alien_height: ALIEN_HEIGHT,
            alien_h_sep: ALIEN_H_SEP,
            alien_v_sep: ALIEN_V_SEP,
            alien_ceiling: ALIEN_CEILING,
            alien_rows: ALIEN_ROWS,
            aliens_in_row: ALIENS_IN_ROW,
            alien_h_walk: ALIEN_H_WALK,
            alien_v_walk: ALIEN_V_WALK,
            alien_speed: ALIEN_SPEED,

            bolt_width: BOLT_WIDTH,
            bolt_height: BOLT_HEIGHT,
            bolt_speed: BOLT_SPEED,
            bolt_rate: BOLT_RATE,

            upper_tier_points: UPPER_TIER_POINTS,
            lower_tier_points: LOWER_TIER_POINTS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON tuning document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Serialize to pretty JSON (for writing a starter file)
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the values describe a wave the engine can run
    pub fn validate(&self) -> ConfigResult<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("ship_movement", self.ship_movement),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("alien_h_walk", self.alien_h_walk),
            ("alien_v_walk", self.alien_v_walk),
            ("alien_speed", self.alien_speed),
            ("bolt_width", self.bolt_width),
            ("bolt_height", self.bolt_height),
            ("bolt_speed", self.bolt_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::invalid(field, format!("must be > 0, got {value}")));
            }
        }

        let non_negative = [
            ("alien_h_sep", self.alien_h_sep),
            ("alien_v_sep", self.alien_v_sep),
            ("alien_ceiling", self.alien_ceiling),
            ("ship_bottom", self.ship_bottom),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::invalid(field, format!("must be >= 0, got {value}")));
            }
        }

        if self.alien_rows == 0 {
            return Err(ConfigError::invalid("alien_rows", "need at least one row"));
        }
        if self.aliens_in_row == 0 {
            return Err(ConfigError::invalid("aliens_in_row", "need at least one column"));
        }
        if self.ship_lives == 0 {
            return Err(ConfigError::invalid("ship_lives", "need at least one life"));
        }
        if self.bolt_rate == 0 {
            return Err(ConfigError::invalid("bolt_rate", "must be >= 1"));
        }

        if !self.defense_line.is_finite()
            || self.defense_line < 0.0
            || self.defense_line > self.field_height
        {
            return Err(ConfigError::invalid(
                "defense_line",
                format!("must lie within 0..={}", self.field_height),
            ));
        }

        let right_edge = self.column_x(self.aliens_in_row - 1) + self.alien_width / 2.0;
        if right_edge > self.field_width {
            return Err(ConfigError::invalid(
                "aliens_in_row",
                format!(
                    "formation spans {right_edge} but the field is {} wide",
                    self.field_width
                ),
            ));
        }

        let bottom_edge = self.row_y(self.alien_rows - 1) - self.alien_height / 2.0;
        if bottom_edge < 0.0 {
            return Err(ConfigError::invalid(
                "alien_rows",
                format!("formation extends below the field (bottom edge {bottom_edge})"),
            ));
        }

        if self.ship_width > self.field_width {
            return Err(ConfigError::invalid("ship_width", "wider than the field"));
        }

        Ok(())
    }

    /// Initial centre x of a formation column
    pub fn column_x(&self, col: usize) -> f32 {
        let c = col as f32;
        (c + 2.0) * self.alien_h_sep + c * self.alien_width
    }

    /// Initial centre y of a formation row (row 0 is the top row)
    pub fn row_y(&self, row: usize) -> f32 {
        let r = row as f32;
        self.field_height - (self.alien_ceiling + r * self.alien_v_sep + r * self.alien_height)
    }

    /// Where a new ship appears
    pub fn ship_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.field_width / 2.0, self.ship_bottom)
    }

    /// Points awarded for destroying an alien in `row`
    pub fn points_for_row(&self, row: usize) -> u64 {
        if row < self.alien_rows / 2 {
            self.upper_tier_points
        } else {
            self.lower_tier_points
        }
    }
}
