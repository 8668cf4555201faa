#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::physics::{Probe, SNAP_BUFFER};
use crate::vec2::Vec2;

/// The game options: maze size and placement, ball and goal sizes, and round timing.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Options {
    /// Number of cells per row.
    pub maze_width: usize,
    /// Number of cells per column.
    pub maze_height: usize,
    /// Edge length of a cell in pixels.
    pub cell_size: f32,
    /// Top-left corner of the maze in pixels.
    pub origin: Vec2,
    /// Wall thickness as a fraction of the cell size.
    pub wall_thickness: f32,
    pub ball_radius: f32,
    /// Ball speed in pixels per second.
    pub ball_speed: f32,
    pub goal_radius: f32,
    /// Length of a round in seconds.
    pub round_seconds: f32,
    pub rounds_per_game: u32,
    /// How moves are tested against walls.
    pub probe: Probe,
}

impl Default for Options {
    fn default() -> Self {
        // A 500x500 px board with the maze covering 80% of the width and half of the height.
        Self {
            maze_width: 20,
            maze_height: 12,
            cell_size: 20.0,
            origin: Vec2::new(50.0, 150.0),
            wall_thickness: 0.1,
            ball_radius: 5.0,
            ball_speed: 100.0,
            goal_radius: 3.0,
            round_seconds: 30.0,
            rounds_per_game: 3,
            probe: Probe::Resting,
        }
    }
}

impl Options {
    /// Check the options which the maze generator does not check itself.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let positive = [
            ("cell_size", self.cell_size),
            ("ball_radius", self.ball_radius),
            ("goal_radius", self.goal_radius),
            ("round_seconds", self.round_seconds),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(OptionsError::NotPositive { name, value });
            }
        }
        if !(self.ball_speed >= 0.0) {
            return Err(OptionsError::NotPositive {
                name: "ball_speed",
                value: self.ball_speed,
            });
        }
        if !(self.wall_thickness > 0.0 && self.wall_thickness <= 0.5) {
            return Err(OptionsError::WallThickness(self.wall_thickness));
        }
        // room between two walls of a corridor, measured from its middle
        let limit = self.cell_size * (0.5 - self.wall_thickness) - SNAP_BUFFER;
        if self.ball_radius >= limit {
            return Err(OptionsError::BallTooLarge {
                radius: self.ball_radius,
                limit,
            });
        }
        if self.rounds_per_game == 0 {
            return Err(OptionsError::NoRounds);
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("option '{name}' must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },
    #[error("wall thickness must be in (0, 0.5], got {0}")]
    WallThickness(f32),
    #[error("ball radius {radius} does not fit into a corridor, must be below {limit}")]
    BallTooLarge { radius: f32, limit: f32 },
    #[error("a game needs at least one round")]
    NoRounds,
}
