use std::str::FromStr;

use thiserror::Error;

use crate::rect::Rect;
use crate::vec2::Vec2;

use super::collision::{CollisionError, Resolver};

/// Movement intent of the ball for a tick.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
pub enum Heading {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    /// Unit vector of the heading in screen space (`y` pointing down).
    pub fn to_vec2(self) -> Vec2 {
        match self {
            Heading::None => Vec2::ZERO,
            Heading::Left => Vec2::new(-1.0, 0.0),
            Heading::Right => Vec2::new(1.0, 0.0),
            Heading::Up => Vec2::new(0.0, -1.0),
            Heading::Down => Vec2::new(0.0, 1.0),
        }
    }

    /// Distance travelled at `speed` (units per second) during `elapsed` seconds.
    pub fn displacement(self, speed: f32, elapsed: f32) -> Vec2 {
        self.to_vec2() * (speed * elapsed)
    }
}

impl FromStr for Heading {
    type Err = HeadingError;

    /// Accepts `left`, `right`, `up`, `down`, and `none` or the empty string for no movement.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Heading::None),
            "left" => Ok(Heading::Left),
            "right" => Ok(Heading::Right),
            "up" => Ok(Heading::Up),
            "down" => Ok(Heading::Down),
            other => Err(HeadingError::InvalidDirection(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum HeadingError {
    #[error("invalid direction '{0}', expected one of left, right, up, down or none")]
    InvalidDirection(String),
}

/// The player's ball.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ball {
    position: Vec2,
    radius: f32,
    heading: Heading,
    speed: f32,
}

impl Ball {
    pub const DEFAULT_SPEED: f32 = 100.0;

    pub fn new(position: Vec2, radius: f32) -> Self {
        Ball {
            position,
            radius,
            heading: Heading::None,
            speed: Self::DEFAULT_SPEED,
        }
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Teleport the ball, e.g. when it is placed into a new maze.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn set_heading(&mut self, heading: Heading) {
        self.heading = heading;
    }

    /// Parse `token` as a [`Heading`] and steer the ball. On error the heading is unchanged.
    pub fn steer(&mut self, token: &str) -> Result<(), HeadingError> {
        self.heading = token.parse()?;
        Ok(())
    }

    /// Advance the ball by one tick of `elapsed` seconds and return true if a wall stopped it.
    ///
    /// `elapsed` must be finite and not negative. On error the ball does not move.
    pub fn step<W: AsRef<Rect>>(
        &mut self,
        resolver: &Resolver,
        walls: &[W],
        elapsed: f32,
    ) -> Result<bool, CollisionError> {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(CollisionError::InvalidElapsed(elapsed));
        }
        let displacement = self.heading.displacement(self.speed, elapsed);
        let resolution = resolver.resolve(self.position, self.radius, displacement, walls)?;
        self.position = resolution.position;
        Ok(resolution.collided())
    }
}

/// The target the ball has to reach.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Goal {
    position: Vec2,
    radius: f32,
}

impl Goal {
    pub fn new(position: Vec2, radius: f32) -> Self {
        Goal { position, radius }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The circles overlap; touching is not enough.
    pub fn is_reached_by(&self, ball: &Ball) -> bool {
        self.position.distance(ball.position()) < self.radius + ball.radius()
    }
}
