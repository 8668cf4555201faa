//! Movement of the ball through the maze.
//!
//! The ball is a circle moving in screen space. Every tick its [`Heading`] is turned into a
//! displacement and a [`Resolver`] checks the move against the wall rectangles of the maze.

mod collision;
mod movement;

pub use collision::{CollisionError, Probe, Resolution, Resolver, SNAP_BUFFER, contact, resolve_move};
pub use movement::{Ball, Goal, Heading, HeadingError};
