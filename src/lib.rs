//! Maze generation and ball-versus-wall collision for a ball rolling maze game, in pure Rust.
//!
//! Start reading the documentation with the module [`maze`], which creates random perfect
//! mazes and turns them into wall rectangles. The module [`physics`] moves a ball through those
//! walls, and [`session`] plays timed rounds with both.
//!

pub mod maze;
pub mod physics;
pub mod session;

mod coord;
mod direction;
mod error;
mod grid;
mod options;
mod rect;
mod vec2;

pub use crate::coord::Coord;
pub use crate::direction::Direction;
pub use crate::error::{Error, Result};
pub use crate::grid::Grid;
pub use crate::options::{Options, OptionsError};
pub use crate::rect::Rect;
pub use crate::vec2::Vec2;
