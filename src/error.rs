use thiserror::Error;

use crate::maze::MazeError;
use crate::options::OptionsError;
use crate::physics::{CollisionError, HeadingError};

/// Any error raised by the crate. All of them are rejected inputs; nothing is retried.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Maze(#[from] MazeError),
    #[error(transparent)]
    Collision(#[from] CollisionError),
    #[error(transparent)]
    Heading(#[from] HeadingError),
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type Result<T> = std::result::Result<T, Error>;
