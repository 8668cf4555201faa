use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rect::Rect;
use crate::vec2::Vec2;

/// Extra distance between a wall and a circle snapped against it.
///
/// After a snap the circle's bounding box ends one unit before the wall edge, so the next tick
/// does not see the same overlap again.
pub const SNAP_BUFFER: f32 = 1.0;

/// Which position measures how far the circle reaches towards a wall.
///
/// The side of the wall the circle is on is always decided by the position before the move.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Probe {
    /// Test the circle where it stands. The proposed displacement plays no part in the test,
    /// so a moving circle may enter a wall for one tick and is pushed out on the next.
    #[default]
    Resting,
    /// Test the circle's reach at the proposed position. A move that would cross into a wall
    /// is stopped in front of it.
    Swept,
}

/// Outcome of a single resolved move.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolution {
    /// The corrected position of the circle.
    pub position: Vec2,
    /// Index of the wall that stopped the move, if any.
    pub wall: Option<usize>,
}

impl Resolution {
    pub fn collided(&self) -> bool {
        self.wall.is_some()
    }
}

/// Resolves the movement of a circle against a list of axis-aligned walls.
///
/// Walls are checked in list order and the first one the circle collides with decides the
/// outcome; the rest are not looked at. A circle pressed against two walls at once is only
/// corrected against the earlier one.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Resolver {
    probe: Probe,
}

impl Resolver {
    pub fn new(probe: Probe) -> Self {
        Resolver { probe }
    }

    /// Move a circle of `radius` at `position` by `displacement`.
    ///
    /// If the circle collides with a wall the displacement is dropped and the circle is snapped
    /// to the outside of that wall (see [`contact`]). Otherwise the displaced position is
    /// returned unchanged.
    ///
    /// Returns [`CollisionError::NoWalls`] if `walls` is empty.
    pub fn resolve<W: AsRef<Rect>>(
        &self,
        position: Vec2,
        radius: f32,
        displacement: Vec2,
        walls: &[W],
    ) -> Result<Resolution, CollisionError> {
        if walls.is_empty() {
            return Err(CollisionError::NoWalls);
        }

        let tentative = position + displacement;
        let reach = match self.probe {
            Probe::Resting => position,
            Probe::Swept => tentative,
        };

        let hit = walls.iter().enumerate().find_map(|(index, wall)| {
            contact(wall.as_ref(), position, reach, radius).map(|snapped| (index, snapped))
        });

        Ok(match hit {
            Some((index, snapped)) => {
                trace!("circle at {position:?} hit wall #{index}, snapped to {snapped:?}");
                Resolution {
                    position: snapped,
                    wall: Some(index),
                }
            }
            None => Resolution {
                position: tentative,
                wall: None,
            },
        })
    }
}

/// Resolve a move with the default [`Resolver`].
pub fn resolve_move<W: AsRef<Rect>>(
    position: Vec2,
    radius: f32,
    displacement: Vec2,
    walls: &[W],
) -> Result<Resolution, CollisionError> {
    Resolver::default().resolve(position, radius, displacement, walls)
}

/// Test a circle against a single wall and return the snapped position on a collision.
///
/// The circle is treated as its bounding box. Each axis is tested on its own: if `center` lies
/// before the wall's span and the box measured around `reach` extends past the near edge, the
/// axis collides and the coordinate is snapped to `edge - radius - SNAP_BUFFER` (mirrored for
/// the far edge). If `center` lies within the span, the axis collides without a correction.
/// The circle collides only if both axes do; the snapped position starts from `center`.
pub fn contact(wall: &Rect, center: Vec2, reach: Vec2, radius: f32) -> Option<Vec2> {
    let x = AxisContact::test(center.x, reach.x, radius, wall.left(), wall.right());
    let y = AxisContact::test(center.y, reach.y, radius, wall.top(), wall.bottom());

    let mut snapped = center;
    match (x, y) {
        (AxisContact::Clear, _) | (_, AxisContact::Clear) => return None,
        (x, y) => {
            if let AxisContact::Snap(value) = x {
                snapped.x = value;
            }
            if let AxisContact::Snap(value) = y {
                snapped.y = value;
            }
        }
    }
    Some(snapped)
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum AxisContact {
    Clear,
    Inside,
    Snap(f32),
}

impl AxisContact {
    fn test(center: f32, reach: f32, radius: f32, low: f32, high: f32) -> Self {
        if center < low {
            if reach + radius > low {
                AxisContact::Snap(low - radius - SNAP_BUFFER)
            } else {
                AxisContact::Clear
            }
        } else if center > high {
            if reach - radius < high {
                AxisContact::Snap(high + radius + SNAP_BUFFER)
            } else {
                AxisContact::Clear
            }
        } else {
            AxisContact::Inside
        }
    }
}

#[derive(Copy, Clone, Debug, Error, PartialEq)]
pub enum CollisionError {
    #[error("no walls to resolve the move against")]
    NoWalls,
    #[error("elapsed time must be finite and not negative, got {0}")]
    InvalidElapsed(f32),
}
