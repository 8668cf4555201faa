use crate::coord::Coord;
use crate::direction::Direction;
use crate::rect::Rect;
use crate::vec2::Vec2;

use super::Maze;

/// Placement of a maze on screen: the size of a cell in pixels, the position of the top-left
/// corner of the maze and the thickness of the walls as a fraction of the cell size.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub cell_size: f32,
    pub origin: Vec2,
    pub thickness: f32,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: 20.0,
            origin: Vec2::new(50.0, 150.0),
            thickness: 0.1,
        }
    }
}

impl Layout {
    pub fn new(cell_size: f32, origin: Vec2) -> Self {
        Layout {
            cell_size,
            origin,
            ..Default::default()
        }
    }

    pub fn with_thickness(mut self, thickness: f32) -> Self {
        self.thickness = thickness;
        self
    }

    /// Top-left corner of a cell in pixels.
    pub fn cell_origin(&self, coord: Coord) -> Vec2 {
        self.origin + Vec2::new(coord.x as f32, coord.y as f32) * self.cell_size
    }

    pub fn cell_center(&self, coord: Coord) -> Vec2 {
        self.cell_origin(coord) + Vec2::splat(self.cell_size / 2.0)
    }

    /// The rectangle of the wall on side `side` of the cell at `coord`.
    ///
    /// Walls lie inside their cell: a western wall covers the leftmost `thickness` of the cell,
    /// an eastern wall the rightmost, and so on.
    pub fn wall_rect(&self, coord: Coord, side: Direction) -> Rect {
        let Vec2 { x: left, y: top } = self.cell_origin(coord);
        let size = self.cell_size;
        let t = size * self.thickness;
        match side {
            Direction::West => Rect::new(left, top, t, size),
            Direction::East => Rect::new(left + size - t, top, t, size),
            Direction::North => Rect::new(left, top, size, t),
            Direction::South => Rect::new(left, top + size - t, size, t),
        }
    }

    /// Build one wall for every standing wall flag of the maze.
    ///
    /// Cells are visited row by row, and every cell emits its walls in the order west, east,
    /// north, south. A wall shared by two cells is emitted by both of them.
    pub fn walls(&self, maze: &Maze) -> Vec<Wall> {
        const SIDES: [Direction; 4] = [
            Direction::West,
            Direction::East,
            Direction::North,
            Direction::South,
        ];

        maze.grid()
            .indexed_iter()
            .flat_map(|(cell, flags)| {
                SIDES
                    .into_iter()
                    .filter(move |&side| flags.has_wall(side))
                    .map(move |side| Wall {
                        rect: self.wall_rect(cell, side),
                        cell,
                        side,
                    })
            })
            .collect()
    }
}

/// A wall segment in screen space, tagged with the cell side it was built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Wall {
    rect: Rect,
    cell: Coord,
    side: Direction,
}

impl Wall {
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn cell(&self) -> Coord {
        self.cell
    }

    pub fn side(&self) -> Direction {
        self.side
    }
}

impl AsRef<Rect> for Wall {
    fn as_ref(&self) -> &Rect {
        &self.rect
    }
}
