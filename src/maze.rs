//! Perfect mazes on a rectangular grid.
//!
//! A [`Maze`] is a grid of [`Cell`]s, each carrying a wall flag per [`Direction`]. Mazes are
//! created by a [`Generator`] (randomized recursive backtracking) and turned into wall
//! rectangles for collision and drawing by a [`Layout`].

mod generator;
mod layout;

use std::collections::VecDeque;

use thiserror::Error;

pub use generator::{Generator, generate};
pub use layout::{Layout, Wall};

use crate::coord::Coord;
use crate::direction::Direction;
use crate::grid::Grid;

/// One grid unit of the maze with a wall flag for each of its four sides.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Cell {
    walls: [bool; 4], // indexed by Direction
}

impl Cell {
    /// A cell with all four walls standing.
    pub const WALLED: Cell = Cell { walls: [true; 4] };

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls[direction.slot()]
    }

    pub fn is_open(&self, direction: Direction) -> bool {
        !self.has_wall(direction)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.iter().filter(|&&wall| wall).count()
    }

    fn knock_down(&mut self, direction: Direction) {
        self.walls[direction.slot()] = false;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::WALLED
    }
}

/// A maze of `width × height` cells.
///
/// Mazes produced by the [`Generator`] are perfect: the open edges form a spanning tree, so
/// there is exactly one path between any two cells and the outer boundary is fully walled.
/// Cells cannot be modified once the maze is handed out.
#[derive(Clone, Debug, PartialEq)]
pub struct Maze {
    cells: Grid<Cell>,
}

impl Maze {
    pub(crate) fn walled(width: usize, height: usize) -> Self {
        Maze {
            cells: Grid::filled(width, height, Cell::WALLED),
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Immutable access to the grid of cells.
    pub fn grid(&self) -> &Grid<Cell> {
        &self.cells
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord)
    }

    /// Return true if there is a passage from `coord` to its neighbor in `direction`.
    ///
    /// Only the flag of the cell at `coord` is consulted. Edges leading off the grid are never
    /// open.
    pub fn is_open(&self, coord: Coord, direction: Direction) -> bool {
        self.cells.contains(coord + direction.offset())
            && self.cells.get(coord).is_some_and(|cell| cell.is_open(direction))
    }

    /// Every passage exactly once, as the western or northern cell and the direction (east or
    /// south) towards its partner.
    pub fn passages(&self) -> impl Iterator<Item = (Coord, Direction)> + '_ {
        self.cells.coords().flat_map(move |coord| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter(move |&direction| self.is_open(coord, direction))
                .map(move |direction| (coord, direction))
        })
    }

    pub fn open_edge_count(&self) -> usize {
        self.passages().count()
    }

    /// Return true if every open side has a matching open side on the neighboring cell.
    pub fn is_symmetric(&self) -> bool {
        self.cells.indexed_iter().all(|(coord, cell)| {
            self.cells.neighbors(coord).all(|(direction, _, other)| {
                cell.is_open(direction) == other.is_open(direction.opposite())
            })
        })
    }

    /// Breadth-first search over open edges; return the number of cells reachable from `start`.
    pub fn reachable_from(&self, start: Coord) -> usize {
        if !self.cells.contains(start) {
            return 0;
        }

        let mut seen = Grid::filled(self.width(), self.height(), false);
        seen[start] = true;
        let mut queue = VecDeque::from([start]);
        let mut count = 0;

        while let Some(current) = queue.pop_front() {
            count += 1;
            for (direction, neighbor, _) in self.cells.neighbors(current) {
                if !seen[neighbor] && self.is_open(current, direction) {
                    seen[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        count
    }

    /// Return true if the open edges form a spanning tree over all cells.
    pub fn is_perfect(&self) -> bool {
        let cells = self.cells.cell_count();
        self.is_symmetric()
            && self.open_edge_count() == cells - 1
            && self.reachable_from(Coord::default()) == cells
    }

    /// Open the wall between `coord` and its neighbor in `direction` on both sides.
    ///
    /// Panics if the neighbor is not on the grid.
    pub(crate) fn carve(&mut self, coord: Coord, direction: Direction) {
        let neighbor = coord + direction.offset();
        self.cells[coord].knock_down(direction);
        self.cells[neighbor].knock_down(direction.opposite());
    }
}

#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum MazeError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
}
