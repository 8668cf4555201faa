use log::debug;
use rand::prelude::*;

use crate::coord::Coord;
use crate::direction::Direction;
use crate::grid::Grid;

use super::{Maze, MazeError};

/// Creates random perfect mazes of a fixed size.
///
/// Use [`Generator::generate`] with any random source, or [`Generator::generate_seeded`] for a
/// reproducible maze.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Generator {
    width: usize,
    height: usize,
}

impl Generator {
    /// Return an error if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Generator { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Carve a maze by randomized recursive backtracking.
    ///
    /// The walk starts at the top-left cell and keeps an explicit stack of the cells on the
    /// current path. The cell on top of the stack is marked visited, then one of its unvisited
    /// neighbors (enumerated north, east, south, west) is chosen uniformly at random, the wall
    /// between them is removed and the neighbor is pushed. A cell without unvisited neighbors is
    /// popped. Every cell is pushed exactly once, so exactly `width * height - 1` walls are
    /// removed.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Maze {
        let mut maze = Maze::walled(self.width, self.height);
        let mut visited = Grid::filled(self.width, self.height, false);

        let mut stack = vec![Coord::default()];
        let mut carved = 0;

        while let Some(&current) = stack.last() {
            visited[current] = true;

            let unvisited: Vec<(Direction, Coord)> = visited
                .neighbors(current)
                .filter(|(_, _, seen)| !**seen)
                .map(|(direction, neighbor, _)| (direction, neighbor))
                .collect();

            match unvisited.choose(rng) {
                Some(&(direction, neighbor)) => {
                    maze.carve(current, direction);
                    stack.push(neighbor);
                    carved += 1;
                }
                None => {
                    stack.pop();
                }
            }
        }

        debug!(
            "generated {}x{} maze with {} passages",
            self.width, self.height, carved
        );
        maze
    }

    /// Generate a maze from a seeded [`StdRng`]. Equal seeds give equal mazes.
    pub fn generate_seeded(&self, seed: u64) -> Maze {
        self.generate(&mut StdRng::seed_from_u64(seed))
    }
}

/// Shorthand for `Generator::new(width, height)?.generate(rng)`.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Maze, MazeError> {
    Ok(Generator::new(width, height)?.generate(rng))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Generator::new(0, 4),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 4
            })
        );
        assert_eq!(
            Generator::new(4, 0),
            Err(MazeError::InvalidDimensions {
                width: 4,
                height: 0
            })
        );
        assert!(generate(0, 0, &mut rand::rng()).is_err());
    }

    #[test]
    fn three_by_three_is_a_spanning_tree() {
        let maze = Generator::new(3, 3).unwrap().generate_seeded(42);
        assert_eq!(maze.open_edge_count(), 8);
        assert_eq!(maze.reachable_from(Coord::default()), 9);
        assert!(maze.is_symmetric());
    }

    #[test]
    fn many_sizes_are_perfect() {
        let mut rng = StdRng::seed_from_u64(7);
        for (width, height) in [(1, 1), (1, 7), (7, 1), (2, 2), (5, 3), (20, 12), (31, 17)] {
            let maze = generate(width, height, &mut rng).unwrap();
            assert_eq!(maze.width(), width);
            assert_eq!(maze.height(), height);
            assert_eq!(maze.open_edge_count(), width * height - 1);
            assert!(maze.is_perfect(), "{width}x{height} maze is not perfect");
        }
    }

    #[test]
    fn boundary_stays_walled() {
        let maze = Generator::new(6, 4).unwrap().generate_seeded(3);
        for (coord, cell) in maze.grid().indexed_iter() {
            if coord.y == 0 {
                assert!(cell.has_wall(Direction::North));
            }
            if coord.y == 3 {
                assert!(cell.has_wall(Direction::South));
            }
            if coord.x == 0 {
                assert!(cell.has_wall(Direction::West));
            }
            if coord.x == 5 {
                assert!(cell.has_wall(Direction::East));
            }
        }
    }

    #[test]
    fn same_seed_same_maze() {
        let generator = Generator::new(12, 9).unwrap();
        assert_eq!(generator.generate_seeded(1234), generator.generate_seeded(1234));
    }

    #[test]
    fn different_seeds_usually_differ() {
        let generator = Generator::new(12, 9).unwrap();
        let first = generator.generate_seeded(1);
        let differing = (2..10)
            .filter(|&seed| generator.generate_seeded(seed) != first)
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn corridor_has_no_choice() {
        // A single row can only be carved west to east.
        let maze = generate(5, 1, &mut rand::rng()).unwrap();
        for x in 0..4 {
            assert!(maze.is_open(Coord::new(x, 0), Direction::East));
        }
    }
}
