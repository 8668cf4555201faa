use strum::EnumIter;

use crate::coord::Coord;

/// A side of a maze cell, and the way to the neighbor behind it.
///
/// Neighbors are always enumerated North, East, South, West. Seeded mazes depend on that order.
#[derive(Copy, Clone, Debug, EnumIter, Eq, PartialEq, Hash, strum::Display)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Grid offset of the neighbor on this side; `y` grows southwards.
    pub fn offset(self) -> Coord {
        match self {
            Direction::North => Coord::new(0, -1),
            Direction::East => Coord::new(1, 0),
            Direction::South => Coord::new(0, 1),
            Direction::West => Coord::new(-1, 0),
        }
    }

    /// The side of the neighbor that faces back.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Position of this side in a cell's wall flags.
    pub(crate) const fn slot(self) -> usize {
        self as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn clockwise_from_north() {
        let order: Vec<_> = Direction::iter().collect();
        assert_eq!(
            order,
            [Direction::North, Direction::East, Direction::South, Direction::West]
        );
        let slots: Vec<_> = order.iter().map(|side| side.slot()).collect();
        assert_eq!(slots, [0, 1, 2, 3]);
    }

    #[test]
    fn opposite_sides_cancel_out() {
        assert_eq!(Direction::North.opposite(), Direction::South);
        assert_eq!(Direction::West.opposite(), Direction::East);
        for side in Direction::iter() {
            assert_eq!(side.opposite().opposite(), side);
            assert_eq!(side.offset() + side.opposite().offset(), Coord::default());
        }
    }

    #[test]
    fn offsets_point_to_adjacent_cells() {
        let origin = Coord::new(3, 3);
        assert_eq!(origin + Direction::North.offset(), Coord::new(3, 2));
        assert_eq!(origin + Direction::East.offset(), Coord::new(4, 3));
        for side in Direction::iter() {
            let offset = side.offset();
            assert_eq!(offset.x.abs() + offset.y.abs(), 1);
        }
    }
}
