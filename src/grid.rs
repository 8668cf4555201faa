use strum::IntoEnumIterator;

use crate::coord::Coord;
use crate::direction::Direction;

/// A dense, row-major grid of cells.
/// The cell at `(0, 0)` is the top-left one; `x` indexes columns and `y` indexes rows.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    data: Vec<T>,
}

impl<T: Clone> Grid<T> {
    pub fn filled(width: usize, height: usize, value: T) -> Self {
        Grid {
            width,
            height,
            data: vec![value; width * height],
        }
    }
}

impl<T> Grid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.data.len()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.offset(coord).map(|i| &self.data[i])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        match self.offset(coord) {
            Some(i) => Some(&mut self.data[i]),
            None => None,
        }
    }

    /// All coordinates of the grid in storage order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<T> {
        let width = self.width;
        (0..self.data.len()).map(move |i| Coord::from((i % width, i / width)))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn indexed_iter(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.data.iter())
    }

    /// In-bounds neighbors of `coord`, in the iteration order of [`Direction`].
    pub fn neighbors(&self, coord: Coord) -> impl Iterator<Item = (Direction, Coord, &T)> {
        Direction::iter().filter_map(move |direction| {
            let neighbor = coord + direction.offset();
            self.get(neighbor).map(|value| (direction, neighbor, value))
        })
    }

    fn offset(&self, coord: Coord) -> Option<usize> {
        self.contains(coord)
            .then(|| coord.y as usize * self.width + coord.x as usize)
    }
}

impl<T> std::ops::Index<Coord> for Grid<T> {
    type Output = T;

    /// Panics if index is out of bounds
    fn index(&self, index: Coord) -> &Self::Output {
        match self.get(index) {
            Some(value) => value,
            None => panic!("coordinate {index} is outside the {}x{} grid", self.width, self.height),
        }
    }
}

impl<T> std::ops::IndexMut<Coord> for Grid<T> {
    /// Panics if index is out of bounds
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let (width, height) = (self.width, self.height);
        match self.get_mut(index) {
            Some(value) => value,
            None => panic!("coordinate {index} is outside the {width}x{height} grid"),
        }
    }
}
