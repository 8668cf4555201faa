/// Discrete cell coordinate on the maze grid.
///
/// `x` grows to the right (east) and `y` grows downwards (south), so `(0, 0)` is the top-left
/// cell.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

impl From<(i32, i32)> for Coord {
    fn from(v: (i32, i32)) -> Self {
        Coord { x: v.0, y: v.1 }
    }
}

impl From<(usize, usize)> for Coord {
    fn from(v: (usize, usize)) -> Self {
        Coord {
            x: v.0 as i32,
            y: v.1 as i32,
        }
    }
}

impl std::ops::Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Coord {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Coord {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
