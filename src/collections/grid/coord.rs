use std::fmt;
use std::fmt::{Debug, Display};

/// A `Coord` struct represents the row and column of an element in a `Grid`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord<T = usize>([T; 2]);

impl<T: Copy> Coord<T> {
    pub fn new(row: T, col: T) -> Self {
        Self([row, col])
    }

    pub fn row(self) -> T {
        self.0[0]
    }

    pub fn col(self) -> T {
        self.0[1]
    }
}

impl Coord<usize> {
    /// The coordinate `n` cells to the right
    pub fn right(self, n: usize) -> Self {
        Self::new(self.row(), self.col() + n)
    }

    /// The coordinate `n` cells below
    pub fn down(self, n: usize) -> Self {
        Self::new(self.row() + n, self.col())
    }
}

impl<T: Debug> Debug for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.0[0], self.0[1])
    }
}

impl<T: Display> Display for Coord<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}
