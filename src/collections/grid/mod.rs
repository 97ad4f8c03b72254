mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::Display;
use std::ops::{Index, IndexMut};

/// A container of elements laid out in rows and columns
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` of the specified dimensions and fill with a specified value
    pub fn with_value(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![value; width * height],
        }
    }

    /// Create a `Grid` from rows of equal length. Returns `None` if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let elements = rows.into_iter().flatten().collect();
        Some(Self {
            width,
            height,
            elements,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns true if the coordinate lies within the grid
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self.elements[self.index_of(coord)])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        let width = self.width;
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (Coord::new(i / width, i % width), e))
    }

    fn index_of(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "{:?} is outside of a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        coord.row() * self.width + coord.col()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.index_of(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.index_of(coord);
        &mut self.elements[index]
    }
}

impl<T: Display> Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for element in row {
                write!(f, "{}", element)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
