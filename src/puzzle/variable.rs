use std::cmp::Ordering;
use std::fmt;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::collections::Coord;

/// Index of a variable in a `Crossword`, in grid order
pub type VariableId = usize;

/// The direction that a slot is read in
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// The coordinate `n` cells from `coord` in this direction
    pub fn advance(self, coord: Coord, n: usize) -> Coord {
        match self {
            Direction::Across => coord.right(n),
            Direction::Down => coord.down(n),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}

/// A slot in the crossword that must be filled with one word
///
/// Two variables are the same variable if they start at the same cell and go in the same direction.
/// The length is derived from the grid, so it does not take part in comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Variable {
    row: usize,
    col: usize,
    direction: Direction,
    length: usize,
}

impl Variable {
    pub fn new(row: usize, col: usize, direction: Direction, length: usize) -> Self {
        Self {
            row,
            col,
            direction,
            length,
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The number of letters in the slot
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn start(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// The coordinate of letter `k` of the slot
    pub fn cell(&self, k: usize) -> Coord {
        assert!(k < self.length, "{} is out of bounds for {}", k, self);
        self.direction.advance(self.start(), k)
    }

    /// The coordinates of the slot's letters in reading order
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let start = self.start();
        let direction = self.direction;
        (0..self.length).map(move |k| direction.advance(start, k))
    }

    fn key(&self) -> (usize, usize, Direction) {
        (self.row, self.col, self.direction)
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Variable {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Variable {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) {} : {}",
            self.row, self.col, self.direction, self.length
        )
    }
}

#[cfg(test)]
mod test {
    use super::{Direction, Variable};
    use crate::collections::Coord;
    use crate::HashSet;

    #[test]
    fn equality_ignores_length() {
        let a = Variable::new(1, 2, Direction::Across, 3);
        let b = Variable::new(1, 2, Direction::Across, 5);
        assert_eq!(a, b);
    }

    #[test]
    fn direction_distinguishes() {
        let across = Variable::new(0, 0, Direction::Across, 4);
        let down = Variable::new(0, 0, Direction::Down, 4);
        assert_ne!(across, down);
        let mut set = HashSet::default();
        set.insert(across);
        set.insert(down);
        assert_eq!(2, set.len());
    }

    #[test]
    fn grid_order() {
        let mut variables = vec![
            Variable::new(1, 0, Direction::Across, 3),
            Variable::new(0, 2, Direction::Down, 3),
            Variable::new(0, 0, Direction::Down, 3),
            Variable::new(0, 0, Direction::Across, 3),
        ];
        variables.sort();
        let keys: Vec<_> = variables
            .iter()
            .map(|v| (v.row(), v.col(), v.direction()))
            .collect();
        assert_eq!(
            vec![
                (0, 0, Direction::Across),
                (0, 0, Direction::Down),
                (0, 2, Direction::Down),
                (1, 0, Direction::Across),
            ],
            keys
        );
    }

    #[test]
    fn cells() {
        let down = Variable::new(1, 3, Direction::Down, 3);
        let cells: Vec<_> = down.cells().collect();
        assert_eq!(
            vec![Coord::new(1, 3), Coord::new(2, 3), Coord::new(3, 3)],
            cells
        );
        assert_eq!(Coord::new(3, 3), down.cell(2));
    }
}
