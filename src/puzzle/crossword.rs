use std::fmt;
use std::fmt::Display;
use std::fs;
use std::ops::Range;
use std::path::Path;

use itertools::Itertools;

use crate::collections::{Coord, Grid};
use crate::puzzle::error::{FromFileError, ParseError};
use crate::puzzle::parse::{parse_structure, BLOCKED_CELL, OPEN_CELL};
use crate::puzzle::{Direction, Solution, Variable, VariableId};
use crate::{HashMap, HashSet};

/// Slots shorter than this are not words
const MIN_VARIABLE_LENGTH: usize = 2;

/// The letter positions where two variables cross.
///
/// For `overlap(x, y) == Some(Overlap(i, j))`,
/// letter `i` of the word in `x` must equal letter `j` of the word in `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap(pub usize, pub usize);

impl Overlap {
    /// The same overlap seen from the other variable
    pub fn reverse(self) -> Self {
        Overlap(self.1, self.0)
    }
}

/// An unfilled crossword grid and the slots derived from it
#[derive(Debug)]
pub struct Crossword {
    /// `true` for open cells
    structure: Grid<bool>,
    /// every slot, in grid order
    variables: Vec<Variable>,
    overlaps: HashMap<(VariableId, VariableId), Overlap>,
    neighbors: Vec<Vec<VariableId>>,
}

impl Crossword {
    /// Creates a crossword from a grid where `true` marks an open cell
    pub fn new(structure: Grid<bool>) -> Self {
        let variables = find_variables(&structure);
        let overlaps = find_overlaps(&structure, &variables);
        let mut neighbors = vec![Vec::new(); variables.len()];
        for &(x, y) in overlaps.keys() {
            neighbors[x].push(y);
        }
        for list in &mut neighbors {
            list.sort_unstable();
        }
        debug!(
            "{}x{} crossword has {} variables and {} overlaps",
            structure.width(),
            structure.height(),
            variables.len(),
            overlaps.len() / 2
        );
        Self {
            structure,
            variables,
            overlaps,
            neighbors,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FromFileError> {
        let s = fs::read_to_string(path)?;
        let crossword = Self::parse(&s)?;
        Ok(crossword)
    }

    pub fn parse(s: &str) -> Result<Self, ParseError> {
        parse_structure(s)
    }

    pub fn width(&self) -> usize {
        self.structure.width()
    }

    pub fn height(&self) -> usize {
        self.structure.height()
    }

    pub fn structure(&self) -> &Grid<bool> {
        &self.structure
    }

    /// Returns false for blocked cells and cells outside of the grid
    pub fn is_open(&self, coord: Coord) -> bool {
        self.structure.get(coord).copied().unwrap_or(false)
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variable_ids(&self) -> Range<VariableId> {
        0..self.variables.len()
    }

    /// Finds the ID of the variable that starts at the same cell in the same direction
    pub fn find_variable(&self, variable: &Variable) -> Option<VariableId> {
        self.variables.binary_search(variable).ok()
    }

    pub fn overlap(&self, x: VariableId, y: VariableId) -> Option<Overlap> {
        self.overlaps.get(&(x, y)).copied()
    }

    /// Variables that share a cell with `x`, in ascending order
    pub fn neighbors(&self, x: VariableId) -> &[VariableId] {
        &self.neighbors[x]
    }

    /// The number of variables that share a cell with `x`
    pub fn degree(&self, x: VariableId) -> usize {
        self.neighbors[x].len()
    }

    /// Every ordered pair of overlapping variables
    pub fn arcs(&self) -> impl Iterator<Item = (VariableId, VariableId)> + '_ {
        self.neighbors
            .iter()
            .enumerate()
            .flat_map(|(x, neighbors)| neighbors.iter().map(move |&y| (x, y)))
    }

    /// Checks that every slot has a word of the right length, no word is used twice
    /// and crossing words agree
    pub fn verify_solution(&self, solution: &Solution) -> bool {
        if solution.len() != self.variables.len() {
            return false;
        }
        let lengths_match = self
            .variables
            .iter()
            .zip(solution.words())
            .all(|(variable, word)| word.chars().count() == variable.length());
        if !lengths_match {
            return false;
        }
        let mut used = HashSet::default();
        if !solution.words().all(|word| used.insert(word)) {
            return false;
        }
        self.overlaps.iter().all(|(&(x, y), &Overlap(i, j))| {
            solution.word(x).chars().nth(i) == solution.word(y).chars().nth(j)
        })
    }
}

fn find_variables(structure: &Grid<bool>) -> Vec<Variable> {
    let is_open = |coord: Coord| structure.get(coord).copied().unwrap_or(false);
    let mut variables = Vec::new();
    for (coord, &open) in structure.iter_coord() {
        if !open {
            continue;
        }
        for &direction in &Direction::ALL {
            let continues_run = match direction {
                Direction::Across => {
                    coord.col() > 0 && is_open(Coord::new(coord.row(), coord.col() - 1))
                }
                Direction::Down => {
                    coord.row() > 0 && is_open(Coord::new(coord.row() - 1, coord.col()))
                }
            };
            if continues_run {
                continue;
            }
            let length = (0..)
                .take_while(|&k| is_open(direction.advance(coord, k)))
                .count();
            if length >= MIN_VARIABLE_LENGTH {
                variables.push(Variable::new(coord.row(), coord.col(), direction, length));
            }
        }
    }
    variables.sort();
    variables
}

fn find_overlaps(
    structure: &Grid<bool>,
    variables: &[Variable],
) -> HashMap<(VariableId, VariableId), Overlap> {
    // for every cell, the variables covering it and the letter position of the cell in each
    let mut covering: Grid<Vec<(VariableId, usize)>> =
        Grid::with_value(structure.width(), structure.height(), Vec::new());
    for (id, variable) in variables.iter().enumerate() {
        for (k, cell) in variable.cells().enumerate() {
            covering[cell].push((id, k));
        }
    }
    let mut overlaps = HashMap::default();
    for (_, cell_variables) in covering.iter_coord() {
        for (&(x, i), &(y, j)) in cell_variables.iter().tuple_combinations() {
            overlaps.insert((x, y), Overlap(i, j));
            overlaps.insert((y, x), Overlap(j, i));
        }
    }
    overlaps
}

impl Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.structure.rows() {
            let line: String = row
                .iter()
                .map(|&open| if open { OPEN_CELL } else { BLOCKED_CELL })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Crossword, Overlap};
    use crate::puzzle::{Direction, Solution, Variable};

    fn plus_shape() -> Crossword {
        Crossword::parse(
            "\
            #_#\n\
            ___\n\
            #_#\n",
        )
        .unwrap()
    }

    #[test]
    fn variables() {
        let crossword = plus_shape();
        assert_eq!(
            &[
                Variable::new(0, 1, Direction::Down, 3),
                Variable::new(1, 0, Direction::Across, 3),
            ],
            crossword.variables()
        );
        assert_eq!(3, crossword.variable(0).length());
    }

    #[test]
    fn single_cells_are_not_variables() {
        let crossword = Crossword::parse("_#_\n#__\n").unwrap();
        assert_eq!(
            &[
                Variable::new(0, 2, Direction::Down, 2),
                Variable::new(1, 1, Direction::Across, 2),
            ],
            crossword.variables()
        );
    }

    #[test]
    fn overlaps_are_symmetric() {
        let crossword = plus_shape();
        assert_eq!(Some(Overlap(1, 1)), crossword.overlap(0, 1));
        assert_eq!(Some(Overlap(1, 1)), crossword.overlap(1, 0));
        assert_eq!(None, crossword.overlap(0, 0));

        let crossword = Crossword::parse("___\n_##\n_##\n").unwrap();
        let across = crossword
            .find_variable(&Variable::new(0, 0, Direction::Across, 3))
            .unwrap();
        let down = crossword
            .find_variable(&Variable::new(0, 0, Direction::Down, 3))
            .unwrap();
        assert_eq!(Some(Overlap(0, 0)), crossword.overlap(across, down));
    }

    #[test]
    fn corner_overlap_indices() {
        // across word ends where the down word starts
        let crossword = Crossword::parse("___\n##_\n##_\n").unwrap();
        let across = crossword
            .find_variable(&Variable::new(0, 0, Direction::Across, 3))
            .unwrap();
        let down = crossword
            .find_variable(&Variable::new(0, 2, Direction::Down, 3))
            .unwrap();
        assert_eq!(Some(Overlap(2, 0)), crossword.overlap(across, down));
        assert_eq!(Some(Overlap(0, 2)), crossword.overlap(down, across));
    }

    #[test]
    fn neighbors_and_arcs() {
        let crossword = Crossword::parse("___\n_#_\n___\n").unwrap();
        // (0,0) across, (0,0) down, (0,2) down, (2,0) across
        assert_eq!(4, crossword.variable_count());
        assert_eq!(&[1, 2], crossword.neighbors(0));
        assert_eq!(&[0, 3], crossword.neighbors(1));
        assert_eq!(2, crossword.degree(3));
        let arcs: Vec<_> = crossword.arcs().collect();
        assert_eq!(8, arcs.len());
        assert!(arcs.iter().all(|&(x, y)| crossword.overlap(x, y).is_some()));
    }

    #[test]
    fn verify_solution() {
        let crossword = plus_shape();
        let valid = Solution::new(vec!["cat".into(), "bar".into()]);
        assert!(crossword.verify_solution(&valid));
        let disagree = Solution::new(vec!["cat".into(), "bet".into()]);
        assert!(!crossword.verify_solution(&disagree));
        let wrong_length = Solution::new(vec!["cats".into(), "bar".into()]);
        assert!(!crossword.verify_solution(&wrong_length));
        let incomplete = Solution::new(vec!["cat".into()]);
        assert!(!crossword.verify_solution(&incomplete));
    }

    #[test]
    fn verify_solution_rejects_duplicates() {
        let crossword = Crossword::parse("___\n###\n___\n").unwrap();
        let solution = Solution::new(vec!["cat".into(), "cat".into()]);
        assert!(!crossword.verify_solution(&solution));
    }

    #[test]
    fn display() {
        let s = "#_#\n___\n#_#\n";
        assert_eq!(s, plus_shape().to_string());
    }
}
