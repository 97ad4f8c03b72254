use std::fmt;
use std::fmt::Display;

use crate::collections::Grid;
use crate::puzzle::{Crossword, VariableId};

const BLOCKED_SYMBOL: char = '█';

/// A word for every variable of a crossword, indexed by `VariableId`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    words: Vec<String>,
}

impl Solution {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    pub fn word(&self, id: VariableId) -> &str {
        &self.words[id]
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// The variables of the crossword paired with their words
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &str)> {
        self.words().enumerate()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The letter in every cell. Blocked cells and cells without a variable are `None`.
    pub fn letter_grid(&self, crossword: &Crossword) -> Grid<Option<char>> {
        let mut grid = Grid::with_value(crossword.width(), crossword.height(), None);
        for (id, word) in self.iter() {
            for (cell, letter) in crossword.variable(id).cells().zip(word.chars()) {
                grid[cell] = Some(letter);
            }
        }
        grid
    }

    /// Renders the filled grid as text
    pub fn display<'a>(&'a self, crossword: &'a Crossword) -> SolutionDisplay<'a> {
        SolutionDisplay {
            crossword,
            solution: self,
        }
    }
}

pub struct SolutionDisplay<'a> {
    crossword: &'a Crossword,
    solution: &'a Solution,
}

impl Display for SolutionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.solution.letter_grid(self.crossword);
        for (row, open_row) in letters.rows().zip(self.crossword.structure().rows()) {
            let line: String = row
                .iter()
                .zip(open_row)
                .map(|(letter, &open)| match (letter, open) {
                    (_, false) => BLOCKED_SYMBOL,
                    (Some(letter), true) => *letter,
                    (None, true) => ' ',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
