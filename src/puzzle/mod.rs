//! Crossword grids, their word slots and candidate words

pub use self::crossword::{Crossword, Overlap};
pub use self::solution::{Solution, SolutionDisplay};
pub use self::variable::{Direction, Variable, VariableId};
pub use self::words::{Word, WordId, WordList};

pub mod error;

mod crossword;
mod parse;
mod solution;
mod variable;
mod words;
