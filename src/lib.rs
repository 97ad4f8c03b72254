//! Fill crossword grids with words from a word list
//!
//! Filling a crossword is solved as a constraint satisfaction problem. Each slot in the grid is a
//! variable whose domain is the word list. Words of the wrong length are removed first, then arc
//! consistency prunes words that cannot agree with any crossing word, and a backtracking search
//! finds a complete assignment.

#![warn(rust_2018_idioms)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod image;
pub mod puzzle;
pub mod solve;

pub(crate) type HashMap<K, V> = ahash::AHashMap<K, V>;
pub(crate) type HashSet<T> = ahash::AHashSet<T>;
