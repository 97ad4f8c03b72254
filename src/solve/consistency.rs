use crate::puzzle::{Crossword, Overlap, WordList};
use crate::solve::assignment::Assignment;
use crate::HashSet;

/// Checks a partial or complete assignment: every word fits its slot's length, no word is used
/// twice, and assigned variables agree wherever they cross
pub fn is_consistent(crossword: &Crossword, words: &WordList, assignment: &Assignment) -> bool {
    let mut used = HashSet::default();
    for (variable, word) in assignment.iter() {
        if words[word].len() != crossword.variable(variable).length() {
            return false;
        }
        if !used.insert(word) {
            return false;
        }
        for &neighbor in crossword.neighbors(variable) {
            // each pair is checked once
            if neighbor < variable {
                continue;
            }
            let other = match assignment.get(neighbor) {
                Some(other) => other,
                None => continue,
            };
            if let Some(Overlap(i, j)) = crossword.overlap(variable, neighbor) {
                if words[word].letters().get(i) != words[other].letters().get(j) {
                    return false;
                }
            }
        }
    }
    true
}
