use vec_map::VecMap;

use crate::puzzle::{Solution, VariableId, WordId, WordList};

/// Words chosen for some of the variables of a crossword
#[derive(Clone, Debug, Default)]
pub struct Assignment {
    words: VecMap<WordId>,
}

impl Assignment {
    pub fn with_capacity(variable_count: usize) -> Self {
        Self {
            words: VecMap::with_capacity(variable_count),
        }
    }

    /// Assigns a word to a variable, replacing any previous word
    pub fn insert(&mut self, variable: VariableId, word: WordId) -> Option<WordId> {
        self.words.insert(variable, word)
    }

    pub fn remove(&mut self, variable: VariableId) -> Option<WordId> {
        self.words.remove(variable)
    }

    pub fn get(&self, variable: VariableId) -> Option<WordId> {
        self.words.get(variable).copied()
    }

    pub fn contains(&self, variable: VariableId) -> bool {
        self.words.contains_key(variable)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates over assigned variables in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, WordId)> + '_ {
        self.words.iter().map(|(variable, &word)| (variable, word))
    }

    /// Converts a complete assignment to a `Solution`.
    /// Returns `None` if a variable below `variable_count` has no word.
    pub fn to_solution(&self, words: &WordList, variable_count: usize) -> Option<Solution> {
        let texts = (0..variable_count)
            .map(|variable| self.get(variable).map(|word| words[word].to_string()))
            .collect::<Option<Vec<String>>>()?;
        Some(Solution::new(texts))
    }
}

#[cfg(test)]
mod test {
    use super::Assignment;
    use crate::puzzle::WordList;

    #[test]
    fn insert_remove() {
        let mut assignment = Assignment::with_capacity(3);
        assert_eq!(None, assignment.insert(2, 5));
        assert_eq!(None, assignment.insert(0, 1));
        assert!(assignment.contains(2));
        assert!(!assignment.contains(1));
        assert_eq!(vec![(0, 1), (2, 5)], assignment.iter().collect::<Vec<_>>());
        assert_eq!(Some(5), assignment.remove(2));
        assert_eq!(1, assignment.len());
    }

    #[test]
    fn to_solution() {
        let words = WordList::new(vec!["cat", "dog"]).unwrap();
        let mut assignment = Assignment::default();
        assignment.insert(1, 0);
        assert!(assignment.to_solution(&words, 2).is_none());
        assignment.insert(0, 1);
        let solution = assignment.to_solution(&words, 2).unwrap();
        assert_eq!(vec!["dog", "cat"], solution.words().collect::<Vec<_>>());
    }
}
