use crate::collections::RangeSet;
use crate::puzzle::{VariableId, WordId};

/// The candidate words of every variable
///
/// Words are only ever removed. Every removal is recorded on a trail so that a search branch can
/// be abandoned by restoring a `Checkpoint`.
#[derive(Clone, Debug)]
pub struct DomainStore {
    domains: Vec<RangeSet>,
    trail: Vec<(VariableId, WordId)>,
}

/// A position in the removal trail of a `DomainStore`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Checkpoint(usize);

impl DomainStore {
    /// Creates a store where every variable may take every word
    pub fn new(variable_count: usize, word_count: usize) -> Self {
        Self {
            domains: vec![RangeSet::with_all(word_count); variable_count],
            trail: Vec::new(),
        }
    }

    pub fn domain(&self, variable: VariableId) -> &RangeSet {
        &self.domains[variable]
    }

    pub fn len(&self, variable: VariableId) -> usize {
        self.domains[variable].len()
    }

    pub fn is_empty(&self, variable: VariableId) -> bool {
        self.domains[variable].is_empty()
    }

    pub fn contains(&self, variable: VariableId, word: WordId) -> bool {
        self.domains[variable].contains(word)
    }

    /// Iterates over every domain by `VariableId`
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, &RangeSet)> {
        self.domains.iter().enumerate()
    }

    /// Removes a word from a domain. Returns false if the word was not in the domain.
    pub fn remove(&mut self, variable: VariableId, word: WordId) -> bool {
        let removed = self.domains[variable].remove(word);
        if removed {
            self.trail.push((variable, word));
        }
        removed
    }

    /// Removes every word for which `f` returns false. Returns true if any word was removed.
    pub fn retain(&mut self, variable: VariableId, f: impl FnMut(WordId) -> bool) -> bool {
        let removed = self.domains[variable].retain(f);
        let any = !removed.is_empty();
        self.trail
            .extend(removed.into_iter().map(|word| (variable, word)));
        any
    }

    /// Narrows a domain to a single word. Returns false if the word was not in the domain.
    pub fn assign(&mut self, variable: VariableId, word: WordId) -> bool {
        if !self.contains(variable, word) {
            return false;
        }
        self.retain(variable, |w| w == word);
        true
    }

    /// Marks the current state so it can be restored later
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.trail.len())
    }

    /// Puts back every word removed since the checkpoint
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        let Checkpoint(len) = checkpoint;
        for (variable, word) in self.trail.drain(len..) {
            self.domains[variable].insert(word);
        }
    }

    /// Makes all removals so far permanent. Earlier checkpoints become invalid.
    pub fn commit(&mut self) {
        self.trail.clear();
    }
}

#[cfg(test)]
mod test {
    use super::DomainStore;

    #[test]
    fn restore() {
        let mut domains = DomainStore::new(2, 5);
        domains.remove(0, 1);
        let checkpoint = domains.checkpoint();
        let before = domains.clone();
        assert!(domains.assign(1, 3));
        assert!(domains.remove(0, 4));
        assert!(!domains.remove(0, 4));
        assert!(domains.retain(0, |w| w < 2));
        assert_eq!(1, domains.len(1));
        assert_eq!(vec![0], domains.domain(0).iter().collect::<Vec<_>>());
        domains.restore(checkpoint);
        for (variable, domain) in before.iter() {
            assert_eq!(domain, domains.domain(variable));
        }
        assert!(!domains.contains(0, 1));
    }

    #[test]
    fn nested_checkpoints() {
        let mut domains = DomainStore::new(1, 4);
        let outer = domains.checkpoint();
        domains.remove(0, 0);
        let inner = domains.checkpoint();
        domains.remove(0, 1);
        domains.restore(inner);
        assert_eq!(3, domains.len(0));
        domains.restore(outer);
        assert_eq!(4, domains.len(0));
    }

    #[test]
    fn assign_missing_word() {
        let mut domains = DomainStore::new(1, 3);
        domains.remove(0, 2);
        assert!(!domains.assign(0, 2));
        assert_eq!(2, domains.len(0));
    }

    #[test]
    fn commit() {
        let mut domains = DomainStore::new(1, 3);
        domains.remove(0, 2);
        domains.commit();
        let checkpoint = domains.checkpoint();
        domains.remove(0, 1);
        domains.restore(checkpoint);
        assert!(!domains.contains(0, 2));
        assert!(domains.contains(0, 1));
        assert!(!domains.is_empty(0));
    }
}
