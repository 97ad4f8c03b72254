use crate::puzzle::{Crossword, WordList};
use crate::solve::domain::DomainStore;

/// Removes every word whose length differs from its variable's length.
/// Returns false if any domain is left empty.
pub(crate) fn enforce_node_consistency(
    crossword: &Crossword,
    words: &WordList,
    domains: &mut DomainStore,
) -> bool {
    debug!("Applying length constraints");
    let mut consistent = true;
    for (id, variable) in crossword.variables().iter().enumerate() {
        let length = variable.length();
        domains.retain(id, |word| words[word].len() == length);
        trace!("{} has {} candidates", variable, domains.len(id));
        if domains.is_empty(id) {
            debug!("No words fit {}", variable);
            consistent = false;
        }
    }
    consistent
}
