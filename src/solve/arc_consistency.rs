use linked_hash_set::LinkedHashSet;

use crate::puzzle::{Crossword, Overlap, VariableId, WordList};
use crate::solve::domain::DomainStore;
use crate::HashSet;

/// Makes `x` arc consistent with `y` by removing every word of `x` that no word of `y` agrees with
/// at their overlap. Returns true if the domain of `x` changed.
pub(crate) fn revise(
    crossword: &Crossword,
    words: &WordList,
    domains: &mut DomainStore,
    x: VariableId,
    y: VariableId,
) -> bool {
    let Overlap(i, j) = match crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let mut supported = HashSet::default();
    for word in domains.domain(y) {
        if let Some(&letter) = words[word].letters().get(j) {
            supported.insert(letter);
        }
    }
    let revised = domains.retain(x, |word| {
        words[word]
            .letters()
            .get(i)
            .map_or(false, |letter| supported.contains(letter))
    });
    if revised {
        trace!(
            "Revised {} against {}, {} candidates left",
            crossword.variable(x),
            crossword.variable(y),
            domains.len(x)
        );
    }
    revised
}

/// Runs AC-3 starting from every arc in the crossword. Returns false if a domain becomes empty.
pub(crate) fn enforce_arc_consistency(
    crossword: &Crossword,
    words: &WordList,
    domains: &mut DomainStore,
) -> bool {
    debug!("Enforcing arc consistency");
    propagate_arcs(crossword, words, domains, crossword.arcs())
}

/// Runs AC-3 starting from the given arcs. Returns false if a domain becomes empty.
///
/// When the domain of `x` shrinks while revising `(x, y)`, every arc `(z, x)` with `z` another
/// neighbor of `x` is queued again since the words of `z` may have lost their support.
pub(crate) fn propagate_arcs(
    crossword: &Crossword,
    words: &WordList,
    domains: &mut DomainStore,
    arcs: impl IntoIterator<Item = (VariableId, VariableId)>,
) -> bool {
    let mut queue: LinkedHashSet<(VariableId, VariableId)> = LinkedHashSet::new();
    for arc in arcs {
        queue.insert(arc);
    }
    while let Some((x, y)) = queue.pop_front() {
        if !revise(crossword, words, domains, x, y) {
            continue;
        }
        if domains.is_empty(x) {
            debug!("No candidates left for {}", crossword.variable(x));
            return false;
        }
        for &z in crossword.neighbors(x) {
            if z != y {
                queue.insert((z, x));
            }
        }
    }
    true
}

#[cfg(test)]
mod test {
    use super::{enforce_arc_consistency, propagate_arcs, revise};
    use crate::puzzle::{Crossword, Overlap, WordList};
    use crate::solve::domain::DomainStore;
    use crate::solve::unary_constraints::enforce_node_consistency;

    fn setup(structure: &str, words: &[&str]) -> (Crossword, WordList, DomainStore) {
        let crossword = Crossword::parse(structure).unwrap();
        let words = WordList::new(words.iter().copied()).unwrap();
        let mut domains = DomainStore::new(crossword.variable_count(), words.len());
        assert!(enforce_node_consistency(&crossword, &words, &mut domains));
        (crossword, words, domains)
    }

    fn texts<'a>(words: &'a WordList, domains: &DomainStore, id: usize) -> Vec<&'a str> {
        domains.domain(id).iter().map(|w| words[w].as_str()).collect()
    }

    fn assert_arc_consistent(crossword: &Crossword, words: &WordList, domains: &DomainStore) {
        for (x, y) in crossword.arcs() {
            let Overlap(i, j) = crossword.overlap(x, y).unwrap();
            for a in domains.domain(x) {
                assert!(domains
                    .domain(y)
                    .iter()
                    .any(|b| words[a].letter(i) == words[b].letter(j)));
            }
        }
    }

    #[test]
    fn revise_prunes_only_x() {
        // (0, 1) down crosses (1, 0) across at the middle letters
        let (crossword, words, mut domains) =
            setup("#_#\n___\n#_#\n", &["bar", "cat", "dog", "top"]);
        domains.assign(1, words.find("bar").unwrap());
        assert!(revise(&crossword, &words, &mut domains, 0, 1));
        assert_eq!(vec!["bar", "cat"], texts(&words, &domains, 0));
        assert_eq!(vec!["bar"], texts(&words, &domains, 1));
        assert!(!revise(&crossword, &words, &mut domains, 0, 1));
    }

    #[test]
    fn revise_without_overlap() {
        let (crossword, words, mut domains) = setup("___\n###\n___\n", &["bar", "cat"]);
        domains.assign(1, 0);
        assert!(!revise(&crossword, &words, &mut domains, 0, 1));
        assert_eq!(2, domains.len(0));
    }

    #[test]
    fn fixed_point() {
        let (crossword, words, mut domains) = setup(
            "___\n_#_\n___\n",
            &["ace", "aha", "bee", "eve", "ewe", "ink", "oak", "orb", "zoo"],
        );
        assert!(enforce_arc_consistency(&crossword, &words, &mut domains));
        assert_arc_consistent(&crossword, &words, &domains);
    }

    #[test]
    fn requeues_neighbors_of_revised_variable() {
        // a chain of three slots: top across, left down, bottom across
        let (crossword, words, mut domains) =
            setup("___\n_##\n___\n", &["abc", "axd", "dog", "xyz"]);
        let abc = words.find("abc").unwrap();
        domains.retain(0, |w| w == abc);
        // only the left slot is revised directly; the bottom slot is reached through it
        assert!(propagate_arcs(&crossword, &words, &mut domains, vec![(1, 0)]));
        assert_eq!(vec!["abc", "axd"], texts(&words, &domains, 1));
        assert_eq!(vec!["dog"], texts(&words, &domains, 2));
    }

    #[test]
    fn empty_domain() {
        let (crossword, words, mut domains) = setup("#_##\n____\n#_##\n", &["cat", "door"]);
        assert!(!enforce_arc_consistency(&crossword, &words, &mut domains));
    }
}
