use std::cmp::Reverse;

use crate::puzzle::{Crossword, Overlap, VariableId, WordId, WordList};
use crate::solve::assignment::Assignment;
use crate::solve::domain::DomainStore;
use crate::HashMap;

/// Chooses the next variable to assign: the fewest remaining words first, then the most crossing
/// slots, then grid order. Returns `None` when every variable is assigned.
pub(crate) fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &DomainStore,
    assignment: &Assignment,
) -> Option<VariableId> {
    crossword
        .variable_ids()
        .filter(|&variable| !assignment.contains(variable))
        .min_by_key(|&variable| {
            (
                domains.len(variable),
                Reverse(crossword.degree(variable)),
                variable,
            )
        })
}

/// Orders the words of a variable by how many words they rule out in the domains of unassigned
/// neighbors, least first. Ties keep word list order.
pub(crate) fn order_domain_values(
    crossword: &Crossword,
    words: &WordList,
    domains: &DomainStore,
    assignment: &Assignment,
    variable: VariableId,
) -> Vec<WordId> {
    // for each unassigned neighbor: its overlap, domain size and letter counts at the overlap
    let neighbors: Vec<(Overlap, usize, HashMap<char, usize>)> = crossword
        .neighbors(variable)
        .iter()
        .filter(|&&neighbor| !assignment.contains(neighbor))
        .filter_map(|&neighbor| {
            let overlap = crossword.overlap(variable, neighbor)?;
            let mut letter_counts = HashMap::default();
            for word in domains.domain(neighbor) {
                if let Some(&letter) = words[word].letters().get(overlap.1) {
                    *letter_counts.entry(letter).or_insert(0) += 1;
                }
            }
            Some((overlap, domains.len(neighbor), letter_counts))
        })
        .collect();
    let mut values: Vec<(usize, WordId)> = domains
        .domain(variable)
        .iter()
        .map(|word| {
            let ruled_out = neighbors
                .iter()
                .map(|(Overlap(i, _), len, letter_counts)| {
                    let agreeing = words[word]
                        .letters()
                        .get(*i)
                        .and_then(|letter| letter_counts.get(letter))
                        .copied()
                        .unwrap_or(0);
                    len - agreeing
                })
                .sum::<usize>();
            (ruled_out, word)
        })
        .collect();
    values.sort_unstable();
    values.into_iter().map(|(_, word)| word).collect()
}
