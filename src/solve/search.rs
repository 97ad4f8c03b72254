use std::sync::atomic::{AtomicBool, Ordering};

use crate::puzzle::{Crossword, Solution, VariableId, WordId, WordList};
use crate::solve::arc_consistency::propagate_arcs;
use crate::solve::assignment::Assignment;
use crate::solve::consistency::is_consistent;
use crate::solve::domain::DomainStore;
use crate::solve::heuristics::{order_domain_values, select_unassigned_variable};
use crate::solve::SearchStats;

pub(crate) enum SearchResult {
    Solved(Solution),
    Exhausted,
    Cancelled,
}

pub(crate) struct SearchContext<'a> {
    crossword: &'a Crossword,
    words: &'a WordList,
    domains: DomainStore,
    assignment: Assignment,
    inference: bool,
    cancel: Option<&'a AtomicBool>,
    depth: usize,
    stats: SearchStats,
}

impl<'a> SearchContext<'a> {
    pub fn new(crossword: &'a Crossword, words: &'a WordList, domains: DomainStore) -> Self {
        Self {
            crossword,
            words,
            domains,
            assignment: Assignment::with_capacity(crossword.variable_count()),
            inference: true,
            cancel: None,
            depth: 0,
            stats: SearchStats {
                used_search: true,
                ..SearchStats::default()
            },
        }
    }

    /// Maintain arc consistency after every assignment
    pub fn inference(mut self, inference: bool) -> Self {
        self.inference = inference;
        self
    }

    pub fn cancel_flag(mut self, cancel: Option<&'a AtomicBool>) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn search(mut self) -> (SearchResult, SearchStats) {
        let result = self.search_next();
        (result, self.stats)
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .map_or(false, |cancel| cancel.load(Ordering::Relaxed))
    }

    fn search_next(&mut self) -> SearchResult {
        if self.is_cancelled() {
            debug!("Search cancelled at depth {}", self.depth);
            return SearchResult::Cancelled;
        }
        let variable =
            match select_unassigned_variable(self.crossword, &self.domains, &self.assignment) {
                Some(variable) => variable,
                None => {
                    return self
                        .assignment
                        .to_solution(self.words, self.crossword.variable_count())
                        .map_or(SearchResult::Exhausted, SearchResult::Solved)
                }
            };
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        debug!("Backtracking (depth={})", self.depth);
        let values = order_domain_values(
            self.crossword,
            self.words,
            &self.domains,
            &self.assignment,
            variable,
        );
        for (i, word) in values.into_iter().enumerate() {
            debug!(
                "Guessing with {} at {}, guess #: {}",
                self.words[word],
                self.crossword.variable(variable),
                i + 1
            );
            match self.guess(variable, word) {
                SearchResult::Exhausted => {
                    debug!("Guess failed");
                    self.stats.backtracks += 1;
                }
                result => {
                    self.depth -= 1;
                    return result;
                }
            }
        }
        self.depth -= 1;
        SearchResult::Exhausted
    }

    fn guess(&mut self, variable: VariableId, word: WordId) -> SearchResult {
        self.stats.assignments += 1;
        self.assignment.insert(variable, word);
        let checkpoint = self.domains.checkpoint();
        let result = if !is_consistent(self.crossword, self.words, &self.assignment) {
            SearchResult::Exhausted
        } else if self.inference && !self.infer(variable, word) {
            SearchResult::Exhausted
        } else {
            // recursive next backtracking call
            self.search_next()
        };
        if let SearchResult::Exhausted = result {
            self.domains.restore(checkpoint);
            self.assignment.remove(variable);
        }
        result
    }

    /// Narrows the variable's domain to the word and propagates to its unassigned neighbors.
    /// Returns false if a domain becomes empty.
    fn infer(&mut self, variable: VariableId, word: WordId) -> bool {
        if !self.domains.assign(variable, word) {
            return false;
        }
        let assignment = &self.assignment;
        let arcs: Vec<_> = self
            .crossword
            .neighbors(variable)
            .iter()
            .filter(|&&neighbor| !assignment.contains(neighbor))
            .map(|&neighbor| (neighbor, variable))
            .collect();
        propagate_arcs(self.crossword, self.words, &mut self.domains, arcs)
    }
}
