//! Solve crosswords as constraint satisfaction problems

pub use self::assignment::Assignment;
pub use self::consistency::is_consistent;
pub use self::domain::{Checkpoint, DomainStore};

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::puzzle::{Crossword, Solution, WordList};

use self::arc_consistency::enforce_arc_consistency;
use self::search::{SearchContext, SearchResult};
use self::unary_constraints::enforce_node_consistency;

mod arc_consistency;
mod assignment;
mod consistency;
mod domain;
mod heuristics;
mod search;
mod unary_constraints;

pub enum SolveResult {
    /// No assignment satisfies every constraint
    Unsolvable,
    /// The crossword was filled
    Solved(SolvedData),
    /// The search was stopped by the cancel flag before it finished
    Cancelled,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveResult::Solved(data) => Some(data.solution),
            _ => None,
        }
    }
}

pub struct SolvedData {
    pub solution: Solution,
    pub stats: SearchStats,
}

/// Counters collected while solving
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// tentative assignments made during search
    pub assignments: u64,
    /// assignments that were undone
    pub backtracks: u64,
    /// the deepest level of the search tree reached
    pub max_depth: usize,
    /// false if preprocessing alone left one word for every variable
    pub used_search: bool,
}

pub struct CrosswordSolver<'a> {
    crossword: &'a Crossword,
    words: &'a WordList,
    inference: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword, words: &'a WordList) -> Self {
        Self {
            crossword,
            words,
            inference: true,
            cancel: None,
        }
    }

    /// Enables or disables maintaining arc consistency during search. Enabled by default.
    pub fn inference(&mut self, inference: bool) -> &mut Self {
        self.inference = inference;
        self
    }

    /// The search stops with `SolveResult::Cancelled` once the flag is set
    pub fn cancel_flag(&mut self, cancel: Arc<AtomicBool>) -> &mut Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn solve(&self) -> SolveResult {
        let (crossword, words) = (self.crossword, self.words);
        let mut domains = DomainStore::new(crossword.variable_count(), words.len());
        if !enforce_node_consistency(crossword, words, &mut domains) {
            info!("No words fit some slot");
            return SolveResult::Unsolvable;
        }
        if !enforce_arc_consistency(crossword, words, &mut domains) {
            info!("Arc consistency left a slot without words");
            return SolveResult::Unsolvable;
        }
        domains.commit();
        info!(
            "{} candidates remain for {} variables",
            domains.iter().map(|(_, domain)| domain.len()).sum::<usize>(),
            crossword.variable_count()
        );
        let result = if let Some(solution) = self.solve_without_search(&domains) {
            SolvedData {
                solution,
                stats: SearchStats::default(),
            }
        } else {
            info!("Begin backtracking");
            let (result, stats) = SearchContext::new(crossword, words, domains)
                .inference(self.inference)
                .cancel_flag(self.cancel.as_deref())
                .search();
            info!(
                "Search made {} assignments and {} backtracks",
                stats.assignments, stats.backtracks
            );
            let solution = match result {
                SearchResult::Solved(solution) => solution,
                SearchResult::Exhausted => return SolveResult::Unsolvable,
                SearchResult::Cancelled => return SolveResult::Cancelled,
            };
            SolvedData { solution, stats }
        };
        debug_assert!(crossword.verify_solution(&result.solution));
        SolveResult::Solved(result)
    }

    /// Uses the preprocessed domains directly if each has exactly one word and they fit together
    fn solve_without_search(&self, domains: &DomainStore) -> Option<Solution> {
        let mut assignment = Assignment::with_capacity(self.crossword.variable_count());
        for (variable, domain) in domains.iter() {
            assignment.insert(variable, domain.single_value()?);
        }
        if !is_consistent(self.crossword, self.words, &assignment) {
            return None;
        }
        assignment.to_solution(self.words, self.crossword.variable_count())
    }
}

/// Fills a crossword with default settings. Returns `None` if it cannot be filled.
pub fn solve(crossword: &Crossword, words: &WordList) -> Option<Solution> {
    CrosswordSolver::new(crossword, words).solve().into_solution()
}
