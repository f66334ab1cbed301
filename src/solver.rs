//! Depth-first search for one complete decomposition of a phrase's letters
//! into dictionary words.
//!
//! The search is exponential in the worst case, so it only runs offline over
//! phrases kept under the letter budget. A [`SearchBudget`] can additionally
//! cap a single solve so a batch run gets past pathological phrases.

use std::time::{Duration, Instant};

use crate::dictionary::{Dictionary, Entry};
use crate::letters::LetterPool;

/// Result of one solve. `NoSolution` is the common case over real phrase
/// lists and is not an error; `Timeout` can only occur once a budget cap is
/// set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The first complete decomposition found, in the order the words were
    /// chosen. Not minimal by word count or any other measure.
    Solved(Vec<String>),
    /// The search space was exhausted without a full cover.
    NoSolution,
    /// A budget cap was hit before the search finished.
    Timeout,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

/// Per-solve caps. A `None` cap is unbounded; the default leaves the search
/// unbounded, matching how the puzzle archive was originally generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchBudget {
    /// Most search nodes (recursion entries) to expand.
    pub max_nodes: Option<u64>,
    /// Most wall-clock time one solve may take.
    pub max_time: Option<Duration>,
}

/// Marker threaded up through the recursion once a cap is blown.
struct BudgetExceeded;

struct Meter {
    nodes: u64,
    max_nodes: u64,
    deadline: Option<Instant>,
}

impl Meter {
    fn new(budget: SearchBudget) -> Self {
        Self {
            nodes: 0,
            max_nodes: budget.max_nodes.unwrap_or(u64::MAX),
            deadline: budget.max_time.map(|limit| Instant::now() + limit),
        }
    }

    /// Counts one node. The clock is only consulted every 1024 nodes to keep
    /// `Instant::now` off the hot path.
    fn tick(&mut self) -> Result<(), BudgetExceeded> {
        self.nodes += 1;
        if self.nodes > self.max_nodes {
            return Err(BudgetExceeded);
        }
        if self.nodes % 1024 == 0 {
            if let Some(deadline) = self.deadline {
                if Instant::now() >= deadline {
                    return Err(BudgetExceeded);
                }
            }
        }
        Ok(())
    }
}

/// Searches for one exact partition of `phrase`'s letters into words from
/// `dictionary`: every letter used, none left over, none borrowed.
///
/// Candidates are tried in the dictionary's lexicographic order, so the same
/// inputs always produce the same outcome, and the first complete cover wins.
/// The solver itself does no logging or timing; callers wrap it as needed.
pub fn solve(phrase: &str, dictionary: &Dictionary, budget: SearchBudget) -> Outcome {
    let mut remaining = LetterPool::from_phrase(phrase);
    if remaining.is_empty() {
        return Outcome::NoSolution;
    }
    // The dictionary is ASCII-only, so a phrase holding any other alphabetic
    // character can never be fully covered.
    if phrase
        .chars()
        .any(|c| c.is_alphabetic() && !c.is_ascii_alphabetic())
    {
        return Outcome::NoSolution;
    }

    // Words that don't fit the whole pool can't fit any sub-pool either, so
    // the candidate list is restricted once before the search.
    let candidates: Vec<&Entry> = dictionary
        .iter()
        .filter(|entry| remaining.covers(entry.letters()))
        .collect();

    let mut meter = Meter::new(budget);
    let mut path = Vec::new();
    match extend(&candidates, &mut remaining, &mut path, &mut meter) {
        Ok(true) => Outcome::Solved(
            path.into_iter()
                .map(|entry| entry.word().to_owned())
                .collect(),
        ),
        Ok(false) => Outcome::NoSolution,
        Err(BudgetExceeded) => Outcome::Timeout,
    }
}

/// Tries to extend `path` until `remaining` is empty. `Ok(true)` propagates
/// the first full cover straight up; `Ok(false)` means this branch is
/// exhausted and the caller should back out its last word.
fn extend<'a>(
    candidates: &[&'a Entry],
    remaining: &mut LetterPool,
    path: &mut Vec<&'a Entry>,
    meter: &mut Meter,
) -> Result<bool, BudgetExceeded> {
    if remaining.is_empty() {
        return Ok(true);
    }
    meter.tick()?;

    for entry in candidates {
        // Admissible only while the word still fits what is left.
        if !remaining.covers(entry.letters()) {
            continue;
        }
        remaining.deduct(entry.letters());
        path.push(entry);
        if extend(candidates, remaining, path, meter)? {
            return Ok(true);
        }
        path.pop();
        remaining.restore(entry.letters());
    }
    Ok(false)
}
