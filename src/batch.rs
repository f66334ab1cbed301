//! Offline pre-screening of candidate phrase lists.
//!
//! Every phrase is solved independently against the shared read-only
//! dictionary, so the batch fans out across a rayon pool. Output order
//! follows input order regardless of which worker finished first.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

use itertools::Itertools;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use serde::Serialize;

use crate::dictionary::Dictionary;
use crate::solver::{self, Outcome, SearchBudget};

/// One record of the JSON report handed to the puzzle-selection side.
#[derive(Debug, Clone, Serialize)]
pub struct SolvedPuzzle {
    pub phrase: String,
    pub solution: Vec<String>,
    pub word_count: usize,
    pub letter_count: usize,
    /// Seconds spent solving this phrase, rounded to two decimals.
    pub time: f64,
}

/// Tally of one pre-screening run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Records for the phrases worth keeping, in input order.
    pub solved: Vec<SolvedPuzzle>,
    pub phrase_count: usize,
    pub no_solution: usize,
    pub timed_out: usize,
}

/// Reads a newline-delimited phrase file. Lines are trimmed and blank lines
/// dropped.
pub fn read_phrases(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    parse_phrases(BufReader::new(File::open(path)?))
}

/// Same as [`read_phrases`], over any reader.
pub fn parse_phrases(reader: impl BufRead) -> io::Result<Vec<String>> {
    Ok(reader
        .lines()
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .map(|line| line.trim().to_owned())
        .filter(|line| !line.is_empty())
        .collect())
}

/// Solves every phrase against `dictionary` and tallies the outcomes.
///
/// Unsolvable phrases are counted and skipped; they are the expected
/// majority, not failures. Phrases that blow the budget are logged and
/// counted separately so a batch run keeps moving.
pub fn prescreen(phrases: &[String], dictionary: &Dictionary, budget: SearchBudget) -> BatchReport {
    let outcomes: Vec<(Outcome, f64)> = phrases
        .par_iter()
        .map(|phrase| {
            let started = Instant::now();
            let outcome = solver::solve(phrase, dictionary, budget);
            (outcome, started.elapsed().as_secs_f64())
        })
        .collect();

    let mut report = BatchReport {
        phrase_count: phrases.len(),
        ..Default::default()
    };
    for (phrase, (outcome, seconds)) in phrases.iter().zip(outcomes) {
        match outcome {
            Outcome::Solved(solution) => {
                log::debug!("{phrase:?} -> {}", solution.iter().join(" "));
                report.solved.push(SolvedPuzzle {
                    phrase: phrase.clone(),
                    word_count: solution.len(),
                    letter_count: solution.iter().map(String::len).sum(),
                    solution,
                    time: (seconds * 100.0).round() / 100.0,
                });
            }
            Outcome::NoSolution => report.no_solution += 1,
            Outcome::Timeout => {
                log::warn!("{phrase:?} blew the search budget, skipping");
                report.timed_out += 1;
            }
        }
    }
    report
}

/// Writes the kept records as pretty-printed JSON.
pub fn write_report(path: impl AsRef<Path>, solved: &[SolvedPuzzle]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, solved)?;
    writer.write_all(b"\n")?;
    writer.flush()
}

#[cfg(test)]
mod tests {
    use lazy_static::lazy_static;

    use super::*;

    lazy_static! {
        static ref DICTIONARY: Dictionary =
            Dictionary::from_words(["art", "net", "rat", "tar", "ten"]);
    }

    fn phrases(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_parse_phrases_trims_and_drops_blanks() {
        let input = b"  Rat ten  \n\n   \nzzz\n" as &[u8];
        let parsed = parse_phrases(input).unwrap();
        assert!(parsed == ["Rat ten", "zzz"], "got {parsed:?}");
    }

    #[test]
    /// Solvable phrases become records, unsolvable ones only bump a counter
    fn test_prescreen_splits_outcomes() {
        let phrases = phrases(&["Rat, ten!", "zzz", "Ten tar"]);
        let report = prescreen(&phrases, &DICTIONARY, SearchBudget::default());

        assert!(report.phrase_count == 3);
        assert!(report.no_solution == 1);
        assert!(report.timed_out == 0);
        assert!(report.solved.len() == 2, "got {:?}", report.solved);

        // Input order survives the parallel fan-out
        assert!(report.solved[0].phrase == "Rat, ten!");
        assert!(report.solved[1].phrase == "Ten tar");

        let record = &report.solved[0];
        assert!(record.solution == ["art", "net"]);
        assert!(record.word_count == 2);
        assert!(record.letter_count == 6);
        assert!(record.time >= 0.0);
    }

    #[test]
    fn test_prescreen_counts_timeouts() {
        let budget = SearchBudget {
            max_nodes: Some(0),
            max_time: None,
        };
        let phrases = phrases(&["Rat ten"]);
        let report = prescreen(&phrases, &DICTIONARY, budget);
        assert!(report.timed_out == 1);
        assert!(report.solved.is_empty());
    }

    #[test]
    /// Record shape is the contract the puzzle-selection side reads
    fn test_record_json_shape() {
        let record = SolvedPuzzle {
            phrase: "Rat ten".to_owned(),
            solution: vec!["art".to_owned(), "net".to_owned()],
            word_count: 2,
            letter_count: 6,
            time: 0.01,
        };
        let value = serde_json::to_value(&record).unwrap();
        assert!(value["phrase"] == "Rat ten");
        assert!(value["solution"][0] == "art");
        assert!(value["word_count"] == 2);
        assert!(value["letter_count"] == 6);
        assert!(value["time"] == 0.01);
    }
}
