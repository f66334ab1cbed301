use std::time::{Duration, Instant};

use anagram_prescreener_rs::batch;
use anagram_prescreener_rs::dictionary::Dictionary;
use anagram_prescreener_rs::solver::SearchBudget;
use clap::Parser;
use tool_args::ToolArgs;

mod tool_args;

fn main() -> Result<(), String> {
    let parser = ToolArgs::parse();

    env_logger::builder()
        .filter_level(parser.verbose.log_level_filter())
        .init();

    let dictionary = Dictionary::from_path(&parser.wordlist).map_err(|e| {
        format!(
            "Failed to read word list {}: {e}",
            parser.wordlist.display()
        )
    })?;
    if dictionary.is_empty() {
        return Err(format!(
            "Word list {} has no usable entries",
            parser.wordlist.display()
        ));
    }
    log::info!("Loaded {} usable words", dictionary.len());

    let phrases = batch::read_phrases(&parser.phrases)
        .map_err(|e| format!("Failed to read phrases {}: {e}", parser.phrases.display()))?;
    log::info!("Screening {} phrases", phrases.len());

    let budget = SearchBudget {
        max_nodes: parser.max_nodes,
        max_time: parser.timeout_ms.map(Duration::from_millis),
    };

    let started = Instant::now();
    let report = batch::prescreen(&phrases, &dictionary, budget);

    batch::write_report(&parser.output, &report.solved)
        .map_err(|e| format!("Failed to write {}: {e}", parser.output.display()))?;

    println!(
        "Found {} solvable puzzles out of {} in {:.2}s.",
        report.solved.len(),
        report.phrase_count,
        started.elapsed().as_secs_f64()
    );
    if report.timed_out > 0 {
        println!(
            "{} phrases hit the search budget and were skipped.",
            report.timed_out
        );
    }
    Ok(())
}
