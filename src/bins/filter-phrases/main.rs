use std::fs;

use anagram_prescreener_rs::batch;
use anagram_prescreener_rs::letters::LetterPool;
use clap::Parser;
use tool_args::ToolArgs;

mod tool_args;

fn main() -> Result<(), String> {
    let parser = ToolArgs::parse();

    env_logger::builder()
        .filter_level(parser.verbose.log_level_filter())
        .init();

    let phrases = batch::read_phrases(&parser.puzzles)
        .map_err(|e| format!("Failed to read {}: {e}", parser.puzzles.display()))?;
    let total = phrases.len();

    let kept: Vec<String> = phrases
        .into_iter()
        .filter(|phrase| {
            let letters = LetterPool::from_phrase(phrase).total() as usize;
            let keep = letters <= parser.max_letters;
            if !keep {
                log::debug!("Dropping {phrase:?} ({letters} letters)");
            }
            keep
        })
        .collect();

    let output = parser.output.as_ref().unwrap_or(&parser.puzzles);
    let contents: String = kept.iter().map(|phrase| format!("{phrase}\n")).collect();
    fs::write(output, contents).map_err(|e| format!("Failed to write {}: {e}", output.display()))?;

    println!(
        "Kept {} phrases out of {} in {}.",
        kept.len(),
        total,
        output.display()
    );
    Ok(())
}
