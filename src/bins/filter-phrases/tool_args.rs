use std::path::PathBuf;

use anagram_prescreener_rs::MAX_PHRASE_LETTERS;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ToolArgs {
    /// Phrase file to filter, one phrase per line
    pub(crate) puzzles: PathBuf,

    /// Most letters a phrase may have and still be kept
    #[arg(short, long, default_value_t = MAX_PHRASE_LETTERS)]
    pub(crate) max_letters: usize,

    /// Write the filtered list here instead of overwriting the input
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity,
}
