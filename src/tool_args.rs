use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct ToolArgs {
    /// Newline-delimited file of candidate phrases to screen
    pub(crate) phrases: PathBuf,

    /// Word list the puzzle accepts, one word per line
    #[arg(short, long, default_value = "wordlist.txt")]
    pub(crate) wordlist: PathBuf,

    /// Where to write the JSON report of solvable phrases
    #[arg(short, long, default_value = "solvable_puzzles.json")]
    pub(crate) output: PathBuf,

    /// Cap on search nodes per phrase before it is skipped as a timeout
    #[arg(long)]
    pub(crate) max_nodes: Option<u64>,

    /// Cap in milliseconds per phrase before it is skipped as a timeout
    #[arg(long, value_name = "MS")]
    pub(crate) timeout_ms: Option<u64>,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity,
}
