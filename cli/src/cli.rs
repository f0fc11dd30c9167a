use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ladder_harness::lexicon::DEFAULT_DICTIONARY_FILE;

#[derive(Parser, Debug)]
#[command(
    name = "word-ladder",
    about = "Find the shortest word ladder between two words",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY_FILE)]
    pub dictionary: PathBuf,

    /// Stop after this many frontier expansions
    #[arg(long, global = true)]
    pub max_expansions: Option<u64>,

    /// Do not expand words at or beyond this ladder depth
    #[arg(long, global = true)]
    pub max_depth: Option<u32>,

    /// Substitution letters, listed individually (default: the 26 letters a to z)
    #[arg(long, global = true)]
    pub alphabet: Option<String>,

    /// Log search diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prompt for word pairs until an empty response
    Play,
    /// Find one ladder and print it with its report digest
    Find(FindArgs),
    /// Print the dictionary's content digest
    Digest,
}

#[derive(Args, Debug)]
pub struct FindArgs {
    /// Source word
    pub start: String,
    /// Destination word
    pub end: String,
    /// Also print the canonical search graph JSON
    #[arg(long)]
    pub audit: bool,
}
