use clap::Parser;
use std::path::PathBuf;

use crate::address::DEFAULT_KEY_FIELD;

#[derive(Parser, Debug)]
#[command(
    name = "ptrie-dict",
    about = "Look up address records by key, reading one query per line from stdin",
    version
)]
pub struct Args {
    /// 1: unindexed scan with exact lookup, 2: Patricia trie with closest-spelling lookup
    pub stage: u8,

    /// CSV file of address records; the first line is a header
    pub input: PathBuf,

    /// Receives each query followed by the records it matched
    pub output: PathBuf,

    /// Zero-based column holding the record key
    #[arg(long, env = "PTRIE_KEY_FIELD", default_value_t = DEFAULT_KEY_FIELD)]
    pub key_field: usize,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_color: bool,
}
