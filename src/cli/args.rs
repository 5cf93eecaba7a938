use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments shared by `encode` and `decode`
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Algorithm: hex, base64, rot13, atbash, morse, railfence, vigenere
    pub algorithm: String,

    /// Text to transform (reads --file or stdin if not provided)
    #[arg(allow_hyphen_values = true)]
    pub input: Option<String>,

    /// Read input from a file
    #[arg(short = 'f', long, conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Rail count for railfence (non-numeric values fall back to the default)
    #[arg(short = 'r', long, value_name = "N", allow_hyphen_values = true)]
    pub rails: Option<String>,

    /// Key for vigenere (letters only; everything else is dropped)
    #[arg(short = 'k', long)]
    pub key: Option<String>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Save to decipher-<algorithm>-<mode>.txt in the configured output directory
    #[arg(long, conflicts_with = "output")]
    pub save: bool,
}

/// Arguments for listing algorithms
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the effective settings after all layers are applied
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show where config files are looked for
    Paths,
}
