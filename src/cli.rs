use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "glossgen",
    version,
    about = "Turn a plain-text glossary into cross-linked HTML pages",
    long_about = "Turn a plain-text glossary into cross-linked HTML pages.\n\n\
                  Run without a subcommand to be prompted for the input file, \
                  output folder and title."
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate index.html and one page per term
    Build {
        #[arg(long, help = "Glossary text file")]
        input: PathBuf,
        #[arg(long, help = "Folder for the generated pages (created if missing)")]
        output: PathBuf,
        #[arg(long, help = "Title of the index page")]
        title: Option<String>,
        #[arg(long, value_enum, help = "How to treat blank lines where a term is expected")]
        blank_lines: Option<BlankLinePolicy>,
        #[arg(long, help = "TOML file with title/blank_lines defaults")]
        config: Option<PathBuf>,
    },
    /// Parse the glossary and report problems without writing pages
    Check {
        #[arg(long, help = "Glossary text file")]
        input: PathBuf,
        #[arg(long, value_enum, default_value_t = BlankLinePolicy::Strict)]
        blank_lines: BlankLinePolicy,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
    /// Reject leading or repeated blank lines
    #[default]
    Strict,
    /// Ignore leading or repeated blank lines
    Skip,
}
