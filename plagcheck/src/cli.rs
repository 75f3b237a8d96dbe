use std::path::PathBuf;

use clap::{ArgAction, Parser};
use log::LevelFilter;

use crate::run::Documents;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Original document
    #[arg(help = "Original document", value_name = "ORIGINAL")]
    original: PathBuf,

    /// Document checked against the original
    #[arg(help = "Document checked against the original", value_name = "COMPARED")]
    compared: PathBuf,

    /// Where the similarity percentage is written
    #[arg(help = "Where the similarity percentage is written", value_name = "OUTPUT")]
    output: PathBuf,

    // -v, --verbose (repeatable)
    #[arg(short, long, action = ArgAction::Count, help = "More detailed logs, repeat for even more")]
    verbose: u8,

    // -q, --quiet
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

pub struct ParsedCli {
    pub documents: Documents,
    pub log_level: LevelFilter,
}

impl From<Cli> for ParsedCli {
    fn from(cli: Cli) -> Self {
        let log_level = cli.log_level();
        ParsedCli {
            documents: Documents { original: cli.original, compared: cli.compared, output: cli.output },
            log_level,
        }
    }
}

/// Parses process arguments. A wrong argument count prints the usage and exits with code 2.
pub fn parse_cli() -> ParsedCli {
    Cli::parse().into()
}
