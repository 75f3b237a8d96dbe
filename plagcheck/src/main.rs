use std::io::Write;
use std::process;

use cli::{parse_cli, ParsedCli};
use env_logger::Builder;
use report::{LogReport, Report};

mod cli;
mod error;
mod files;
mod report;
mod run;

fn main() {
    let ParsedCli { documents, log_level } = parse_cli();

    // RUST_LOG takes precedence over the command line verbosity
    Builder::new()
        .filter_level(log_level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let mut report = LogReport;
    if let Err(err) = run::run(&documents, &mut report) {
        report.error(&err.to_string());
        process::exit(1);
    }
}
