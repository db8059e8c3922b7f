use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use lexi::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    lexi::cli::init_tracing(args.verbose());

    match lexi::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
