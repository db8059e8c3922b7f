use anyhow::Result;
use tracing_subscriber::EnvFilter;

pub mod args;
mod commands;
mod report;
mod run;

pub use args::{Arguments, Command};
pub use report::ExitStatus;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "LEXI_LOG";

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_work_or_help() else {
        return Ok(ExitStatus::Success);
    };

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(ExitStatus::of(&result))
}

/// Install the stderr diagnostics subscriber.
///
/// `LEXI_LOG` takes precedence; otherwise warnings are shown, and
/// everything down to debug with `-v`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "lexi=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let ansi = std::env::var_os("NO_COLOR").is_none()
        && std::io::IsTerminal::is_terminal(&std::io::stderr());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .init();
}
