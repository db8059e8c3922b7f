//! Summary printing for CLI commands.
//!
//! Translations themselves go to stdout as they are resolved; this module
//! only prints the closing status lines, keeping the library free of
//! terminal output.

use std::process::ExitCode;

use colored::Colorize;

use super::commands::{
    CommandResult, CommandSummary, ExportSummary, ImportSummary, InitSummary, TranslateSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Translate(summary) => print_translate(summary, verbose),
        CommandSummary::Export(summary) => print_export(summary, verbose),
        CommandSummary::Import(summary) => print_import(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

/// Process exit code of a `lexi` run.
///
/// Misses are not failures: translating unknown keys still exits 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    /// The command declined to act, e.g. `init` with a config already present.
    Failure = 1,
    /// Config, dictionary or I/O errors aborted the command.
    Error = 2,
}

impl ExitStatus {
    pub fn of(result: &CommandResult) -> Self {
        match &result.summary {
            CommandSummary::Init(InitSummary { created: false }) => ExitStatus::Failure,
            _ => ExitStatus::Success,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
    if count == 1 { one } else { many }
}

fn print_translate(summary: &TranslateSummary, verbose: bool) {
    if !verbose {
        return;
    }
    eprintln!(
        "Resolved {} {} in '{}', {} missing",
        summary.translated_count,
        plural(summary.translated_count, "key", "keys"),
        summary.language,
        summary.missing_count
    );
    if summary.flush.dictionary_saved {
        eprintln!("Registered unknown keys in the '{}' dictionary", summary.language);
    }
    if summary.flush.keys_logged > 0 {
        eprintln!(
            "Logged {} new missing {}",
            summary.flush.keys_logged,
            plural(summary.flush.keys_logged, "key", "keys")
        );
    }
}

fn print_export(summary: &ExportSummary, verbose: bool) {
    if verbose {
        eprintln!(
            "Exported {} {}",
            summary.entry_count,
            plural(summary.entry_count, "entry", "entries")
        );
    }
}

fn print_import(summary: &ImportSummary) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} {} into {}",
            if summary.merged { "Merged" } else { "Imported" },
            summary.entry_count,
            plural(summary.entry_count, "entry", "entries"),
            summary.dictionary_path.display()
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        eprintln!("Error: {} already exists", CONFIG_FILE_NAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(summary: CommandSummary) -> CommandResult {
        summary.into()
    }

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Failure), ExitCode::from(1));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(2));
    }

    #[test]
    fn test_misses_still_succeed() {
        let summary = TranslateSummary {
            missing_count: 3,
            ..Default::default()
        };
        assert_eq!(
            ExitStatus::of(&result(CommandSummary::Translate(summary))),
            ExitStatus::Success
        );
        assert_eq!(
            ExitStatus::of(&result(CommandSummary::Export(ExportSummary { entry_count: 0 }))),
            ExitStatus::Success
        );
    }

    #[test]
    fn test_init_over_existing_config_fails() {
        assert_eq!(
            ExitStatus::of(&result(CommandSummary::Init(InitSummary { created: false }))),
            ExitStatus::Failure
        );
        assert_eq!(
            ExitStatus::of(&result(CommandSummary::Init(InitSummary { created: true }))),
            ExitStatus::Success
        );
    }
}
