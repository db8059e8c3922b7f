use std::path::PathBuf;

use crate::translator::FlushSummary;

#[derive(Debug)]
pub enum CommandSummary {
    Translate(TranslateSummary),
    Export(ExportSummary),
    Import(ImportSummary),
    Init(InitSummary),
}

#[derive(Debug, Default)]
pub struct TranslateSummary {
    pub language: String,
    pub translated_count: usize,
    pub missing_count: usize,
    pub flush: FlushSummary,
}

#[derive(Debug)]
pub struct ExportSummary {
    pub entry_count: usize,
}

#[derive(Debug)]
pub struct ImportSummary {
    pub entry_count: usize,
    pub dictionary_path: PathBuf,
    pub merged: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running lexi commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}

impl From<CommandSummary> for CommandResult {
    fn from(summary: CommandSummary) -> Self {
        Self { summary }
    }
}
