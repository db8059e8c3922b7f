use std::io::{self, Write};

use anyhow::{Context, Result};
use serde_json::Value;

use super::super::args::{ExportCommand, ExportFormat};
use super::context::SessionContext;
use super::{CommandResult, CommandSummary, ExportSummary};
use crate::{dictionary::FlatMap, missing_log::LogMode, registry::Translators};

pub fn export(cmd: ExportCommand) -> Result<CommandResult> {
    let mut ctx = SessionContext::new(&cmd.common)?;
    // Read-only: never touch the dictionary or the logs.
    ctx.settings.fill_unknown = false;
    ctx.settings.log_mode = LogMode::Disabled;

    let store = ctx.store()?;
    let language = ctx.settings.language.clone();
    let mut translators = Translators::new(store, ctx.settings);
    let flat = translators.get_or_open(&language)?.export_flat();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_flat(&flat, cmd.format, &mut out).context("Failed to write to stdout")?;

    Ok(CommandSummary::Export(ExportSummary {
        entry_count: flat.len(),
    })
    .into())
}

pub fn write_flat<W: Write>(flat: &FlatMap, format: ExportFormat, out: &mut W) -> Result<()> {
    match format {
        ExportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, flat)?;
            writeln!(out)?;
        }
        ExportFormat::Lines => {
            for (key, value) in flat {
                writeln!(out, "{}={}", key, display_value(value))?;
            }
        }
    }
    Ok(())
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
