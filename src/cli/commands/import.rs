use std::fs;

use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::super::args::ImportCommand;
use super::context::SessionContext;
use super::{CommandResult, CommandSummary, ImportSummary};
use crate::{missing_log::LogMode, registry::Translators};

pub fn import(cmd: ImportCommand) -> Result<CommandResult> {
    let mut ctx = SessionContext::new(&cmd.common)?;
    ctx.settings.fill_unknown = false;
    ctx.settings.log_mode = LogMode::Disabled;

    let content = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read file: {}", cmd.file.display()))?;
    let imported = match serde_json::from_str::<Value>(&content)
        .with_context(|| format!("Failed to parse JSON: {}", cmd.file.display()))?
    {
        Value::Object(map) => map,
        _ => bail!(
            "'{}' must contain a flat JSON object of \"key\": \"value\" entries.",
            cmd.file.display()
        ),
    };

    let store = ctx.store()?;
    let language = ctx.settings.language.clone();
    let dictionary_path = store.path_for(&language);
    let mut translators = Translators::new(store, ctx.settings).bootstrap_missing(true);
    let translator = translators.get_or_open(&language)?;

    let flat = if cmd.merge {
        let mut existing = translator.export_flat();
        existing.extend(imported);
        existing
    } else {
        imported
    };

    translator
        .import_flat(&flat)
        .with_context(|| format!("Invalid entry in {}", cmd.file.display()))?;
    translators.finish()?;

    Ok(CommandSummary::Import(ImportSummary {
        entry_count: flat.len(),
        dictionary_path,
        merged: cmd.merge,
    })
    .into())
}
