use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::args::TranslateArgs;
use super::context::SessionContext;
use super::{CommandResult, CommandSummary, TranslateSummary};
use crate::{missing_log::LogMode, registry::Translators, store::DictionaryStore};

pub fn translate(args: TranslateArgs) -> Result<CommandResult> {
    let mut ctx = SessionContext::new(&args.common)?;

    if args.fill_unknown {
        ctx.settings.fill_unknown = true;
    }
    if let Some(dir) = &args.log_unknown {
        ctx.settings.log_mode = LogMode::File(dir.clone());
    } else if args.warn_unknown {
        ctx.settings.log_mode = LogMode::Warn;
    }

    let store = ctx.store()?;
    let language = ctx.settings.language.clone();
    if !store.path_for(&language).exists() {
        eprintln!(
            "{} no dictionary for language '{}' at {}; keys will be printed as-is",
            "warning:".bold().yellow(),
            language,
            store.location(&language)
        );
    }

    let mut translators = Translators::new(store, ctx.settings).bootstrap_missing(true);
    let translator = translators.get_or_open(&language)?;
    let mut summary = TranslateSummary {
        language,
        ..Default::default()
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for key in &args.keys {
        let text = match translator.try_resolve(key) {
            Some(text) => {
                summary.translated_count += 1;
                text
            }
            None => {
                summary.missing_count += 1;
                key.clone()
            }
        };
        writeln!(out, "{}", text).context("Failed to write to stdout")?;
    }
    out.flush().context("Failed to write to stdout")?;

    summary.flush = translators
        .finish()?
        .remove(&summary.language)
        .unwrap_or_default();
    Ok(CommandSummary::Translate(summary).into())
}
