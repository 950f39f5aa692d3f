// ledger.rs — Ledger subcommands: save to and load from a named file.

use std::path::Path;

use quest_ledger::{GoalLedger, LedgerStore, LoadReport};

use super::{open_working, warn_skipped};
use crate::config::QuestConfig;

/// Copy the working ledger to `file`.
pub fn save(config: &QuestConfig, file: &Path) -> anyhow::Result<()> {
    let working = LedgerStore::new(&config.ledger_file);
    let ledger = open_working(&working)?;

    LedgerStore::new(file).save(&ledger)?;
    tracing::info!(file = %file.display(), goals = ledger.len(), "saved ledger");
    println!("Saved {} goal(s) to {}.", ledger.len(), file.display());
    Ok(())
}

/// Replace the working ledger with the contents of `file`.
///
/// The working ledger is only rewritten once `file` has been read and its
/// score line parsed; unreadable goal lines are reported and dropped.
pub fn load(config: &QuestConfig, file: &Path) -> anyhow::Result<LoadReport> {
    let source = LedgerStore::new(file);
    let mut ledger = GoalLedger::new();
    let report = source.load_into(&mut ledger)?;
    warn_skipped(&source, &report);

    LedgerStore::new(&config.ledger_file).save(&ledger)?;
    tracing::info!(
        file = %file.display(),
        loaded = report.loaded,
        skipped = report.skipped.len(),
        "loaded ledger"
    );

    println!("Loaded {} goal(s) from {}.", report.loaded, file.display());
    for skipped in &report.skipped {
        println!("  skipped line {}: {}", skipped.line, skipped.error);
    }
    println!("Score: {}", ledger.current_score());
    Ok(report)
}
