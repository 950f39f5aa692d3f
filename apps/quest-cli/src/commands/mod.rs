pub mod goal;
pub mod ledger;

use quest_ledger::{GoalLedger, LedgerStore, LoadReport};

/// Open the working ledger, warning about any lines that had to be dropped.
pub(crate) fn open_working(store: &LedgerStore) -> anyhow::Result<GoalLedger> {
    let (ledger, report) = store.open()?;
    warn_skipped(store, &report);
    Ok(ledger)
}

pub(crate) fn warn_skipped(store: &LedgerStore, report: &LoadReport) {
    for skipped in &report.skipped {
        tracing::warn!(
            "{}:{}: skipped goal line: {}",
            store.path().display(),
            skipped.line,
            skipped.error
        );
    }
}
