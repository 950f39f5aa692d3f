// goal.rs — Goal subcommands: create, list, record, score.

use serde::Serialize;

use quest_ledger::{Goal, GoalLedger, GoalState, LedgerStore, NewGoal};

use super::open_working;
use crate::config::QuestConfig;

/// Arguments for `quest create`.
#[derive(Debug, Clone, clap::Args)]
pub struct CreateArgs {
    /// Goal type: simple, eternal, or checklist (or 1, 2, 3).
    pub variant: String,
    /// Short name for the goal.
    pub name: String,
    /// What the goal is about.
    pub description: String,
    /// Points earned per recorded event.
    #[arg(allow_negative_numbers = true)]
    pub points: i64,
    /// Checklist only: events needed to complete the goal.
    #[arg(long)]
    pub target: Option<u32>,
    /// Checklist only: bonus points for reaching the target.
    #[arg(long)]
    pub bonus: Option<i64>,
}

pub fn create(config: &QuestConfig, args: &CreateArgs) -> anyhow::Result<()> {
    let store = LedgerStore::new(&config.ledger_file);
    let mut ledger = open_working(&store)?;

    let mut request = NewGoal::new(&args.variant, &args.name, &args.description, args.points);
    request.target = args.target;
    request.bonus = args.bonus;
    let position = ledger.create_goal(request)?;
    store.save(&ledger)?;

    let goal = ledger.goal(position)?;
    tracing::info!(position, variant = %goal.variant(), "created goal");
    println!("Created goal {}: {}", position, goal.details());
    Ok(())
}

/// One row of `quest list --json`.
#[derive(Serialize)]
struct GoalRow<'a> {
    position: usize,
    complete: bool,
    state: GoalState,
    details: String,
    serialized: String,
    #[serde(flatten)]
    goal: &'a Goal,
}

pub fn list(config: &QuestConfig, json: bool) -> anyhow::Result<()> {
    let store = LedgerStore::new(&config.ledger_file);
    let ledger = open_working(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&goal_rows(&ledger))?);
        return Ok(());
    }

    if ledger.is_empty() {
        println!("No goals yet. Create one with `quest create`.");
        return Ok(());
    }

    for (position, details) in ledger.list_goals() {
        println!("{}. {}", position, details);
    }
    println!("\nScore: {}", ledger.current_score());
    Ok(())
}

fn goal_rows(ledger: &GoalLedger) -> Vec<GoalRow<'_>> {
    ledger
        .goals()
        .iter()
        .enumerate()
        .map(|(i, goal)| GoalRow {
            position: i + 1,
            complete: goal.is_complete(),
            state: goal.state(),
            details: goal.details(),
            serialized: goal.serialized(),
            goal,
        })
        .collect()
}

/// Record one event and return the points it earned.
pub fn record(config: &QuestConfig, position: usize) -> anyhow::Result<i64> {
    let store = LedgerStore::new(&config.ledger_file);
    let mut ledger = open_working(&store)?;

    let was_complete = ledger.goal(position)?.is_complete();
    let earned = ledger.record_event(position)?;
    store.save(&ledger)?;

    let goal = ledger.goal(position)?;
    println!("Earned {} points.", earned);
    if !was_complete && goal.is_complete() {
        println!("Goal complete: {}", goal.name());
    }
    println!("Score: {}", ledger.current_score());
    Ok(earned)
}

pub fn score(config: &QuestConfig) -> anyhow::Result<i64> {
    let store = LedgerStore::new(&config.ledger_file);
    let ledger = open_working(&store)?;
    println!("Score: {}", ledger.current_score());
    Ok(ledger.current_score())
}
