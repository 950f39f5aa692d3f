// goal.rs — Goal: one tracked objective and its scoring rule.
//
// Every goal shares a name, a description, and the points it awards per
// event. What differs between goals is when they count as complete and
// whether an event can earn a bonus:
//
//   Simple     one event completes it
//   Eternal    never completes, always pays out
//   Checklist  completes after `target` events, pays `bonus` on that event
//
// The state machine is one-way:
//   Incomplete → Complete   (Simple, Checklist)
//   Perpetual               (Eternal)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::codec;
use crate::error::LedgerError;

/// The three kinds of goal, without their per-goal state.
///
/// This is what a driver asks for when creating a goal. It parses from the
/// persisted tags (`SimpleGoal`), short names (`simple`), or the menu
/// numbers (`1`, `2`, `3`), ignoring case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalVariant {
    Simple,
    Eternal,
    Checklist,
}

impl GoalVariant {
    /// The tag that starts this variant's line in a saved ledger.
    pub fn tag(self) -> &'static str {
        match self {
            GoalVariant::Simple => "SimpleGoal",
            GoalVariant::Eternal => "EternalGoal",
            GoalVariant::Checklist => "ChecklistGoal",
        }
    }
}

impl fmt::Display for GoalVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for GoalVariant {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "simplegoal" | "simple" | "1" => Ok(GoalVariant::Simple),
            "eternalgoal" | "eternal" | "2" => Ok(GoalVariant::Eternal),
            "checklistgoal" | "checklist" | "3" => Ok(GoalVariant::Checklist),
            _ => Err(LedgerError::InvalidVariant(s.to_string())),
        }
    }
}

/// Variant-specific state carried by a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum GoalKind {
    /// Completes on its first event.
    Simple { is_complete: bool },

    /// Never completes.
    Eternal,

    /// Completes once `completed` reaches `target`; the event that gets it
    /// there earns `bonus` on top of the base points.
    Checklist {
        completed: u32,
        target: u32,
        bonus: i64,
    },
}

impl GoalKind {
    pub fn variant(&self) -> GoalVariant {
        match self {
            GoalKind::Simple { .. } => GoalVariant::Simple,
            GoalKind::Eternal => GoalVariant::Eternal,
            GoalKind::Checklist { .. } => GoalVariant::Checklist,
        }
    }
}

/// Where a goal sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalState {
    Incomplete,
    Complete,
    /// Eternal goals have no end state.
    Perpetual,
}

impl fmt::Display for GoalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalState::Incomplete => write!(f, "incomplete"),
            GoalState::Complete => write!(f, "complete"),
            GoalState::Perpetual => write!(f, "perpetual"),
        }
    }
}

/// A tracked goal.
///
/// Name, description, base points, and (for checklists) target and bonus
/// are fixed at construction. Only `record_event` changes a goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Goal {
    name: String,
    description: String,
    base_points: i64,
    #[serde(flatten)]
    kind: GoalKind,
}

impl Goal {
    /// A new, incomplete simple goal.
    pub fn simple(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Result<Self, LedgerError> {
        Self::with_kind(
            name,
            description,
            base_points,
            GoalKind::Simple { is_complete: false },
        )
    }

    /// A new eternal goal.
    pub fn eternal(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Result<Self, LedgerError> {
        Self::with_kind(name, description, base_points, GoalKind::Eternal)
    }

    /// A new checklist goal with nothing completed yet.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        target: u32,
        bonus: i64,
    ) -> Result<Self, LedgerError> {
        Self::with_kind(
            name,
            description,
            base_points,
            GoalKind::Checklist {
                completed: 0,
                target,
                bonus,
            },
        )
    }

    /// Build a goal with explicit variant state. Used when restoring a
    /// saved ledger, where counters are not at their initial values.
    pub(crate) fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
        kind: GoalKind,
    ) -> Result<Self, LedgerError> {
        let name = checked_field("name", name.into())?;
        let description = checked_field("description", description.into())?;
        if let GoalKind::Checklist { target, .. } = kind {
            if target == 0 {
                return Err(LedgerError::InvalidTarget(target));
            }
        }
        Ok(Self {
            name,
            description,
            base_points,
            kind,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn base_points(&self) -> i64 {
        self.base_points
    }

    pub fn kind(&self) -> &GoalKind {
        &self.kind
    }

    pub fn variant(&self) -> GoalVariant {
        self.kind.variant()
    }

    /// Register one occurrence of progress and return the points it earns.
    ///
    /// Never fails. Events on an already complete goal still pay the base
    /// points; a checklist bonus is paid only on the event that reaches the
    /// target.
    pub fn record_event(&mut self) -> i64 {
        match &mut self.kind {
            GoalKind::Simple { is_complete } => {
                *is_complete = true;
                self.base_points
            }
            GoalKind::Eternal => self.base_points,
            GoalKind::Checklist {
                completed,
                target,
                bonus,
            } => {
                let before = *completed;
                *completed = before.saturating_add(1);
                if *completed != before && *completed == *target {
                    self.base_points.saturating_add(*bonus)
                } else {
                    self.base_points
                }
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        match self.kind {
            GoalKind::Simple { is_complete } => is_complete,
            GoalKind::Eternal => false,
            GoalKind::Checklist {
                completed, target, ..
            } => completed >= target,
        }
    }

    pub fn state(&self) -> GoalState {
        match self.kind {
            GoalKind::Eternal => GoalState::Perpetual,
            _ if self.is_complete() => GoalState::Complete,
            _ => GoalState::Incomplete,
        }
    }

    /// Human-readable status line, e.g. `[X] Read (Read scripture)`.
    pub fn details(&self) -> String {
        let marker = if self.is_complete() { 'X' } else { ' ' };
        let line = format!("[{marker}] {} ({})", self.name, self.description);
        match self.kind {
            GoalKind::Checklist {
                completed, target, ..
            } => format!("{line} -- Completed {completed}/{target}"),
            _ => line,
        }
    }

    /// The single pipe-delimited line this goal is saved as.
    pub fn serialized(&self) -> String {
        codec::encode_goal(self)
    }
}

fn checked_field(field: &'static str, value: String) -> Result<String, LedgerError> {
    if value.contains([codec::FIELD_SEPARATOR, '\n', '\r']) {
        return Err(LedgerError::InvalidField { field, value });
    }
    Ok(value)
}
