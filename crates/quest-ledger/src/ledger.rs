// ledger.rs — GoalLedger: the ordered goal list plus the running score.
//
// Goals are addressed by 1-based position in creation order, which is also
// the order they are listed and saved in. The score only ever grows: each
// recorded event adds whatever the goal paid out.
//
// Saving writes the score line followed by one line per goal (see codec.rs).
// Loading replaces the whole ledger. A goal line that cannot be decoded is
// skipped and reported in the LoadReport rather than failing the load; a
// missing or malformed score line fails it.

use std::io::{BufRead, Write};

use serde::Serialize;

use crate::codec;
use crate::error::{GoalLineError, LedgerError};
use crate::goal::{Goal, GoalVariant};

/// A request to create a goal, as collected by a driver.
///
/// `variant` is the raw type tag the user picked; it is validated when the
/// goal is created. `target` and `bonus` only matter for checklist goals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGoal {
    pub variant: String,
    pub name: String,
    pub description: String,
    pub base_points: i64,
    pub target: Option<u32>,
    pub bonus: Option<i64>,
}

impl NewGoal {
    pub fn new(
        variant: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        base_points: i64,
    ) -> Self {
        Self {
            variant: variant.into(),
            name: name.into(),
            description: description.into(),
            base_points,
            target: None,
            bonus: None,
        }
    }

    /// Attach the checklist target and completion bonus.
    pub fn with_checklist(mut self, target: u32, bonus: i64) -> Self {
        self.target = Some(target);
        self.bonus = Some(bonus);
        self
    }
}

/// One goal line that was dropped during a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source (the score is line 1).
    pub line: usize,
    pub error: GoalLineError,
}

/// What a load restored and what it had to drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

/// The owning collection of goals plus the cumulative score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoalLedger {
    score: i64,
    goals: Vec<Goal>,
}

impl GoalLedger {
    /// An empty ledger with a score of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a goal from a driver request and append it.
    ///
    /// Returns the new goal's 1-based position. Nothing is appended if the
    /// request is invalid.
    pub fn create_goal(&mut self, request: NewGoal) -> Result<usize, LedgerError> {
        let variant: GoalVariant = request.variant.parse()?;
        let goal = match variant {
            GoalVariant::Simple => {
                Goal::simple(request.name, request.description, request.base_points)?
            }
            GoalVariant::Eternal => {
                Goal::eternal(request.name, request.description, request.base_points)?
            }
            GoalVariant::Checklist => {
                let (Some(target), Some(bonus)) = (request.target, request.bonus) else {
                    return Err(LedgerError::MissingChecklistParams);
                };
                Goal::checklist(
                    request.name,
                    request.description,
                    request.base_points,
                    target,
                    bonus,
                )?
            }
        };
        Ok(self.push(goal))
    }

    /// Append an already built goal and return its 1-based position.
    pub fn push(&mut self, goal: Goal) -> usize {
        tracing::debug!(
            variant = %goal.variant(),
            name = goal.name(),
            position = self.goals.len() + 1,
            "goal created"
        );
        self.goals.push(goal);
        self.goals.len()
    }

    /// Every goal's position and status line, in ledger order.
    pub fn list_goals(&self) -> Vec<(usize, String)> {
        self.goals
            .iter()
            .enumerate()
            .map(|(i, g)| (i + 1, g.details()))
            .collect()
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Look up a goal by 1-based position.
    pub fn goal(&self, position: usize) -> Result<&Goal, LedgerError> {
        let index = self.index_of(position)?;
        Ok(&self.goals[index])
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Record one event against the goal at `position`.
    ///
    /// Adds the points the goal pays to the score and returns them. An
    /// invalid position leaves the ledger untouched.
    pub fn record_event(&mut self, position: usize) -> Result<i64, LedgerError> {
        let index = self.index_of(position)?;
        let goal = &mut self.goals[index];
        let was_complete = goal.is_complete();
        let earned = goal.record_event();
        self.score = self.score.saturating_add(earned);

        tracing::debug!(position, earned, score = self.score, "event recorded");
        if !was_complete && goal.is_complete() {
            tracing::debug!(position, name = goal.name(), "goal completed");
        }
        Ok(earned)
    }

    pub fn current_score(&self) -> i64 {
        self.score
    }

    /// Write the score and every goal line to `sink`.
    pub fn save(&self, mut sink: impl Write) -> Result<(), LedgerError> {
        writeln!(sink, "{}", self.score)?;
        for goal in &self.goals {
            writeln!(sink, "{}", goal.serialized())?;
        }
        sink.flush()?;
        tracing::debug!(goals = self.goals.len(), score = self.score, "ledger saved");
        Ok(())
    }

    /// Replace this ledger with the one read from `source`.
    ///
    /// The whole source is read and parsed before anything is replaced, so a
    /// read failure or a bad score line leaves the ledger as it was. Blank
    /// goal lines are ignored.
    pub fn load(&mut self, source: impl BufRead) -> Result<LoadReport, LedgerError> {
        let mut lines = source.split(b'\n');
        let score_bytes = lines.next().transpose()?.ok_or_else(|| LedgerError::FormatError {
            line: 1,
            reason: "missing score line".to_string(),
        })?;
        let score_line = std::str::from_utf8(trim_cr(&score_bytes)).map_err(|_| {
            LedgerError::FormatError {
                line: 1,
                reason: "score line is not valid UTF-8".to_string(),
            }
        })?;
        let score = codec::parse_score(score_line)?;

        let mut goals = Vec::new();
        let mut report = LoadReport::default();
        for (offset, bytes) in lines.enumerate() {
            let bytes = bytes?;
            let line_number = offset + 2;
            let decoded = std::str::from_utf8(trim_cr(&bytes))
                .map_err(|_| GoalLineError::NotUtf8)
                .and_then(|line| {
                    if line.trim().is_empty() {
                        Ok(None)
                    } else {
                        codec::decode_goal(line).map(Some)
                    }
                });
            match decoded {
                Ok(Some(goal)) => goals.push(goal),
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(line = line_number, %error, "skipping malformed goal line");
                    report.skipped.push(SkippedLine {
                        line: line_number,
                        error,
                    });
                }
            }
        }

        report.loaded = goals.len();
        self.score = score;
        self.goals = goals;
        tracing::debug!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            score,
            "ledger loaded"
        );
        Ok(report)
    }

    fn index_of(&self, position: usize) -> Result<usize, LedgerError> {
        if position == 0 || position > self.goals.len() {
            return Err(LedgerError::IndexOutOfRange {
                position,
                len: self.goals.len(),
            });
        }
        Ok(position - 1)
    }
}

/// Drop the `\r` left behind by CRLF line endings.
fn trim_cr(line: &[u8]) -> &[u8] {
    line.strip_suffix(b"\r").unwrap_or(line)
}
