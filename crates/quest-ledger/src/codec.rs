// codec.rs — The line-oriented text format for saved ledgers.
//
// A saved ledger is the score on the first line, then one goal per line:
//
//   705
//   SimpleGoal|Read|Read scripture|100|True
//   EternalGoal|Pray|Pray daily|5
//   ChecklistGoal|Attend|Attend temple|50|10|10|100
//
// Goal lines are `|`-separated and start with the variant tag. Field order
// is fixed per tag:
//
//   SimpleGoal     tag, name, description, points, complete
//   EternalGoal    tag, name, description, points
//   ChecklistGoal  tag, name, description, points, completed, target, bonus

use std::str::FromStr;

use crate::error::{GoalLineError, LedgerError};
use crate::goal::{Goal, GoalKind, GoalVariant};

/// Separator between fields of a goal line.
pub const FIELD_SEPARATOR: char = '|';

/// Encode one goal as its saved line (without a trailing newline).
pub fn encode_goal(goal: &Goal) -> String {
    let sep = FIELD_SEPARATOR;
    let head = format!(
        "{}{sep}{}{sep}{}{sep}{}",
        goal.variant().tag(),
        goal.name(),
        goal.description(),
        goal.base_points()
    );
    match *goal.kind() {
        GoalKind::Simple { is_complete } => format!("{head}{sep}{}", encode_flag(is_complete)),
        GoalKind::Eternal => head,
        GoalKind::Checklist {
            completed,
            target,
            bonus,
        } => format!("{head}{sep}{completed}{sep}{target}{sep}{bonus}"),
    }
}

/// Decode a saved goal line back into a goal with its counters restored.
pub fn decode_goal(line: &str) -> Result<Goal, GoalLineError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let variant = GoalVariant::from_str(fields[0])
        .map_err(|_| GoalLineError::UnknownTag(fields[0].to_string()))?;
    // Menu numbers and short names are for drivers, not for saved files.
    if fields[0] != variant.tag() {
        return Err(GoalLineError::UnknownTag(fields[0].to_string()));
    }

    let expected = field_count(variant);
    if fields.len() != expected {
        return Err(GoalLineError::FieldCount {
            tag: variant.tag(),
            expected,
            found: fields.len(),
        });
    }

    let name = fields[1];
    let description = fields[2];
    let base_points: i64 = parse_number("points", fields[3])?;

    let kind = match variant {
        GoalVariant::Simple => GoalKind::Simple {
            is_complete: decode_flag(fields[4])?,
        },
        GoalVariant::Eternal => GoalKind::Eternal,
        GoalVariant::Checklist => GoalKind::Checklist {
            completed: parse_number("completed", fields[4])?,
            target: parse_number("target", fields[5])?,
            bonus: parse_number("bonus", fields[6])?,
        },
    };

    Goal::with_kind(name, description, base_points, kind)
        .map_err(|e| GoalLineError::Rejected(e.to_string()))
}

/// Parse the score line at the top of a saved ledger.
pub fn parse_score(line: &str) -> Result<i64, LedgerError> {
    line.trim()
        .parse()
        .map_err(|_| LedgerError::FormatError {
            line: 1,
            reason: format!("score is not an integer: {line:?}"),
        })
}

fn field_count(variant: GoalVariant) -> usize {
    match variant {
        GoalVariant::Simple => 5,
        GoalVariant::Eternal => 4,
        GoalVariant::Checklist => 7,
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, GoalLineError> {
    value.trim().parse().map_err(|_| GoalLineError::BadNumber {
        field,
        value: value.to_string(),
    })
}

fn encode_flag(flag: bool) -> &'static str {
    if flag {
        "True"
    } else {
        "False"
    }
}

fn decode_flag(value: &str) -> Result<bool, GoalLineError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(GoalLineError::BadFlag(value.to_string())),
    }
}
