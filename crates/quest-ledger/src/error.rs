// error.rs — Error types for the goal ledger.

use thiserror::Error;

/// Errors that can occur while creating, recording, saving, or loading goals.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The requested goal type tag is not one of the known variants.
    #[error("unknown goal type: {0}")]
    InvalidVariant(String),

    /// A checklist goal needs at least one repetition to complete.
    #[error("checklist target must be greater than zero (got {0})")]
    InvalidTarget(u32),

    /// A checklist goal was requested without its target or bonus.
    #[error("checklist goals require both a target and a bonus")]
    MissingChecklistParams,

    /// A text field holds a character the line format cannot carry.
    #[error("{field} cannot contain '|' or line breaks: {value:?}")]
    InvalidField { field: &'static str, value: String },

    /// An event was recorded against a position with no goal.
    #[error("no goal at position {position} (ledger has {len} goal(s))")]
    IndexOutOfRange { position: usize, len: usize },

    /// The persisted ledger could not be parsed.
    #[error("format error on line {line}: {reason}")]
    FormatError { line: usize, reason: String },

    /// Reading from or writing to a sink/source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file operation failed.
    #[error("I/O error at {path}: {source}")]
    IoError {
        path: String,
        source: std::io::Error,
    },
}

/// Why a single saved goal line could not be turned back into a goal.
///
/// These never abort a load; the line is skipped and reported instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GoalLineError {
    #[error("unknown goal tag {0:?}")]
    UnknownTag(String),

    #[error("{tag} expects {expected} fields, found {found}")]
    FieldCount {
        tag: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} is not a valid number: {value:?}")]
    BadNumber { field: &'static str, value: String },

    #[error("completion flag must be True or False, got {0:?}")]
    BadFlag(String),

    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("{0}")]
    Rejected(String),
}
