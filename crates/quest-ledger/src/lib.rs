//! # quest-ledger
//!
//! Goal tracking and scoring for Eternal Quest.
//!
//! A [`GoalLedger`] holds an ordered list of [`Goal`]s and a running score.
//! Recording an event against a goal asks the goal how many points that
//! event is worth, updates the goal's completion state, and adds the points
//! to the score. The whole ledger saves to and loads from a plain-text,
//! line-per-goal format.
//!
//! ## Key components
//!
//! - [`Goal`] — one objective; [`GoalKind`] holds the Simple / Eternal /
//!   Checklist state that decides completion and payouts
//! - [`GoalLedger`] — creation, event recording, listing, save and load
//! - [`codec`] — the `|`-delimited line format
//! - [`LedgerStore`] — a ledger kept in a single file on disk
//!
//! ## Quick Example
//!
//! ```rust
//! use quest_ledger::{GoalLedger, NewGoal};
//!
//! let mut ledger = GoalLedger::new();
//! let run = ledger
//!     .create_goal(NewGoal::new("checklist", "Run", "Run a 5k", 10).with_checklist(3, 50))
//!     .unwrap();
//! ledger.record_event(run).unwrap();
//! assert_eq!(ledger.current_score(), 10);
//! ```

pub mod codec;
pub mod error;
pub mod goal;
pub mod ledger;
pub mod store;

pub use error::{GoalLineError, LedgerError};
pub use goal::{Goal, GoalKind, GoalState, GoalVariant};
pub use ledger::{GoalLedger, LoadReport, NewGoal, SkippedLine};
pub use store::LedgerStore;
