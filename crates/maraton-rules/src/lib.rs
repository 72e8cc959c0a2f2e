//! Consistency rules and repairs for the festival programme data
//!
//! The battery runs nine independent rules over the performance and artist
//! collections. Rules are pure: each returns structured [`Finding`]s and,
//! for the repairing rules, [`Repair`] values the orchestrator folds back
//! into the owned collections. See [`ScheduleValidator`].

pub mod config;
pub mod repair;
pub mod report;
pub mod rules;
pub mod validator;

pub use config::ValidatorConfig;
pub use repair::{Repair, RepairAction};
pub use report::{Finding, RuleId, RunReport, Severity};
pub use validator::{Schedule, ScheduleValidator};
