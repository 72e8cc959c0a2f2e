//! Repairs the rule battery folds back into the performance list

use chrono::{DateTime, FixedOffset};
use maraton_core::Performance;

/// One repair, addressed by the performance's position in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct Repair {
    pub index: usize,
    pub action: RepairAction,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RepairAction {
    /// Rewrite an id whose date prefix does not match its day
    SetId(String),
    /// Push a closing set's end time out to the floor
    SetEndTime(DateTime<FixedOffset>),
    /// Replace a remote-broadcast caption
    SetDescription(String),
}

/// Apply repairs to the owned performance list.
pub fn apply(performances: &mut [Performance], repairs: &[Repair]) {
    for repair in repairs {
        let performance = &mut performances[repair.index];
        match &repair.action {
            RepairAction::SetId(id) => performance.id = id.clone(),
            RepairAction::SetEndTime(end) => performance.end_time = *end,
            RepairAction::SetDescription(text) => performance.description = text.clone(),
        }
    }
}
