//! Day-Off Data

use jiff::civil::Date;

use crate::domain::dayoffs::records::{DayOffUuid, OrganizationId};

/// Create-or-edit request for a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOffUpsert {
    pub organization: OrganizationId,

    /// Day in `DD/MM/YYYY` form.
    pub day: String,

    /// `false` revokes an existing day off.
    pub is_off_day: bool,

    pub description: Option<String>,

    /// Creator of a new record, or modifier of an existing one.
    pub creator: String,
}

/// Inclusive day range for searches, both bounds in `DD/MM/YYYY` form.
#[derive(Debug, Clone, PartialEq)]
pub struct DayOffRange {
    pub from: String,
    pub to: String,
}

/// New Day-Off Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewDayOff {
    pub uuid: DayOffUuid,
    pub organization: OrganizationId,
    pub day: Date,
    pub year: i32,
    pub description: Option<String>,
    pub creator: String,
    pub created_on: Date,
}
