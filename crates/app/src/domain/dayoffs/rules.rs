//! Day-off lifecycle rules.
//!
//! Records move absent → active on creation, active → active on edit, and active → deleted on
//! revocation or deletion. Nothing here touches storage; the service looks records up, asks
//! these functions what to write, and persists the answer.

use jiff::civil::Date;

use crate::domain::dayoffs::{
    data::NewDayOff,
    errors::DayOffsServiceError,
    records::{DayOffRecord, DayOffUuid, DeletionFlag, OrganizationId},
};

/// The change requested for one (organization, day) pair.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DayOffEdit {
    pub(crate) is_off_day: bool,
    pub(crate) description: Option<String>,
    pub(crate) author: String,
}

/// The single write an upsert resolves to.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UpsertPlan {
    Create(NewDayOff),
    Update(DayOffRecord),
}

/// Decide how an upsert applies given the currently active record, if any.
pub(crate) fn plan_upsert(
    active: Option<DayOffRecord>,
    organization: OrganizationId,
    day: Date,
    edit: DayOffEdit,
    today: Date,
) -> Result<UpsertPlan, DayOffsServiceError> {
    if let Some(mut record) = active {
        record.description = edit.description;
        record.modifier = Some(edit.author);
        record.modified_on = Some(today);

        if !edit.is_off_day {
            record.deletion = DeletionFlag::Deleted;
        }

        return Ok(UpsertPlan::Update(record));
    }

    if !edit.is_off_day {
        return Err(DayOffsServiceError::NothingToCreate);
    }

    Ok(UpsertPlan::Create(NewDayOff {
        uuid: DayOffUuid::new(),
        organization,
        day,
        year: i32::from(day.year()),
        description: edit.description,
        creator: edit.author,
        created_on: today,
    }))
}

/// Soft-delete an active record.
pub(crate) fn revoke(mut record: DayOffRecord, today: Date) -> DayOffRecord {
    record.deletion = DeletionFlag::Deleted;
    record.modified_on = Some(today);

    record
}

/// Reject ranges whose lower bound is after the upper bound.
pub(crate) fn check_range(from: Date, to: Date) -> Result<(), DayOffsServiceError> {
    if from > to {
        return Err(DayOffsServiceError::InvalidRange { from, to });
    }

    Ok(())
}
