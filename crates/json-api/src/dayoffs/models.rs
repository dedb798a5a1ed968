//! Day-Off Models

use std::string::ToString;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dayoff_app::domain::dayoffs::records::DayOffRecord;

/// Day-off record as returned by the API, with ISO `YYYY-MM-DD` dates.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DayOffResponse {
    /// The unique identifier of the record
    pub id: Uuid,

    /// The organization the day off belongs to
    pub organid: String,

    /// The day that is off
    pub dayoff: String,

    /// Year of the day off
    pub year: i32,

    pub description: Option<String>,

    /// Who created the record
    pub creator: String,

    /// The day the record was created
    pub createdate: String,

    /// Who last edited the record
    pub modifier: Option<String>,

    /// The day the record was last edited
    pub modifydate: Option<String>,

    /// `0` while active, `1` once deleted
    pub delflag: i32,
}

impl From<DayOffRecord> for DayOffResponse {
    fn from(record: DayOffRecord) -> Self {
        DayOffResponse {
            id: record.uuid.into_uuid(),
            organid: record.organization.as_str().to_owned(),
            dayoff: record.day.to_string(),
            year: record.year,
            description: record.description,
            creator: record.creator,
            createdate: record.created_on.to_string(),
            modifier: record.modifier,
            modifydate: record.modified_on.as_ref().map(ToString::to_string),
            delflag: record.deletion.as_i32(),
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use jiff::civil::{Date, date};

    use dayoff_app::domain::dayoffs::records::{
        DayOffRecord, DayOffUuid, DeletionFlag, OrganizationId,
    };

    pub(crate) fn make_day_off(organization: &str, day: Date) -> DayOffRecord {
        DayOffRecord {
            uuid: DayOffUuid::new(),
            organization: OrganizationId::from(organization),
            day,
            year: i32::from(day.year()),
            description: Some("Christmas".to_owned()),
            creator: "u1".to_owned(),
            created_on: date(2024, 11, 30),
            modifier: None,
            modified_on: None,
            deletion: DeletionFlag::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use dayoff_app::domain::dayoffs::records::DeletionFlag;

    use super::{fixtures::make_day_off, *};

    #[test]
    fn response_uses_iso_dates() {
        let record = make_day_off("A", date(2024, 12, 25));
        let uuid = record.uuid.into_uuid();

        let response = DayOffResponse::from(record);

        assert_eq!(response.id, uuid);
        assert_eq!(response.organid, "A");
        assert_eq!(response.dayoff, "2024-12-25");
        assert_eq!(response.year, 2024);
        assert_eq!(response.createdate, "2024-11-30");
        assert_eq!(response.modifydate, None);
        assert_eq!(response.delflag, 0);
    }

    #[test]
    fn deleted_record_reports_flag_and_edit() {
        let mut record = make_day_off("A", date(2024, 12, 25));

        record.modifier = Some("u2".to_owned());
        record.modified_on = Some(date(2024, 12, 1));
        record.deletion = DeletionFlag::Deleted;

        let response = DayOffResponse::from(record);

        assert_eq!(response.modifier.as_deref(), Some("u2"));
        assert_eq!(response.modifydate.as_deref(), Some("2024-12-01"));
        assert_eq!(response.delflag, 1);
    }
}
