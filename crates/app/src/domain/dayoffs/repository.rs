//! Day-Offs Repository

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::domain::dayoffs::{
    data::NewDayOff,
    records::{DayOffRecord, DayOffUuid, DeletionFlag, OrganizationId},
};

const FIND_ACTIVE_DAY_OFF_SQL: &str = include_str!("sql/find_active_day_off.sql");
const FIND_ACTIVE_DAY_OFFS_IN_RANGE_SQL: &str = include_str!("sql/find_active_day_offs_in_range.sql");
const INSERT_DAY_OFF_SQL: &str = include_str!("sql/insert_day_off.sql");
const UPDATE_DAY_OFF_SQL: &str = include_str!("sql/update_day_off.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgDayOffsRepository;

impl PgDayOffsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn find_active(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        organization: &OrganizationId,
        day: Date,
    ) -> Result<Option<DayOffRecord>, sqlx::Error> {
        query_as::<Postgres, DayOffRecord>(FIND_ACTIVE_DAY_OFF_SQL)
            .bind(organization.as_str())
            .bind(SqlxDate::from(day))
            .bind(DeletionFlag::Active.as_i32())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn find_active_in_range(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        organization: &OrganizationId,
        from: Date,
        to: Date,
    ) -> Result<Vec<DayOffRecord>, sqlx::Error> {
        query_as::<Postgres, DayOffRecord>(FIND_ACTIVE_DAY_OFFS_IN_RANGE_SQL)
            .bind(organization.as_str())
            .bind(SqlxDate::from(from))
            .bind(SqlxDate::from(to))
            .bind(DeletionFlag::Active.as_i32())
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn insert(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        day_off: &NewDayOff,
    ) -> Result<DayOffRecord, sqlx::Error> {
        query_as::<Postgres, DayOffRecord>(INSERT_DAY_OFF_SQL)
            .bind(day_off.uuid.into_uuid())
            .bind(day_off.organization.as_str())
            .bind(SqlxDate::from(day_off.day))
            .bind(day_off.year)
            .bind(day_off.description.as_deref())
            .bind(day_off.creator.as_str())
            .bind(SqlxDate::from(day_off.created_on))
            .bind(DeletionFlag::Active.as_i32())
            .fetch_one(&mut **tx)
            .await
    }

    /// Persist the mutable columns of an existing record.
    pub(crate) async fn update(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        record: &DayOffRecord,
    ) -> Result<DayOffRecord, sqlx::Error> {
        query_as::<Postgres, DayOffRecord>(UPDATE_DAY_OFF_SQL)
            .bind(record.uuid.into_uuid())
            .bind(record.description.as_deref())
            .bind(record.modifier.as_deref())
            .bind(record.modified_on.map(SqlxDate::from))
            .bind(record.deletion.as_i32())
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for DayOffRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let deletion = DeletionFlag::try_from(row.try_get::<i32, _>("delflag")?).map_err(|e| {
            sqlx::Error::ColumnDecode {
                index: "delflag".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(Self {
            uuid: DayOffUuid::from_uuid(row.try_get("id")?),
            organization: OrganizationId::new(row.try_get::<String, _>("organid")?),
            day: row.try_get::<SqlxDate, _>("dayoff")?.to_jiff(),
            year: row.try_get("year")?,
            description: row.try_get("description")?,
            creator: row.try_get("creator")?,
            created_on: row.try_get::<SqlxDate, _>("createdate")?.to_jiff(),
            modifier: row.try_get("modifier")?,
            modified_on: row
                .try_get::<Option<SqlxDate>, _>("modifydate")?
                .map(SqlxDate::to_jiff),
            deletion,
        })
    }
}
