//! Test Helpers

use jiff::civil::Date;
use jiff_sqlx::Date as SqlxDate;
use sqlx::{query, query_scalar};
use uuid::Uuid;

use crate::{
    domain::dayoffs::{
        DayOffsService, DayOffsServiceError,
        data::{DayOffRange, DayOffUpsert},
        records::{DayOffRecord, OrganizationId},
    },
    test::TestContext,
};

pub(crate) async fn upsert(
    ctx: &TestContext,
    organization: &str,
    day: &str,
    is_off_day: bool,
    description: Option<&str>,
) -> Result<DayOffRecord, DayOffsServiceError> {
    ctx.day_offs
        .upsert_day_off(DayOffUpsert {
            organization: OrganizationId::from(organization),
            day: day.to_owned(),
            is_off_day,
            description: description.map(str::to_owned),
            creator: "u1".to_owned(),
        })
        .await
}

pub(crate) fn range(from: &str, to: &str) -> DayOffRange {
    DayOffRange {
        from: from.to_owned(),
        to: to.to_owned(),
    }
}

/// Rows for the pair regardless of deletion flag.
pub(crate) async fn count_rows(ctx: &TestContext, organization: &str, day: Date) -> i64 {
    query_scalar("SELECT COUNT(*) FROM daysoffyear WHERE organid = $1 AND dayoff = $2")
        .bind(organization)
        .bind(SqlxDate::from(day))
        .fetch_one(ctx.db.pool())
        .await
        .expect("Failed to count day off rows")
}

/// Insert an active row directly, bypassing the service's existence check.
pub(crate) async fn insert_active_row(
    ctx: &TestContext,
    organization: &str,
    day: Date,
) -> Result<(), DayOffsServiceError> {
    query(
        "INSERT INTO daysoffyear (id, organid, dayoff, year, creator, createdate, delflag) \
         VALUES ($1, $2, $3, $4, 'race', $3, 0)",
    )
    .bind(Uuid::now_v7())
    .bind(organization)
    .bind(SqlxDate::from(day))
    .bind(i32::from(day.year()))
    .execute(ctx.db.pool())
    .await?;

    Ok(())
}
