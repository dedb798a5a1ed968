//! Day-offs service.

use async_trait::async_trait;
use jiff::{Zoned, civil::Date};
use mockall::automock;
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::dayoffs::{
        data::{DayOffRange, DayOffUpsert},
        dates::parse_day,
        errors::DayOffsServiceError,
        records::{DayOffRecord, OrganizationId},
        repository::PgDayOffsRepository,
        rules::{self, DayOffEdit, UpsertPlan},
    },
};

#[derive(Debug, Clone)]
pub struct PgDayOffsService {
    db: Db,
    repository: PgDayOffsRepository,
}

impl PgDayOffsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgDayOffsRepository::new(),
        }
    }
}

fn today() -> Date {
    Zoned::now().date()
}

#[async_trait]
impl DayOffsService for PgDayOffsService {
    async fn upsert_day_off(
        &self,
        upsert: DayOffUpsert,
    ) -> Result<DayOffRecord, DayOffsServiceError> {
        let day = parse_day(&upsert.day)?;

        let mut tx = self.db.begin_transaction().await?;

        let active = self
            .repository
            .find_active(&mut tx, &upsert.organization, day)
            .await?;

        let plan = rules::plan_upsert(
            active,
            upsert.organization,
            day,
            DayOffEdit {
                is_off_day: upsert.is_off_day,
                description: upsert.description,
                author: upsert.creator,
            },
            today(),
        )?;

        let record = match plan {
            UpsertPlan::Create(new) => self.repository.insert(&mut tx, &new).await?,
            UpsertPlan::Update(record) => self.repository.update(&mut tx, &record).await?,
        };

        tx.commit().await?;

        info!(
            organization = %record.organization,
            day = %record.day,
            uuid = %record.uuid,
            active = record.is_active(),
            "day off saved"
        );

        Ok(record)
    }

    async fn delete_day_off(
        &self,
        organization: OrganizationId,
        day: String,
    ) -> Result<DayOffRecord, DayOffsServiceError> {
        let day = parse_day(&day)?;

        let mut tx = self.db.begin_transaction().await?;

        let active = self
            .repository
            .find_active(&mut tx, &organization, day)
            .await?
            .ok_or(DayOffsServiceError::NotFound)?;

        let record = self
            .repository
            .update(&mut tx, &rules::revoke(active, today()))
            .await?;

        tx.commit().await?;

        info!(
            organization = %record.organization,
            day = %record.day,
            uuid = %record.uuid,
            "day off deleted"
        );

        Ok(record)
    }

    async fn search_day_offs(
        &self,
        organization: OrganizationId,
        range: DayOffRange,
    ) -> Result<Vec<DayOffRecord>, DayOffsServiceError> {
        let from = parse_day(&range.from)?;
        let to = parse_day(&range.to)?;

        rules::check_range(from, to)?;

        let mut tx = self.db.begin_transaction().await?;

        let records = self
            .repository
            .find_active_in_range(&mut tx, &organization, from, to)
            .await?;

        tx.commit().await?;

        debug!(%organization, %from, %to, matches = records.len(), "day offs searched");

        Ok(records)
    }

    async fn is_off_day(
        &self,
        organization: OrganizationId,
        day: String,
    ) -> Result<bool, DayOffsServiceError> {
        let day = parse_day(&day)?;

        let mut tx = self.db.begin_transaction().await?;

        let active = self
            .repository
            .find_active(&mut tx, &organization, day)
            .await?;

        tx.commit().await?;

        Ok(active.is_some())
    }
}

#[automock]
#[async_trait]
pub trait DayOffsService: Send + Sync {
    /// Creates a day off, edits the active one, or revokes it when `is_off_day` is false.
    async fn upsert_day_off(
        &self,
        upsert: DayOffUpsert,
    ) -> Result<DayOffRecord, DayOffsServiceError>;

    /// Soft-deletes the active day off for the given day.
    async fn delete_day_off(
        &self,
        organization: OrganizationId,
        day: String,
    ) -> Result<DayOffRecord, DayOffsServiceError>;

    /// Lists active day offs within an inclusive range, earliest first.
    async fn search_day_offs(
        &self,
        organization: OrganizationId,
        range: DayOffRange,
    ) -> Result<Vec<DayOffRecord>, DayOffsServiceError>;

    /// Whether the given day is an active day off.
    async fn is_off_day(
        &self,
        organization: OrganizationId,
        day: String,
    ) -> Result<bool, DayOffsServiceError>;
}
