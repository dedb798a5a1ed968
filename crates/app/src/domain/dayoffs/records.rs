//! Day-Off Records

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::uuids::TypedUuid;

/// Day-Off UUID
pub type DayOffUuid = TypedUuid<DayOffRecord>;

/// Organization identifier partitioning day-off records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrganizationId(String);

impl OrganizationId {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for OrganizationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for OrganizationId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for OrganizationId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Persisted deletion flag, stored as `0` (active) or `1` (soft-deleted).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletionFlag {
    Active,
    Deleted,
}

impl DeletionFlag {
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Active => 0,
            Self::Deleted => 1,
        }
    }
}

/// A stored deletion flag outside `0`/`1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown deletion flag value {0}")]
pub struct UnknownDeletionFlag(pub i32);

impl TryFrom<i32> for DeletionFlag {
    type Error = UnknownDeletionFlag;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Active),
            1 => Ok(Self::Deleted),
            other => Err(UnknownDeletionFlag(other)),
        }
    }
}

/// Day-Off Record
#[derive(Debug, Clone, PartialEq)]
pub struct DayOffRecord {
    /// Identifier assigned at creation.
    pub uuid: DayOffUuid,

    /// Owning organization.
    pub organization: OrganizationId,

    /// The calendar day that is off.
    pub day: Date,

    /// Year of `day`, captured at creation.
    pub year: i32,

    pub description: Option<String>,

    /// Who created the record.
    pub creator: String,

    /// Day the record was created.
    pub created_on: Date,

    /// Who last edited the record.
    pub modifier: Option<String>,

    /// Day of the last edit or deletion.
    pub modified_on: Option<Date>,

    pub deletion: DeletionFlag,
}

impl DayOffRecord {
    /// Whether the record is still in effect.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.deletion == DeletionFlag::Active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deletion_flag_maps_to_storage_integers() {
        assert_eq!(DeletionFlag::Active.as_i32(), 0);
        assert_eq!(DeletionFlag::Deleted.as_i32(), 1);
        assert_eq!(DeletionFlag::try_from(0), Ok(DeletionFlag::Active));
        assert_eq!(DeletionFlag::try_from(1), Ok(DeletionFlag::Deleted));
    }

    #[test]
    fn unknown_deletion_flag_is_rejected() {
        assert_eq!(DeletionFlag::try_from(2), Err(UnknownDeletionFlag(2)));
        assert_eq!(DeletionFlag::try_from(-1), Err(UnknownDeletionFlag(-1)));
    }
}
