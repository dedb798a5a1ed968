//! Day-offs service errors.

use jiff::civil::Date;
use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::domain::dayoffs::dates::InvalidDayFormat;

#[derive(Debug, Error)]
pub enum DayOffsServiceError {
    #[error("invalid date format: {0}, expected DD/MM/YYYY")]
    InvalidDateFormat(String),

    #[error("from date {from} cannot be later than to date {to}")]
    InvalidRange { from: Date, to: Date },

    #[error("cannot create a non-off day record")]
    NothingToCreate,

    #[error("day off record not found")]
    NotFound,

    #[error("an active day off record already exists")]
    AlreadyExists,

    #[error("stored day off record is corrupt in column {0}")]
    CorruptRecord(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<InvalidDayFormat> for DayOffsServiceError {
    fn from(error: InvalidDayFormat) -> Self {
        Self::InvalidDateFormat(error.input)
    }
}

impl From<Error> for DayOffsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if let Error::ColumnDecode { index, .. } = &error {
            return Self::CorruptRecord(index.clone());
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(_) | None => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = DayOffsServiceError::from(Error::RowNotFound);

        assert!(
            matches!(error, DayOffsServiceError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn column_decode_maps_to_corrupt_record() {
        let error = DayOffsServiceError::from(Error::ColumnDecode {
            index: "delflag".to_string(),
            source: Box::new(crate::domain::dayoffs::records::UnknownDeletionFlag(7)),
        });

        assert!(
            matches!(&error, DayOffsServiceError::CorruptRecord(column) if column == "delflag"),
            "expected CorruptRecord, got {error:?}"
        );
    }

    #[test]
    fn other_errors_stay_storage_errors() {
        let error = DayOffsServiceError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, DayOffsServiceError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }

    #[test]
    fn invalid_day_keeps_the_input() {
        let error = DayOffsServiceError::from(InvalidDayFormat {
            input: "2024-12-25".to_owned(),
        });

        assert_eq!(
            error.to_string(),
            "invalid date format: 2024-12-25, expected DD/MM/YYYY"
        );
    }
}
