//! Day-Off Errors

use salvo::http::StatusError;
use tracing::error;

use dayoff_app::domain::dayoffs::DayOffsServiceError;

pub(crate) fn into_status_error(error: DayOffsServiceError) -> StatusError {
    match error {
        DayOffsServiceError::InvalidDateFormat(_) | DayOffsServiceError::InvalidRange { .. } => {
            StatusError::bad_request().brief(error.to_string())
        }
        DayOffsServiceError::NothingToCreate => {
            StatusError::bad_request().brief("Cannot create a non-off day record")
        }
        DayOffsServiceError::NotFound => StatusError::not_found().brief("Day off not found"),
        DayOffsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Day off already exists")
        }
        DayOffsServiceError::CorruptRecord(column) => {
            error!(%column, "corrupt day off record");

            StatusError::internal_server_error()
        }
        DayOffsServiceError::Sql(source) => {
            error!("day off storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
