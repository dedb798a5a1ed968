//! Delete Day Off Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dayoff_app::domain::dayoffs::records::OrganizationId;

use crate::{
    dayoffs::{errors::into_status_error, models::DayOffResponse},
    extensions::*,
    state::State,
};

/// Delete Day Off Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DeleteDayOffRequest {
    /// Day in `DD/MM/YYYY` form
    pub dayoff: String,

    pub organid: String,
}

/// Delete Day Off Handler
///
/// Soft-deletes the active day off and returns it with its deletion flag set.
#[endpoint(
    tags("dayoff"),
    summary = "Delete Day Off",
    responses(
        (status_code = StatusCode::OK, description = "Day off deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Day off not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<DeleteDayOffRequest>,
    depot: &mut Depot,
) -> Result<Json<DayOffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let record = state
        .day_offs()?
        .delete_day_off(OrganizationId::from(request.organid), request.dayoff)
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dayoff_app::domain::dayoffs::{
        DayOffsServiceError, MockDayOffsService, records::DeletionFlag,
    };

    use crate::{dayoffs::models::fixtures::make_day_off, test_helpers::day_offs_service};

    use super::*;

    fn make_service(day_offs: MockDayOffsService) -> Service {
        day_offs_service(day_offs, Router::with_path("api/dayoff/delete").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_day_off_success() -> TestResult {
        let mut record = make_day_off("A", date(2024, 12, 25));

        record.deletion = DeletionFlag::Deleted;
        record.modified_on = Some(date(2024, 12, 1));

        let mut day_offs = MockDayOffsService::new();

        day_offs
            .expect_delete_day_off()
            .once()
            .withf(|organization, day| organization.as_str() == "A" && day == "25/12/2024")
            .return_once(move |_, _| Ok(record));

        day_offs.expect_upsert_day_off().never();
        day_offs.expect_search_day_offs().never();
        day_offs.expect_is_off_day().never();

        let mut res = TestClient::delete("http://example.com/api/dayoff/delete")
            .json(&json!({ "dayoff": "25/12/2024", "organid": "A" }))
            .send(&make_service(day_offs))
            .await;

        let body: DayOffResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.delflag, 1);
        assert_eq!(body.modifydate.as_deref(), Some("2024-12-01"));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_day_off_not_found_returns_404() -> TestResult {
        let mut day_offs = MockDayOffsService::new();

        day_offs
            .expect_delete_day_off()
            .once()
            .return_once(|_, _| Err(DayOffsServiceError::NotFound));

        let res = TestClient::delete("http://example.com/api/dayoff/delete")
            .json(&json!({ "dayoff": "25/12/2024", "organid": "A" }))
            .send(&make_service(day_offs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_day_off_invalid_date_returns_400() -> TestResult {
        let mut day_offs = MockDayOffsService::new();

        day_offs
            .expect_delete_day_off()
            .once()
            .return_once(|_, day| Err(DayOffsServiceError::InvalidDateFormat(day)));

        let res = TestClient::delete("http://example.com/api/dayoff/delete")
            .json(&json!({ "dayoff": "32/12/2024", "organid": "A" }))
            .send(&make_service(day_offs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_day_off_requires_organid() -> TestResult {
        let mut day_offs = MockDayOffsService::new();

        day_offs.expect_delete_day_off().never();

        let res = TestClient::delete("http://example.com/api/dayoff/delete")
            .json(&json!({ "dayoff": "25/12/2024" }))
            .send(&make_service(day_offs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
