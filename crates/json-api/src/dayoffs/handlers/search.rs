//! Search Day Offs Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dayoff_app::domain::dayoffs::{data::DayOffRange, records::OrganizationId};

use crate::{
    dayoffs::{errors::into_status_error, models::DayOffResponse},
    extensions::*,
    state::State,
};

/// Search Day Offs Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchDayOffsRequest {
    /// Inclusive lower bound in `DD/MM/YYYY` form
    pub dayoff_from: String,

    /// Inclusive upper bound in `DD/MM/YYYY` form
    pub dayoff_to: String,

    pub organid: String,
}

/// Search Day Offs Handler
///
/// Lists the organization's active day offs within the range, earliest first.
#[endpoint(
    tags("dayoff"),
    summary = "Search Day Offs",
    responses(
        (status_code = StatusCode::OK, description = "Matching day offs"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<SearchDayOffsRequest>,
    depot: &mut Depot,
) -> Result<Json<Vec<DayOffResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let records = state
        .day_offs()?
        .search_day_offs(
            OrganizationId::from(request.organid),
            DayOffRange {
                from: request.dayoff_from,
                to: request.dayoff_to,
            },
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(records.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use dayoff_app::domain::dayoffs::{DayOffsServiceError, MockDayOffsService};

    use crate::{dayoffs::models::fixtures::make_day_off, test_helpers::day_offs_service};

    use super::*;

    fn make_service(day_offs: MockDayOffsService) -> Service {
        day_offs_service(day_offs, Router::with_path("api/dayoff/search").post(handler))
    }

    #[tokio::test]
    async fn test_search_day_offs_success() -> TestResult {
        let records = vec![
            make_day_off("A", date(2024, 12, 24)),
            make_day_off("A", date(2024, 12, 25)),
        ];

        let mut day_offs = MockDayOffsService::new();

        day_offs
            .expect_search_day_offs()
            .once()
            .withf(|organization, range| {
                organization.as_str() == "A"
                    && *range
                        == DayOffRange {
                            from: "01/12/2024".to_owned(),
                            to: "31/12/2024".to_owned(),
                        }
            })
            .return_once(move |_, _| Ok(records));

        day_offs.expect_upsert_day_off().never();
        day_offs.expect_delete_day_off().never();
        day_offs.expect_is_off_day().never();

        let mut res = TestClient::post("http://example.com/api/dayoff/search")
            .json(&json!({
                "dayoffFrom": "01/12/2024",
                "dayoffTo": "31/12/2024",
                "organid": "A"
            }))
            .send(&make_service(day_offs))
            .await;

        let body: Vec<DayOffResponse> = res.take_json().await?;
        let days: Vec<&str> = body.iter().map(|day_off| day_off.dayoff.as_str()).collect();

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(days, ["2024-12-24", "2024-12-25"]);

        Ok(())
    }

    #[tokio::test]
    async fn test_search_without_matches_returns_empty_array() -> TestResult {
        let mut day_offs = MockDayOffsService::new();

        day_offs
            .expect_search_day_offs()
            .once()
            .return_once(|_, _| Ok(Vec::new()));

        let mut res = TestClient::post("http://example.com/api/dayoff/search")
            .json(&json!({
                "dayoffFrom": "01/12/2024",
                "dayoffTo": "31/12/2024",
                "organid": "A"
            }))
            .send(&make_service(day_offs))
            .await;

        let body: Vec<DayOffResponse> = res.take_json().await?;

        assert!(body.is_empty(), "expected no day offs, got {body:?}");

        Ok(())
    }

    #[tokio::test]
    async fn test_search_reversed_range_returns_400() -> TestResult {
        let mut day_offs = MockDayOffsService::new();

        day_offs.expect_search_day_offs().once().return_once(|_, _| {
            Err(DayOffsServiceError::InvalidRange {
                from: date(2024, 12, 31),
                to: date(2024, 12, 1),
            })
        });

        let res = TestClient::post("http://example.com/api/dayoff/search")
            .json(&json!({
                "dayoffFrom": "31/12/2024",
                "dayoffTo": "01/12/2024",
                "organid": "A"
            }))
            .send(&make_service(day_offs))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
