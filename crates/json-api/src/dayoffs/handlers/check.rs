//! Check Day Off Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dayoff_app::domain::dayoffs::records::OrganizationId;

use crate::{dayoffs::errors::into_status_error, extensions::*, state::State};

/// Check Day Off Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckDayOffRequest {
    /// Day in `DD/MM/YYYY` form
    pub dayoff: String,

    pub organid: String,
}

/// Check Day Off Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CheckDayOffResponse {
    /// Whether the day is an active day off
    pub is_off_day: bool,
}

/// Check Day Off Handler
#[endpoint(
    tags("dayoff"),
    summary = "Check Day Off",
    responses(
        (status_code = StatusCode::OK, description = "Whether the day is off"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CheckDayOffRequest>,
    depot: &mut Depot,
) -> Result<Json<CheckDayOffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    let is_off_day = state
        .day_offs()?
        .is_off_day(OrganizationId::from(request.organid), request.dayoff)
        .await
        .map_err(into_status_error)?;

    Ok(Json(CheckDayOffResponse { is_off_day }))
}
