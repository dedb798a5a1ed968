//! Create Day Off Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use dayoff_app::domain::dayoffs::{data::DayOffUpsert, records::OrganizationId};

use crate::{
    dayoffs::{errors::into_status_error, models::DayOffResponse},
    extensions::*,
    state::State,
};

/// Create Or Edit Day Off Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateDayOffRequest {
    /// Day in `DD/MM/YYYY` form
    pub dayoff: String,

    /// `false` revokes an existing day off
    pub is_off_day: bool,

    pub description: Option<String>,

    /// Who is creating or editing the record
    pub creator: String,

    /// Owning organization, the empty organization when omitted
    pub organid: Option<String>,
}

impl From<CreateDayOffRequest> for DayOffUpsert {
    fn from(request: CreateDayOffRequest) -> Self {
        DayOffUpsert {
            organization: request.organid.map(OrganizationId::from).unwrap_or_default(),
            day: request.dayoff,
            is_off_day: request.is_off_day,
            description: request.description,
            creator: request.creator,
        }
    }
}

/// Create Day Off Handler
///
/// Creates a day off, edits the active one, or revokes it when `isOffDay` is false.
#[endpoint(
    tags("dayoff"),
    summary = "Create Or Edit Day Off",
    responses(
        (status_code = StatusCode::OK, description = "Day off saved"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::CONFLICT, description = "Day off already exists"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateDayOffRequest>,
    depot: &mut Depot,
) -> Result<Json<DayOffResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let record = state
        .day_offs()?
        .upsert_day_off(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(record.into()))
}
