//! Root banner handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{extensions::*, state::State};

/// Service banner
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BannerResponse {
    pub message: String,

    /// Always `OK` while the process is serving
    pub status: String,

    pub version: String,

    /// Where the Swagger UI is served
    pub docs: String,
}

/// Root handler
///
/// Reports that the service is running and where its documentation lives.
#[endpoint(tags("health"), summary = "Service banner")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<BannerResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    Ok(Json(BannerResponse {
        message: "Day Off Calendar API is running".to_owned(),
        status: "OK".to_owned(),
        version: env!("CARGO_PKG_VERSION").to_owned(),
        docs: state.docs_url.clone(),
    }))
}
