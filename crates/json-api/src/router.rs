//! App Router

use std::sync::Arc;

use salvo::{
    affix_state::inject,
    cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors},
    oapi::{OpenApi, swagger_ui::SwaggerUi},
    prelude::*,
    trailing_slash::remove_slash,
};
use tracing::warn;

use crate::{
    dayoffs, healthcheck,
    observability::{metrics_handler, request_logging},
    root,
    state::State,
};

const OPENAPI_PATH: &str = "/api-doc/openapi.json";

fn day_offs_router() -> Router {
    Router::with_path("api/dayoff")
        .push(Router::with_path("create").post(dayoffs::create::handler))
        .push(Router::with_path("delete").delete(dayoffs::delete::handler))
        .push(Router::with_path("search").post(dayoffs::search::handler))
        .push(Router::with_path("check").post(dayoffs::check::handler))
}

/// Build the full router. Day-off routes are mounted only when a database is available.
pub(crate) fn app_router(state: Arc<State>) -> Router {
    let with_day_offs = state.app.is_some();

    let mut router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(request_logging)
        .hoop(inject(state))
        .get(root::handler)
        .push(Router::with_path("health").get(healthcheck::handler));

    if with_day_offs {
        router = router.push(day_offs_router());
    } else {
        warn!("running without database, day off routes are not mounted");
    }

    let doc = OpenApi::new("Day Off Calendar API", env!("CARGO_PKG_VERSION")).merge_router(&router);

    router
        .push(Router::with_path("metrics").get(metrics_handler))
        .push(doc.into_router(OPENAPI_PATH))
        .push(SwaggerUi::new(OPENAPI_PATH).into_router("docs"))
}

/// Wrap the router in a service that answers credentialed cross-origin requests from anywhere.
pub(crate) fn app_service(state: Arc<State>) -> Service {
    let cors = Cors::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .into_handler();

    Service::new(app_router(state)).hoop(cors)
}
