//! State

use std::sync::Arc;

use salvo::prelude::StatusError;

use dayoff_app::{
    context::{AppContext, DatabaseProbe},
    domain::dayoffs::DayOffsService,
};

#[derive(Clone)]
pub(crate) struct State {
    /// Absent when the database was unreachable at startup.
    pub(crate) app: Option<AppContext>,

    /// Reachability probe for `/health`, kept even when `app` is absent.
    pub(crate) database: Option<Arc<dyn DatabaseProbe>>,

    /// Public address of the Swagger UI, advertised by the root banner.
    pub(crate) docs_url: String,
}

impl State {
    /// State for a server with its database connected and migrated.
    #[must_use]
    pub(crate) fn ready(app: AppContext, docs_url: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            database: Some(Arc::clone(&app.database)),
            app: Some(app),
            docs_url: docs_url.into(),
        })
    }

    /// State for a server that started without its database.
    #[must_use]
    pub(crate) fn degraded(
        database: Option<Arc<dyn DatabaseProbe>>,
        docs_url: impl Into<String>,
    ) -> Arc<Self> {
        Arc::new(Self {
            app: None,
            database,
            docs_url: docs_url.into(),
        })
    }

    /// The day-offs service, or 503 while running without a database.
    pub(crate) fn day_offs(&self) -> Result<&dyn DayOffsService, StatusError> {
        self.app
            .as_ref()
            .map(|app| app.day_offs.as_ref())
            .ok_or_else(|| StatusError::service_unavailable().brief("Database is unavailable"))
    }
}
