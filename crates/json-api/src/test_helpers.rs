//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use dayoff_app::{
    context::{AppContext, MockDatabaseProbe},
    domain::dayoffs::MockDayOffsService,
};

use crate::state::State;

pub(crate) const TEST_DOCS_URL: &str = "http://localhost:8080/docs";

fn strict_database_mock() -> MockDatabaseProbe {
    let mut database = MockDatabaseProbe::new();

    database.expect_ping().never();

    database
}

fn strict_day_offs_mock() -> MockDayOffsService {
    let mut day_offs = MockDayOffsService::new();

    day_offs.expect_upsert_day_off().never();
    day_offs.expect_delete_day_off().never();
    day_offs.expect_search_day_offs().never();
    day_offs.expect_is_off_day().never();

    day_offs
}

pub(crate) fn state_with_day_offs(day_offs: MockDayOffsService) -> Arc<State> {
    State::ready(
        AppContext::new(Arc::new(day_offs), Arc::new(strict_database_mock())),
        TEST_DOCS_URL,
    )
}

pub(crate) fn state_with_database(database: MockDatabaseProbe) -> Arc<State> {
    State::ready(
        AppContext::new(Arc::new(strict_day_offs_mock()), Arc::new(database)),
        TEST_DOCS_URL,
    )
}

/// State of a server that started without its database but can still probe it.
pub(crate) fn degraded_state_with_database(database: MockDatabaseProbe) -> Arc<State> {
    State::degraded(Some(Arc::new(database)), TEST_DOCS_URL)
}

pub(crate) fn day_offs_service(day_offs: MockDayOffsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_day_offs(day_offs)))
            .push(route),
    )
}

/// A service whose state has no database behind it.
pub(crate) fn degraded_service(route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::degraded(None, TEST_DOCS_URL)))
            .push(route),
    )
}
