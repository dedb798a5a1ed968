//! Test context for service-level integration tests.

use crate::{database::Db, domain::dayoffs::PgDayOffsService};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub(crate) db: TestDb,
    pub(crate) day_offs: PgDayOffsService,
}

impl TestContext {
    pub(crate) async fn new() -> Self {
        let db = TestDb::new().await;

        Self {
            day_offs: PgDayOffsService::new(Db::new(db.pool().clone())),
            db,
        }
    }
}
