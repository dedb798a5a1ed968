use clap::{Args, Parser, Subcommand};
use dayoff_app::{
    database::{self, Db},
    domain::dayoffs::PgDayOffsService,
};

mod dayoff;
mod db;

#[derive(Debug, Parser)]
#[command(name = "dayoff-app", about = "Day-off calendar CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    Dayoff(dayoff::DayOffCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::Dayoff(command) => dayoff::run(command).await,
        }
    }
}

/// Connection settings shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Maximum pooled connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = 2)]
    database_max_connections: u32,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<Db, String> {
        database::connect(&self.database_url, self.database_max_connections)
            .await
            .map(Db::new)
            .map_err(|error| format!("failed to connect to database: {error}"))
    }

    pub(crate) async fn day_offs(&self) -> Result<PgDayOffsService, String> {
        self.connect().await.map(PgDayOffsService::new)
    }
}
