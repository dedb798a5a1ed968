use clap::Args;
use dayoff_app::domain::dayoffs::{DayOffsService, records::OrganizationId};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Organization identifier
    #[arg(long)]
    organid: String,

    /// Day to check, DD/MM/YYYY
    #[arg(long)]
    dayoff: String,
}

pub(crate) async fn run(args: CheckArgs) -> Result<(), String> {
    let service = args.database.day_offs().await?;

    let is_off_day = service
        .is_off_day(OrganizationId::new(args.organid), args.dayoff.clone())
        .await
        .map_err(|error| format!("failed to check day off: {error}"))?;

    println!("{}: {}", args.dayoff, if is_off_day { "off day" } else { "working day" });

    Ok(())
}
