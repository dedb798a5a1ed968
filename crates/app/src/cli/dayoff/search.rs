use clap::Args;
use dayoff_app::domain::dayoffs::{
    DayOffsService, data::DayOffRange, dates::format_day, records::OrganizationId,
};

use crate::cli::DatabaseArgs;

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    #[command(flatten)]
    database: DatabaseArgs,

    /// Organization identifier
    #[arg(long)]
    organid: String,

    /// First day of the range, DD/MM/YYYY
    #[arg(long)]
    from: String,

    /// Last day of the range, DD/MM/YYYY
    #[arg(long)]
    to: String,
}

pub(crate) async fn run(args: SearchArgs) -> Result<(), String> {
    let service = args.database.day_offs().await?;

    let records = service
        .search_day_offs(
            OrganizationId::new(args.organid),
            DayOffRange {
                from: args.from,
                to: args.to,
            },
        )
        .await
        .map_err(|error| format!("failed to search day offs: {error}"))?;

    if records.is_empty() {
        println!("no day offs found");
        return Ok(());
    }

    for record in records {
        println!(
            "{}\t{}\t{}",
            format_day(record.day),
            record.uuid,
            record.description.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
