use clap::{Args, Subcommand};

mod check;
mod search;

#[derive(Debug, Args)]
pub(crate) struct DayOffCommand {
    #[command(subcommand)]
    command: DayOffSubcommand,
}

#[derive(Debug, Subcommand)]
enum DayOffSubcommand {
    /// Report whether a day is an off day
    Check(check::CheckArgs),
    /// List active off days in a range
    Search(search::SearchArgs),
}

pub(crate) async fn run(command: DayOffCommand) -> Result<(), String> {
    match command.command {
        DayOffSubcommand::Check(args) => check::run(args).await,
        DayOffSubcommand::Search(args) => search::run(args).await,
    }
}
