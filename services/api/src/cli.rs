use crate::commands::{
    run_deadline_add, run_deadline_count, run_holiday_list, run_next_business_day,
    run_notice_parse, DeadlineAddArgs, DeadlineCountArgs, HolidayListArgs, NextBusinessDayArgs,
    NoticeParseArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use deadline_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Deadline Desk",
    about = "Compute court deadlines and triage legal notices from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Business-day deadline arithmetic
    Deadline {
        #[command(subcommand)]
        command: DeadlineCommand,
    },
    /// Legal notice parsing and urgency classification
    Notice {
        #[command(subcommand)]
        command: NoticeCommand,
    },
    /// Inspect the holiday calendar
    Holidays {
        #[command(subcommand)]
        command: HolidayCommand,
    },
}

#[derive(Subcommand, Debug)]
enum DeadlineCommand {
    /// Add business days to a start date
    Add(DeadlineAddArgs),
    /// Count business days between two dates
    Count(DeadlineCountArgs),
    /// Find the first business day on or after a date
    Next(NextBusinessDayArgs),
}

#[derive(Subcommand, Debug)]
enum NoticeCommand {
    /// Parse a notice text and print its deadline and urgency
    Parse(NoticeParseArgs),
}

#[derive(Subcommand, Debug)]
enum HolidayCommand {
    /// List the holidays observed during a year
    List(HolidayListArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Deadline { command } => match command {
            DeadlineCommand::Add(args) => run_deadline_add(args),
            DeadlineCommand::Count(args) => run_deadline_count(args),
            DeadlineCommand::Next(args) => run_next_business_day(args),
        },
        Command::Notice {
            command: NoticeCommand::Parse(args),
        } => run_notice_parse(args),
        Command::Holidays {
            command: HolidayCommand::List(args),
        } => run_holiday_list(args),
    }
}
