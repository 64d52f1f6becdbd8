use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Command-line editor for follow-up touchpoint schedules
///
/// Followup turns the touchpoints suggested after a sales call into a
/// day-by-day schedule of emails, calls and WhatsApp messages. Schedules can
/// be previewed, edited interactively in a session and executed into a
/// stored plan.
#[derive(Parser)]
#[command(version, about, name = "followup")]
pub struct Args {
    /// Directory holding executed plans. Defaults to
    /// $XDG_DATA_HOME/followup/plans
    #[arg(long, global = true)]
    pub plans_dir: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// IANA time zone used for calendar days, e.g. Europe/Berlin. Defaults
    /// to the system time zone
    #[arg(long, global = true)]
    pub tz: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Followup CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render the schedule derived from a touchpoint file
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Edit a schedule with commands read from stdin
    #[command(alias = "s")]
    Session(SessionArgs),
    /// List executed plans
    #[command(aliases = ["l", "ls"])]
    Plans,
}

/// Render a schedule without editing it
#[derive(ClapArgs)]
pub struct PreviewArgs {
    /// JSON file with an array of touchpoints
    pub touchpoints: PathBuf,

    /// End of the call the touchpoints are relative to (RFC 3339)
    #[arg(long, help = "End of the call, e.g. 2024-03-04T15:00:00Z")]
    pub call_end: String,
}

/// Start an editing session
///
/// Each stdin line is one command; see `help` inside the session.
#[derive(ClapArgs)]
pub struct SessionArgs {
    /// JSON file with an array of touchpoints
    pub touchpoints: PathBuf,

    /// End of the call the touchpoints are relative to (RFC 3339)
    #[arg(long, help = "End of the call, e.g. 2024-03-04T15:00:00Z")]
    pub call_end: String,

    /// Lead the tasks are created for
    #[arg(long)]
    pub lead_id: String,

    /// Summary shown above the schedule
    #[arg(long)]
    pub summary: Option<String>,

    /// Id of a previously executed plan to replace
    #[arg(long)]
    pub plan_id: Option<String>,
}
