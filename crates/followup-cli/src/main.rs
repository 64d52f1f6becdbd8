//! Followup CLI Application
//!
//! Command-line interface for previewing, editing and executing follow-up
//! touchpoint schedules.

mod args;
mod cli;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::tz::TimeZone;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        plans_dir,
        no_color,
        tz,
        command,
    } = Args::parse();

    let tz = match tz {
        Some(name) if name.eq_ignore_ascii_case("UTC") => TimeZone::UTC,
        Some(name) => TimeZone::get(&name).with_context(|| format!("Unknown time zone '{name}'"))?,
        None => TimeZone::system(),
    };
    let cli = Cli::new(TerminalRenderer::new(!no_color), tz, plans_dir);

    info!("Followup started");

    match command {
        Commands::Preview(args) => cli.preview(&args),
        Commands::Session(args) => cli.session(args).await,
        Commands::Plans => cli.plans().await,
    }
}
