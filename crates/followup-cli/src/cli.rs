//! Command handlers for the Followup CLI.
//!
//! Each subcommand loads its inputs, drives the core editor and renders
//! markdown through the [`TerminalRenderer`].

use std::{
    fs,
    io::{self, BufRead},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use followup_core::{
    Action, EditorBuilder, EditorState, ExecuteControl, FilePlanStore, Notice, ScheduleView,
    StoredPlans, Touchpoint,
};
use jiff::{Timestamp, tz::TimeZone};
use log::{debug, info};

use crate::{
    args::{PreviewArgs, SessionArgs},
    renderer::TerminalRenderer,
    session::{HELP, SessionCommand},
};

/// Handler shared by all subcommands.
pub struct Cli {
    renderer: TerminalRenderer,
    tz: TimeZone,
    plans_dir: Option<PathBuf>,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, tz: TimeZone, plans_dir: Option<PathBuf>) -> Self {
        Self {
            renderer,
            tz,
            plans_dir,
        }
    }

    fn store(&self) -> Result<FilePlanStore> {
        FilePlanStore::builder()
            .with_directory(self.plans_dir.as_ref())
            .build()
            .context("Failed to open plan store")
    }

    /// Render the schedule derived from a touchpoint file.
    pub fn preview(&self, args: &PreviewArgs) -> Result<()> {
        let touchpoints = load_touchpoints(&args.touchpoints)?;
        let editor = EditorBuilder::new("preview", parse_call_end(&args.call_end)?)
            .with_touchpoints(touchpoints)
            .with_time_zone(self.tz.clone())
            .build()
            .context("Failed to build schedule")?;

        self.renderer.render(&ScheduleView(&editor).to_string());
        Ok(())
    }

    /// List stored plans.
    pub async fn plans(&self) -> Result<()> {
        let plans = self
            .store()?
            .list_plans()
            .await
            .context("Failed to list plans")?;
        self.renderer.render(&StoredPlans(&plans, &self.tz).to_string());
        Ok(())
    }

    /// Run an editing session over stdin.
    ///
    /// Bad lines are reported on stderr and the session continues; the
    /// session ends on `quit` or end of input.
    pub async fn session(&self, args: SessionArgs) -> Result<()> {
        let touchpoints = load_touchpoints(&args.touchpoints)?;
        let mut editor = EditorBuilder::new(args.lead_id, parse_call_end(&args.call_end)?)
            .with_touchpoints(touchpoints)
            .with_summary(args.summary)
            .with_executed_plan_id(args.plan_id)
            .with_time_zone(self.tz.clone())
            .build()
            .context("Failed to build schedule")?;
        let store = self.store()?;
        info!("Session started for lead {}", editor.lead_id());

        self.show(&editor);
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read command")?;
            if line.trim().is_empty() {
                continue;
            }
            let command = match line.parse::<SessionCommand>() {
                Ok(command) => command,
                Err(err) => {
                    eprintln!("Error: {err}");
                    continue;
                }
            };
            debug!("Session command: {command:?}");

            match command {
                SessionCommand::Quit => break,
                SessionCommand::Show => self.show(&editor),
                SessionCommand::Help => self.renderer.render(HELP),
                SessionCommand::Status => self.status(&editor),
                SessionCommand::Execute => self.execute(&mut editor, &store).await,
                SessionCommand::Edit(action) => self.edit(&mut editor, action),
            }
        }
        Ok(())
    }

    fn edit(&self, editor: &mut EditorState, action: Action) {
        let reshapes = matches!(
            action,
            Action::BeginEdit { .. } | Action::SaveDay { .. } | Action::CancelEdit | Action::AddDay
        );
        if let Some(notice) = editor.apply(action) {
            self.notice(&notice);
        }
        if reshapes {
            self.show(editor);
        }
    }

    async fn execute(&self, editor: &mut EditorState, store: &FilePlanStore) {
        if editor.execute_control(false) == ExecuteControl::Active {
            let plan = editor.executed_plan_id().unwrap_or_default();
            self.notice(&Notice::info(format!(
                "Plan {plan} is active; edit the schedule to execute again"
            )));
            return;
        }
        match editor.execute(store).await {
            Ok(outcome) => self.renderer.render(&outcome.to_string()),
            Err(err) => eprintln!("Error: {err}"),
        }
    }

    fn status(&self, editor: &EditorState) {
        let control = editor.execute_control(false);
        let mut status = format!("- **Execute**: {control}\n");
        if let Some(plan) = editor.executed_plan_id() {
            status.push_str(&format!("- **Plan**: {plan}\n"));
        }
        if editor.has_changes_since_execution() {
            status.push_str("- *Changed since last execution*\n");
        }
        self.renderer.render(&status);
    }

    fn show(&self, editor: &EditorState) {
        self.renderer.render(&ScheduleView(editor).to_string());
    }

    fn notice(&self, notice: &Notice) {
        self.renderer.render(&notice.to_string());
    }
}

fn load_touchpoints(path: &Path) -> Result<Vec<Touchpoint>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read touchpoints from {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Invalid touchpoint file {}", path.display()))
}

fn parse_call_end(input: &str) -> Result<Timestamp> {
    input
        .parse()
        .with_context(|| format!("Invalid call end '{input}', expected RFC 3339"))
}
