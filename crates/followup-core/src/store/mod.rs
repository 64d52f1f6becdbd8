//! File-backed plan store.
//!
//! [`FilePlanStore`] is the bundled [`PlanExecutor`]: every executed plan is
//! written as pretty-printed JSON to `<directory>/<plan_id>.json`. Executing
//! again with a known plan id replaces that file, so a lead has one current
//! plan per id.
//!
//! File I/O runs on tokio's blocking pool, keeping the executor usable from
//! async callers.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        LazyLock,
        atomic::{AtomicU64, Ordering},
    },
};

use jiff::Timestamp;
use log::{debug, info, warn};
use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio::task;

use crate::{
    editor::{EXECUTED_SENTINEL, PlanExecutor},
    error::{Result, ScheduleError},
    models::{ExecuteResponse, TodoItem},
};

#[cfg(test)]
mod tests;

static PLAN_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,64}$").expect("plan id pattern is valid"));

/// A plan as persisted by [`FilePlanStore`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlan {
    pub plan_id: String,
    pub start_date: Timestamp,
    pub stored_at: Timestamp,
    pub tasks: Vec<TodoItem>,
}

/// Plan executor writing one JSON file per plan.
#[derive(Debug)]
pub struct FilePlanStore {
    directory: PathBuf,
    sequence: AtomicU64,
}

/// Builder for creating and configuring [`FilePlanStore`] instances.
#[derive(Debug, Clone, Default)]
pub struct FilePlanStoreBuilder {
    directory: Option<PathBuf>,
}

impl FilePlanStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom plan directory.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/followup/plans` or `~/.local/share/followup/plans`
    pub fn with_directory<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.directory = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store, creating its directory if needed.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::XdgDirectory` if no default directory can be
    /// determined
    /// Returns `ScheduleError::FileSystem` if the directory cannot be created
    pub fn build(self) -> Result<FilePlanStore> {
        let directory = match self.directory {
            Some(directory) => {
                fs::create_dir_all(&directory).map_err(|e| ScheduleError::FileSystem {
                    path: directory.clone(),
                    source: e,
                })?;
                directory
            }
            None => Self::default_directory()?,
        };
        debug!("Plan store at {}", directory.display());
        Ok(FilePlanStore {
            directory,
            sequence: AtomicU64::new(0),
        })
    }

    /// Returns the default plan directory following XDG Base Directory
    /// specification.
    fn default_directory() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("followup")
            .create_data_directory("plans")
            .map_err(|e| ScheduleError::XdgDirectory(e.to_string()))
    }
}

impl FilePlanStore {
    /// Creates a builder for a plan store.
    pub fn builder() -> FilePlanStoreBuilder {
        FilePlanStoreBuilder::new()
    }

    /// Directory holding the plan files.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Loads a stored plan by id.
    pub async fn load_plan(&self, plan_id: &str) -> Result<Option<StoredPlan>> {
        let path = self.plan_path(plan_id)?;
        task::spawn_blocking(move || read_plan(&path))
            .await
            .map_err(|e| ScheduleError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }

    /// Lists all stored plans, oldest first.
    ///
    /// Files that cannot be read as a plan are logged and skipped.
    pub async fn list_plans(&self) -> Result<Vec<StoredPlan>> {
        let directory = self.directory.clone();
        task::spawn_blocking(move || {
            let entries = fs::read_dir(&directory).map_err(|e| ScheduleError::FileSystem {
                path: directory.clone(),
                source: e,
            })?;
            let mut plans = Vec::new();
            for entry in entries {
                let path = entry
                    .map_err(|e| ScheduleError::FileSystem {
                        path: directory.clone(),
                        source: e,
                    })?
                    .path();
                if path.extension().is_none_or(|ext| ext != "json") {
                    continue;
                }
                match read_plan(&path) {
                    Ok(Some(plan)) => plans.push(plan),
                    Ok(None) => {}
                    Err(err) => warn!("Skipping unreadable plan {}: {err}", path.display()),
                }
            }
            plans.sort_by(|a, b| {
                a.stored_at
                    .cmp(&b.stored_at)
                    .then_with(|| a.plan_id.cmp(&b.plan_id))
            });
            Ok(plans)
        })
        .await
        .map_err(|e| ScheduleError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    fn plan_path(&self, plan_id: &str) -> Result<PathBuf> {
        if !PLAN_ID_PATTERN.is_match(plan_id) {
            return Err(ScheduleError::invalid_input("plan_id")
                .with_reason("use 1-64 letters, digits, '-' or '_'"));
        }
        Ok(self.directory.join(format!("{plan_id}.json")))
    }

    /// Mints a plan id that is not yet taken in the directory.
    fn mint_plan_id(&self) -> String {
        let now = Timestamp::now().as_millisecond();
        loop {
            let n = self.sequence.fetch_add(1, Ordering::Relaxed);
            let candidate = format!("plan-{now}-{n}");
            if !self.directory.join(format!("{candidate}.json")).exists() {
                return candidate;
            }
        }
    }
}

impl PlanExecutor for FilePlanStore {
    async fn execute(
        &self,
        todo: &[TodoItem],
        start_date: Timestamp,
        executed_plan_id: Option<&str>,
    ) -> Result<ExecuteResponse> {
        let plan_id = match executed_plan_id {
            Some(id) if id != EXECUTED_SENTINEL => id.to_string(),
            _ => self.mint_plan_id(),
        };
        let path = self.plan_path(&plan_id)?;
        let plan = StoredPlan {
            plan_id: plan_id.clone(),
            start_date,
            stored_at: Timestamp::now(),
            tasks: todo.to_vec(),
        };

        task::spawn_blocking(move || write_plan(&path, &plan))
            .await
            .map_err(|e| ScheduleError::Configuration {
                message: format!("Task join error: {e}"),
            })??;

        info!("Stored plan {plan_id} with {} tasks", todo.len());
        Ok(ExecuteResponse::with_plan_id(plan_id))
    }
}

fn write_plan(path: &Path, plan: &StoredPlan) -> Result<()> {
    let json = serde_json::to_string_pretty(plan)?;
    fs::write(path, json).map_err(|e| ScheduleError::FileSystem {
        path: path.to_path_buf(),
        source: e,
    })
}

fn read_plan(path: &Path) -> Result<Option<StoredPlan>> {
    match fs::read_to_string(path) {
        Ok(json) => Ok(Some(serde_json::from_str(&json)?)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ScheduleError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
