// JSON task file operations

use crate::task::Task;
use eyre::{Context, Result, eyre};
use std::collections::HashSet;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Result of reading the persisted task file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// File parsed into valid tasks, in file order
    Loaded(Vec<Task>),
    /// File missing, unreadable or corrupt
    Empty,
}

/// Read all tasks from the file at `path`
///
/// Never fails: a missing file and a corrupt file both come back as
/// [`LoadOutcome::Empty`]. Corruption is logged and the content is discarded
/// as a whole; no attempt is made to salvage individual records.
pub fn load_persisted(path: &Path) -> LoadOutcome {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(file = ?path, "Task file does not exist yet");
            return LoadOutcome::Empty;
        }
        Err(e) => {
            warn!(file = ?path, error = ?e, "Failed to read task file, starting empty");
            return LoadOutcome::Empty;
        }
    };

    match parse_tasks(&content) {
        Ok(tasks) => {
            info!(file = ?path, count = tasks.len(), "Loaded tasks");
            LoadOutcome::Loaded(tasks)
        }
        Err(e) => {
            warn!(file = ?path, error = %format!("{:#}", e), "Task file is corrupt, starting empty");
            LoadOutcome::Empty
        }
    }
}

fn parse_tasks(content: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(content).context("Failed to parse task file")?;

    let mut seen = HashSet::new();
    for task in &tasks {
        if task.id == 0 {
            return Err(eyre!("Task id must be positive"));
        }
        if !seen.insert(task.id) {
            return Err(eyre!("Duplicate task id: {}", task.id));
        }
    }

    Ok(tasks)
}

/// Overwrite the file at `path` with the full task collection
///
/// Content goes to a uniquely named temporary file in the same directory,
/// which is then renamed over the target, so a failed write leaves the
/// previous file intact.
pub fn write_tasks(path: &Path, tasks: &[Task]) -> Result<()> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directory {}", parent.display()))?;
            parent
        }
        None => Path::new("."),
    };

    let json = serde_json::to_string_pretty(tasks).context("Failed to serialize tasks")?;

    let mut file = NamedTempFile::new_in(dir)
        .wrap_err_with(|| format!("Failed to create temporary file in {}", dir.display()))?;
    writeln!(file, "{}", json).context("Failed to write tasks")?;
    file.as_file().sync_all().context("Failed to sync tasks")?;
    file.persist(path)
        .map_err(|e| e.error)
        .wrap_err_with(|| format!("Failed to replace task file {}", path.display()))?;

    debug!(file = ?path, count = tasks.len(), "Saved tasks");
    Ok(())
}
