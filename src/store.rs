// Task store backed by a single JSON file

use crate::json::{self, LoadOutcome};
use crate::task::Task;
use eyre::{Context, Result, eyre};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// In-memory task collection synchronized with a JSON file
///
/// The file is read once in [`TaskStore::open`] and rewritten in full after
/// every successful mutation. There is no cross-process coordination: two
/// processes sharing a file will overwrite each other, last writer wins.
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Open a store backed by the file at `path`
    ///
    /// A missing or corrupt file yields an empty store. Nothing is written
    /// until the first mutation.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();

        let tasks = match json::load_persisted(&path) {
            LoadOutcome::Loaded(tasks) => tasks,
            LoadOutcome::Empty => Vec::new(),
        };

        debug!(file = ?path, count = tasks.len(), "Opened task store");
        Self { path, tasks }
    }

    /// Get the backing file path of this store
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ========================================================================
    // Task API
    // ========================================================================

    /// Add a new pending task and return it
    pub fn add(&mut self, text: impl Into<String>) -> Result<Task> {
        let task = Task::new(self.next_id()?, text);
        self.tasks.push(task.clone());
        self.save()?;

        info!(id = task.id, "Added task");
        Ok(task)
    }

    /// List tasks in insertion order, or only pending ones when `show_all` is false
    pub fn list(&self, show_all: bool) -> Vec<Task> {
        if show_all {
            return self.tasks.clone();
        }
        self.tasks.iter().filter(|t| !t.done).cloned().collect()
    }

    /// Get a task by ID
    pub fn get(&self, id: u64) -> Option<Task> {
        self.find(id).cloned()
    }

    /// Mark a task as done
    ///
    /// Returns `Ok(false)` without touching the file if no task has this ID.
    pub fn done(&mut self, id: u64) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!(id, "done: task not found");
            return Ok(false);
        };
        task.done = true;
        self.save()?;

        info!(id, "Completed task");
        Ok(true)
    }

    /// Delete a task
    ///
    /// Returns `Ok(false)` without touching the file if no task has this ID.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            debug!(id, "delete: task not found");
            return Ok(false);
        };
        self.tasks.remove(index);
        self.save()?;

        info!(id, "Deleted task");
        Ok(true)
    }

    // ========================================================================
    // Helper methods
    // ========================================================================

    fn find(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    // max + 1, so the id of a deleted highest task is handed out again
    fn next_id(&self) -> Result<u64> {
        let max = self.tasks.iter().map(|t| t.id).max().unwrap_or(0);
        max.checked_add(1).ok_or_else(|| eyre!("No task id left after {}", max))
    }

    fn save(&self) -> Result<()> {
        json::write_tasks(&self.path, &self.tasks)
            .wrap_err_with(|| format!("Failed to save tasks to {}", self.path.display()))
    }
}
