// todo - personal task tracker persisted to a local JSON file

pub mod config;
pub mod json;
pub mod store;
pub mod task;

// Re-export main types for convenience
pub use config::Config;
pub use json::LoadOutcome;
pub use store::TaskStore;
pub use task::Task;
