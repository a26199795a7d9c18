// Task record

use serde::{Deserialize, Serialize};

/// A single to-do item
///
/// Persisted with exactly these three fields; unknown fields are rejected on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Task {
    /// Store-assigned identifier, always positive
    pub id: u64,
    pub text: String,
    pub done: bool,
}

impl Task {
    /// Create a pending task
    pub fn new(id: u64, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            done: false,
        }
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{}] #{} {}", mark, self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_is_pending() {
        let task = Task::new(7, "water plants");
        assert_eq!(task.id, 7);
        assert_eq!(task.text, "water plants");
        assert!(!task.done);
    }

    #[test]
    fn test_task_display() {
        let mut task = Task::new(3, "buy milk");
        assert_eq!(task.to_string(), "[ ] #3 buy milk");

        task.done = true;
        assert_eq!(task.to_string(), "[x] #3 buy milk");
    }

    #[test]
    fn test_task_serialization_shape() {
        let task = Task::new(1, "a");
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value, serde_json::json!({"id": 1, "text": "a", "done": false}));
    }

    #[test]
    fn test_task_rejects_unknown_field() {
        let json = r#"{"id":1,"text":"a","done":false,"priority":3}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_task_rejects_missing_field() {
        let json = r#"{"id":1,"text":"a"}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }

    #[test]
    fn test_task_rejects_wrong_type() {
        let json = r#"{"id":"1","text":"a","done":false}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());

        let json = r#"{"id":-1,"text":"a","done":false}"#;
        assert!(serde_json::from_str::<Task>(json).is_err());
    }
}
