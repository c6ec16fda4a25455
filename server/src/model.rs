//! Domain types for the todo API.
//!
//! `Todo` is what the repository stores and what every response carries.
//! `NewTodo` and `TodoPatch` are the request payloads for create and update;
//! neither carries an id, since ids are assigned by the repository.

use serde::{Deserialize, Serialize};

/// Repository-assigned identifier of a todo.
pub type TodoId = u64;

/// A single stored todo item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

impl NewTodo {
    pub fn new(title: impl Into<String>, completed: bool) -> Self {
        Self {
            title: title.into(),
            completed,
        }
    }

    pub(crate) fn into_todo(self, id: TodoId) -> Todo {
        Todo {
            id,
            title: self.title,
            completed: self.completed,
        }
    }
}

/// Request payload for updating a todo. Present fields replace the stored
/// values; omitted fields are left as they are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// True when the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }

    pub fn apply(self, todo: &mut Todo) {
        if let Some(title) = self.title {
            todo.title = title;
        }
        if let Some(completed) = self.completed {
            todo.completed = completed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_numeric_id() {
        let todo = Todo {
            id: 7,
            title: "Remove unused imports".to_string(),
            completed: true,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Remove unused imports");
        assert_eq!(json["completed"], true);
    }

    #[test]
    fn new_todo_defaults_completed_to_false() {
        let input: NewTodo = serde_json::from_str(r#"{"title":"No completed field"}"#).unwrap();
        assert_eq!(input.title, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn new_todo_ignores_client_supplied_id() {
        let input: NewTodo =
            serde_json::from_str(r#"{"id":99,"title":"Mine","completed":true}"#).unwrap();
        assert_eq!(input, NewTodo::new("Mine", true));
    }

    #[test]
    fn new_todo_rejects_missing_title() {
        let result: Result<NewTodo, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn empty_patch_is_empty() {
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_applies_only_present_fields() {
        let mut todo = NewTodo::new("Walk dog", false).into_todo(1);

        let patch: TodoPatch = serde_json::from_str(r#"{"completed":true}"#).unwrap();
        assert!(!patch.is_empty());
        patch.apply(&mut todo);
        assert_eq!(todo.title, "Walk dog");
        assert!(todo.completed);

        TodoPatch {
            title: Some("Walk cat".to_string()),
            completed: None,
        }
        .apply(&mut todo);
        assert_eq!(todo.title, "Walk cat");
        assert!(todo.completed);
        assert_eq!(todo.id, 1);
    }

    #[test]
    fn patch_rejects_wrong_field_types() {
        let result: Result<TodoPatch, _> = serde_json::from_str(r#"{"completed":"yes"}"#);
        assert!(result.is_err());
    }
}
