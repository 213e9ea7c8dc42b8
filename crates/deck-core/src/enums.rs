//! Status enums for Taskdeck entities.
//!
//! `TaskStatus` serializes as `SCREAMING_SNAKE_CASE` to match the server's
//! wire format. The transition table is enforced client-side before a status
//! update is sent; the server remains the final authority.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Status of a task.
///
/// ```text
/// todo → in_progress → done
///      ←
/// ```
///
/// `in_progress → todo` is allowed (un-starting a task); `done` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Todo => &[Self::InProgress],
            Self::InProgress => &[Self::Todo, Self::Done],
            Self::Done => &[],
        }
    }

    /// Check whether transitioning to `next` is allowed.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// The wire representation sent to and received from the server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = crate::errors::CoreError;

    /// Accepts both the wire form (`IN_PROGRESS`) and the CLI form
    /// (`in_progress`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TODO" => Ok(Self::Todo),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "DONE" => Ok(Self::Done),
            other => Err(crate::errors::CoreError::Validation(format!(
                "unknown task status '{other}' (expected todo, in_progress, or done)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn wire_format_is_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).expect("serialize"),
            r#""IN_PROGRESS""#
        );
        let status: TaskStatus = serde_json::from_str(r#""DONE""#).expect("deserialize");
        assert_eq!(status, TaskStatus::Done);
    }

    #[test]
    fn transition_table() {
        assert!(TaskStatus::Todo.can_transition_to(TaskStatus::InProgress));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Done));
        assert!(TaskStatus::InProgress.can_transition_to(TaskStatus::Todo));
        assert!(!TaskStatus::Todo.can_transition_to(TaskStatus::Done));
        assert!(TaskStatus::Done.allowed_next_states().is_empty());
    }

    #[test]
    fn from_str_accepts_both_cases() {
        assert_eq!(
            "in_progress".parse::<TaskStatus>().expect("lower"),
            TaskStatus::InProgress
        );
        assert_eq!(
            "TODO".parse::<TaskStatus>().expect("upper"),
            TaskStatus::Todo
        );
        assert!("shipped".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(TaskStatus::InProgress.to_string(), "IN_PROGRESS");
    }
}
