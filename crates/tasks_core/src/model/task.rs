use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<OffsetDateTime>,
}

impl Task {
    /// Builds a pending task with a fresh v4 id.
    pub fn new(title: &str, created_at: OffsetDateTime) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            created_at,
            completed_at: None,
        }
    }

    /// Marks the task completed. A second call moves `completed_at` forward.
    pub fn mark_completed(&mut self, completed_at: OffsetDateTime) {
        self.completed = true;
        self.completed_at = Some(completed_at);
    }

    pub fn is_pending(&self) -> bool {
        !self.completed
    }
}
