use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored end-user feedback note. The only entity that outlives a request.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FeedbackNoteRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub feedback: String,
    pub created_at: DateTime<Utc>,
}
