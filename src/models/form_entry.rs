use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted submission. `answers` is loaded from `form_entry_answers`.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntry {
    pub id: Uuid,
    pub form_id: Uuid,
    pub company_id: Uuid,
    pub task_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    #[sqlx(skip)]
    pub answers: Vec<FormEntryAnswer>,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntryAnswer {
    pub id: Uuid,
    #[serde(skip)]
    pub form_entry_id: Uuid,
    pub question_id: Uuid,
    #[serde(skip)]
    pub position: i32,
    pub text: String,
    pub image_url: Option<String>,
}

/// Everything needed to insert an entry and its answers.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFormEntry {
    pub form_id: Uuid,
    pub company_id: Uuid,
    pub task_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub answers: Vec<NewAnswer>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewAnswer {
    pub question_id: Uuid,
    pub text: String,
    pub image_url: Option<String>,
}
