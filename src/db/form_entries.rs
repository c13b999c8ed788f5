use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{FormEntry, FormEntryAnswer, NewAnswer, NewFormEntry};

/// Insert an entry and all of its answers in one transaction.
pub async fn create(pool: &PgPool, entry: &NewFormEntry) -> Result<FormEntry, sqlx::Error> {
    let mut tx = pool.begin().await?;

    let mut created = insert_entry(&mut *tx, entry).await?;

    for (index, answer) in entry.answers.iter().enumerate() {
        let row = insert_answer(&mut *tx, created.id, answer_position(index)?, answer).await?;
        created.answers.push(row);
    }

    tx.commit().await?;
    Ok(created)
}

/// Answer index as stored in `form_entry_answers.position`.
pub fn answer_position(index: usize) -> Result<i32, sqlx::Error> {
    i32::try_from(index).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

async fn insert_entry<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    entry: &NewFormEntry,
) -> Result<FormEntry, sqlx::Error> {
    sqlx::query_as::<_, FormEntry>(
        "INSERT INTO form_entries (form_id, company_id, task_id, user_id)
         VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(entry.form_id)
    .bind(entry.company_id)
    .bind(entry.task_id)
    .bind(entry.user_id)
    .fetch_one(executor)
    .await
}

async fn insert_answer<'e, E: sqlx::PgExecutor<'e>>(
    executor: E,
    form_entry_id: Uuid,
    position: i32,
    answer: &NewAnswer,
) -> Result<FormEntryAnswer, sqlx::Error> {
    sqlx::query_as::<_, FormEntryAnswer>(
        "INSERT INTO form_entry_answers (form_entry_id, question_id, position, text, image_url)
         VALUES ($1, $2, $3, $4, $5) RETURNING *",
    )
    .bind(form_entry_id)
    .bind(answer.question_id)
    .bind(position)
    .bind(&answer.text)
    .bind(answer.image_url.as_deref())
    .fetch_one(executor)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<FormEntry>, sqlx::Error> {
    let Some(mut entry) =
        sqlx::query_as::<_, FormEntry>("SELECT * FROM form_entries WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?
    else {
        return Ok(None);
    };

    entry.answers = sqlx::query_as::<_, FormEntryAnswer>(
        "SELECT * FROM form_entry_answers WHERE form_entry_id = $1 ORDER BY position",
    )
    .bind(id)
    .fetch_all(pool)
    .await?;

    Ok(Some(entry))
}
