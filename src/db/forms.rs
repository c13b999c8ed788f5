use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Form;

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Form>, sqlx::Error> {
    sqlx::query_as::<_, Form>("SELECT * FROM forms WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
