use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::{Company, Form, FormEntry, NewFormEntry, User};

use super::{CompanyRepository, FormRepository, UserRepository};

#[derive(Clone)]
pub struct PgCompanyRepository {
    pool: PgPool,
}

impl PgCompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyRepository for PgCompanyRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
        db::companies::find_by_id(&self.pool, id).await
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        db::users::find_by_id(&self.pool, id).await
    }
}

#[derive(Clone)]
pub struct PgFormRepository {
    pool: PgPool,
}

impl PgFormRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FormRepository for PgFormRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Form>, sqlx::Error> {
        db::forms::find_by_id(&self.pool, id).await
    }

    async fn create_entry(&self, entry: NewFormEntry) -> Result<FormEntry, sqlx::Error> {
        db::form_entries::create(&self.pool, &entry).await
    }

    async fn find_entry(&self, id: Uuid) -> Result<Option<FormEntry>, sqlx::Error> {
        db::form_entries::find_by_id(&self.pool, id).await
    }
}
