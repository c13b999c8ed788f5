pub mod postgres;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Company, Form, FormEntry, NewFormEntry, User};

pub use postgres::{PgCompanyRepository, PgFormRepository, PgUserRepository};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, sqlx::Error>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error>;
}

#[async_trait]
pub trait FormRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Form>, sqlx::Error>;

    /// Persist an entry together with its answers; all or nothing.
    async fn create_entry(&self, entry: NewFormEntry) -> Result<FormEntry, sqlx::Error>;

    async fn find_entry(&self, id: Uuid) -> Result<Option<FormEntry>, sqlx::Error>;
}
