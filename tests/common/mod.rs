#![allow(dead_code)]


use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use formentry::config::Config;
use formentry::models::{Company, Form, FormEntry, FormEntryAnswer, NewFormEntry, User};
use formentry::repositories::{CompanyRepository, FormRepository, UserRepository};

/// In-memory stand-in for all three repositories.
#[derive(Default)]
pub struct MemoryStore {
    pub companies: Mutex<Vec<Company>>,
    pub forms: Mutex<Vec<Form>>,
    pub users: Mutex<Vec<User>>,
    pub entries: Mutex<Vec<FormEntry>>,
    /// Every `create_entry` call, in order.
    pub create_calls: Mutex<Vec<NewFormEntry>>,
}

impl MemoryStore {
    pub fn add_company(&self, name: &str) -> Company {
        let company = Company {
            id: Uuid::now_v7(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.companies.lock().unwrap().push(company.clone());
        company
    }

    pub fn add_form(&self, company_id: Uuid, name: &str) -> Form {
        let form = Form {
            id: Uuid::now_v7(),
            company_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.forms.lock().unwrap().push(form.clone());
        form
    }

    pub fn add_user(&self, company_id: Uuid, name: &str) -> User {
        let user = User {
            id: Uuid::now_v7(),
            company_id,
            name: name.to_string(),
            email: format!("{}@test.com", name.to_lowercase()),
            created_at: Utc::now(),
        };
        self.users.lock().unwrap().push(user.clone());
        user
    }

    pub fn create_call_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompanyRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, sqlx::Error> {
        Ok(self.companies.lock().unwrap().iter().find(|c| c.id == id).cloned())
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }
}

#[async_trait]
impl FormRepository for MemoryStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Form>, sqlx::Error> {
        Ok(self.forms.lock().unwrap().iter().find(|f| f.id == id).cloned())
    }

    async fn create_entry(&self, entry: NewFormEntry) -> Result<FormEntry, sqlx::Error> {
        self.create_calls.lock().unwrap().push(entry.clone());

        let id = Uuid::now_v7();
        let answers = entry
            .answers
            .into_iter()
            .enumerate()
            .map(|(position, a)| FormEntryAnswer {
                id: Uuid::now_v7(),
                form_entry_id: id,
                question_id: a.question_id,
                position: i32::try_from(position).unwrap(),
                text: a.text,
                image_url: a.image_url,
            })
            .collect();

        let created = FormEntry {
            id,
            form_id: entry.form_id,
            company_id: entry.company_id,
            task_id: entry.task_id,
            user_id: entry.user_id,
            created_at: Utc::now(),
            answers,
        };
        self.entries.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_entry(&self, id: Uuid) -> Result<Option<FormEntry>, sqlx::Error> {
        Ok(self.entries.lock().unwrap().iter().find(|e| e.id == id).cloned())
    }
}

/// A running server backed by a seeded `MemoryStore`.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store: Arc<MemoryStore>,
    pub company: Company,
    pub form: Form,
    pub user: User,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// A minimal valid body for the seeded company and form.
    pub fn valid_body(&self) -> Value {
        json!({
            "companyId": self.company.id,
            "formId": self.form.id,
            "answers": [
                { "questionId": Uuid::now_v7(), "text": "Yes" }
            ]
        })
    }

    /// POST a JSON body to the form-entry endpoint.
    pub async fn submit(&self, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/v1/form-entries"))
            .json(body)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a raw body with the given content type, or none at all.
    pub async fn submit_raw(&self, content_type: Option<&str>, body: &str) -> (Value, StatusCode) {
        let mut req = self
            .client
            .post(self.url("/api/v1/form-entries"))
            .body(body.to_string());
        if let Some(ct) = content_type {
            req = req.header("content-type", ct);
        }
        let resp = req
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

pub fn test_config() -> Config {
    Config {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        max_body_size: 1_048_576,
        log_level: "warn".to_string(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with(test_config()).await
}

/// Spawn a server on a random port with a store seeded with one company,
/// one form and one user.
pub async fn spawn_app_with(config: Config) -> TestApp {
    let store = Arc::new(MemoryStore::default());
    let company = store.add_company("Acme");
    let form = store.add_form(company.id, "Inspection");
    let user = store.add_user(company.id, "Alice");

    let app = formentry::build_router(&config, store.clone(), store.clone(), store.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        store,
        company,
        form,
        user,
    }
}
