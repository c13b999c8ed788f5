use std::sync::Arc;

use uuid::Uuid;

use crate::models::{FormEntry, NewAnswer, NewFormEntry};
use crate::repositories::{CompanyRepository, FormRepository, UserRepository};
use crate::submission::{Answer, FormEntrySubmission};

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFormEntryInput {
    pub user_id: Option<Uuid>,
    pub answers: Vec<Answer>,
    pub company_id: Uuid,
    pub form_id: Uuid,
    pub task_id: Option<Uuid>,
}

impl From<FormEntrySubmission> for CreateFormEntryInput {
    fn from(s: FormEntrySubmission) -> Self {
        CreateFormEntryInput {
            user_id: s.user_id,
            answers: s.answers,
            company_id: s.company_id,
            form_id: s.form_id,
            task_id: s.task_id,
        }
    }
}

#[derive(Debug)]
pub enum CreateFormEntryError {
    CompanyNotFound(Uuid),
    FormNotFound(Uuid),
    FormNotInCompany { form_id: Uuid, company_id: Uuid },
    UserNotFound(Uuid),
    UserNotInCompany { user_id: Uuid, company_id: Uuid },
    Repository(sqlx::Error),
}

impl std::fmt::Display for CreateFormEntryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreateFormEntryError::CompanyNotFound(id) => write!(f, "Company {id} not found"),
            CreateFormEntryError::FormNotFound(id) => write!(f, "Form {id} not found"),
            CreateFormEntryError::FormNotInCompany {
                form_id,
                company_id,
            } => write!(f, "Form {form_id} does not belong to company {company_id}"),
            CreateFormEntryError::UserNotFound(id) => write!(f, "User {id} not found"),
            CreateFormEntryError::UserNotInCompany {
                user_id,
                company_id,
            } => write!(f, "User {user_id} does not belong to company {company_id}"),
            CreateFormEntryError::Repository(err) => write!(f, "Repository error: {err}"),
        }
    }
}

impl std::error::Error for CreateFormEntryError {}

impl From<sqlx::Error> for CreateFormEntryError {
    fn from(err: sqlx::Error) -> Self {
        CreateFormEntryError::Repository(err)
    }
}

/// Records a submitted set of answers against a company's form.
pub struct CreateFormEntryUseCase {
    forms: Arc<dyn FormRepository>,
    companies: Arc<dyn CompanyRepository>,
    users: Arc<dyn UserRepository>,
}

impl CreateFormEntryUseCase {
    pub fn new(
        forms: Arc<dyn FormRepository>,
        companies: Arc<dyn CompanyRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            forms,
            companies,
            users,
        }
    }

    pub async fn execute(
        &self,
        input: CreateFormEntryInput,
    ) -> Result<FormEntry, CreateFormEntryError> {
        let company = self
            .companies
            .find_by_id(input.company_id)
            .await?
            .ok_or(CreateFormEntryError::CompanyNotFound(input.company_id))?;

        let form = self
            .forms
            .find_by_id(input.form_id)
            .await?
            .ok_or(CreateFormEntryError::FormNotFound(input.form_id))?;

        if form.company_id != company.id {
            return Err(CreateFormEntryError::FormNotInCompany {
                form_id: form.id,
                company_id: company.id,
            });
        }

        if let Some(user_id) = input.user_id {
            let user = self
                .users
                .find_by_id(user_id)
                .await?
                .ok_or(CreateFormEntryError::UserNotFound(user_id))?;

            if user.company_id != company.id {
                return Err(CreateFormEntryError::UserNotInCompany {
                    user_id,
                    company_id: company.id,
                });
            }
        }

        let entry = NewFormEntry {
            form_id: form.id,
            company_id: company.id,
            task_id: input.task_id,
            user_id: input.user_id,
            answers: input
                .answers
                .into_iter()
                .map(|a| NewAnswer {
                    question_id: a.question_id,
                    text: a.text,
                    image_url: a.image_url,
                })
                .collect(),
        };

        let created = self.forms.create_entry(entry).await?;
        tracing::info!(
            "Created form entry {} for form {} ({} answers)",
            created.id,
            created.form_id,
            created.answers.len()
        );

        Ok(created)
    }
}
