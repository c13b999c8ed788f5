use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::validation::{Issues, ValidationError};

/// Validated body of `POST /api/v1/form-entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormEntrySubmission {
    pub company_id: Uuid,
    pub form_id: Uuid,
    pub task_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: Uuid,
    pub text: String,
    pub image_url: Option<String>,
}

/// Check a raw JSON body against the submission schema.
///
/// Every issue is collected before returning, so a caller sees all offending
/// fields at once. Unknown keys are ignored.
pub fn validate(raw: &Value) -> Result<FormEntrySubmission, ValidationError> {
    let mut issues = Issues::default();

    let Some(obj) = issues.object("", raw) else {
        return Err(issues.into_error());
    };

    let company_id = issues.uuid(obj, "", "companyId");
    let form_id = issues.uuid(obj, "", "formId");
    let task_id = issues.optional_uuid(obj, "", "taskId");
    let user_id = issues.optional_uuid(obj, "", "userId");

    let answers = issues.array(obj, "", "answers").map(|items| {
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| validate_answer(&mut issues, &format!("answers[{i}]"), item))
            .collect::<Vec<_>>()
    });

    match (company_id, form_id, task_id, user_id, answers) {
        (Some(company_id), Some(form_id), Some(task_id), Some(user_id), Some(answers))
            if issues.is_empty() =>
        {
            Ok(FormEntrySubmission {
                company_id,
                form_id,
                task_id,
                user_id,
                answers,
            })
        }
        _ => Err(issues.into_error()),
    }
}

fn validate_answer(issues: &mut Issues, path: &str, item: &Value) -> Option<Answer> {
    let obj = issues.object(path, item)?;

    let question_id = issues.uuid(obj, path, "questionId");
    let text = issues.string(obj, path, "text");
    let image_url = issues.optional_string(obj, path, "imageUrl");

    Some(Answer {
        question_id: question_id?,
        text: text?,
        image_url: image_url?,
    })
}
