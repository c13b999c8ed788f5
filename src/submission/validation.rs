use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    Required,
    InvalidType,
    InvalidUuid,
}

/// One offending field: where it is, what was expected and what arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub code: IssueCode,
    pub expected: &'static str,
    pub received: Value,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

impl ValidationError {
    pub fn has_issue_at(&self, path: &str) -> bool {
        self.issues.iter().any(|i| i.path == path)
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Validation failed")?;
        for (i, issue) in self.issues.iter().enumerate() {
            let sep = if i == 0 { ": " } else { "; " };
            let path = if issue.path.is_empty() { "<root>" } else { &issue.path };
            write!(f, "{sep}{path}: {}", issue.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Accumulates issues while walking a JSON document.
#[derive(Debug, Default)]
pub(crate) struct Issues {
    issues: Vec<ValidationIssue>,
}

impl Issues {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_error(self) -> ValidationError {
        ValidationError {
            issues: self.issues,
        }
    }

    pub fn required(&mut self, path: String, expected: &'static str) {
        self.issues.push(ValidationIssue {
            path,
            code: IssueCode::Required,
            expected,
            received: Value::Null,
            message: "Required".to_string(),
        });
    }

    pub fn invalid_type(&mut self, path: String, expected: &'static str, received: &Value) {
        self.issues.push(ValidationIssue {
            path,
            code: IssueCode::InvalidType,
            expected,
            received: received.clone(),
            message: format!("Expected {expected}, received {}", type_name(received)),
        });
    }

    pub fn invalid_uuid(&mut self, path: String, received: &Value) {
        self.issues.push(ValidationIssue {
            path,
            code: IssueCode::InvalidUuid,
            expected: "uuid",
            received: received.clone(),
            message: "Invalid uuid".to_string(),
        });
    }

    /// Object at the root or nested inside an array.
    pub fn object<'a>(&mut self, path: &str, value: &'a Value) -> Option<&'a Map<String, Value>> {
        match value {
            Value::Object(obj) => Some(obj),
            other => {
                self.invalid_type(path.to_string(), "object", other);
                None
            }
        }
    }

    pub fn string(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<String> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.required(path, "string");
                None
            }
            Some(value) => self.as_string(path, value),
        }
    }

    /// Absent is fine; `null` is not.
    pub fn optional_string(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<Option<String>> {
        match obj.get(key) {
            None => Some(None),
            Some(value) => self.as_string(join(prefix, key), value).map(Some),
        }
    }

    pub fn uuid(&mut self, obj: &Map<String, Value>, prefix: &str, key: &str) -> Option<Uuid> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.required(path, "string");
                None
            }
            Some(value) => self.as_uuid(path, value),
        }
    }

    pub fn optional_uuid(
        &mut self,
        obj: &Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<Option<Uuid>> {
        match obj.get(key) {
            None => Some(None),
            Some(value) => self.as_uuid(join(prefix, key), value).map(Some),
        }
    }

    pub fn array<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        prefix: &str,
        key: &str,
    ) -> Option<&'a Vec<Value>> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.required(path, "array");
                None
            }
            Some(Value::Array(items)) => Some(items),
            Some(other) => {
                self.invalid_type(path, "array", other);
                None
            }
        }
    }

    fn as_string(&mut self, path: String, value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            other => {
                self.invalid_type(path, "string", other);
                None
            }
        }
    }

    fn as_uuid(&mut self, path: String, value: &Value) -> Option<Uuid> {
        let Value::String(s) = value else {
            self.invalid_type(path, "string", value);
            return None;
        };
        match parse_uuid(s) {
            Some(id) => Some(id),
            None => {
                self.invalid_uuid(path, value);
                None
            }
        }
    }
}

/// Only the hyphenated 8-4-4-4-12 form is accepted.
pub fn parse_uuid(s: &str) -> Option<Uuid> {
    if s.len() != 36 {
        return None;
    }
    Uuid::try_parse(s).ok()
}

pub fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
