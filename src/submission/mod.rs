pub mod schema;
pub mod validation;

pub use schema::{Answer, FormEntrySubmission, validate};
pub use validation::{IssueCode, ValidationError, ValidationIssue};
