pub mod create_form_entry;

pub use create_form_entry::{CreateFormEntryError, CreateFormEntryInput, CreateFormEntryUseCase};
