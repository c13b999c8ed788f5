pub mod company;
pub mod form;
pub mod form_entry;
pub mod user;

pub use company::Company;
pub use form::Form;
pub use form_entry::{FormEntry, FormEntryAnswer, NewAnswer, NewFormEntry};
pub use user::User;
