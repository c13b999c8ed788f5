pub mod companies;
pub mod form_entries;
pub mod forms;
pub mod users;
