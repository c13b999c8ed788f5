use std::sync::Arc;

use crate::repositories::FormRepository;
use crate::usecase::CreateFormEntryUseCase;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub forms: Arc<dyn FormRepository>,
    pub create_form_entry: CreateFormEntryUseCase,
}
