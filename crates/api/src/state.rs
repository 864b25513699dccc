use homepage_editor_application::services::DocumentSession;
use homepage_editor_application::use_cases::{
    CreateCategoryUseCase, CreateServiceUseCase, DeleteCategoryUseCase, DeleteServiceUseCase,
    GetDocumentUseCase, UpdateServiceUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_document: Arc<GetDocumentUseCase>,
    pub create_category: Arc<CreateCategoryUseCase>,
    pub delete_category: Arc<DeleteCategoryUseCase>,
    pub create_service: Arc<CreateServiceUseCase>,
    pub update_service: Arc<UpdateServiceUseCase>,
    pub delete_service: Arc<DeleteServiceUseCase>,
}

impl AppState {
    /// Wires every use case to the same session so all handlers share one lock.
    pub fn from_session(session: Arc<DocumentSession>) -> Self {
        Self {
            get_document: Arc::new(GetDocumentUseCase::new(session.clone())),
            create_category: Arc::new(CreateCategoryUseCase::new(session.clone())),
            delete_category: Arc::new(DeleteCategoryUseCase::new(session.clone())),
            create_service: Arc::new(CreateServiceUseCase::new(session.clone())),
            update_service: Arc::new(UpdateServiceUseCase::new(session.clone())),
            delete_service: Arc::new(DeleteServiceUseCase::new(session)),
        }
    }
}
