use homepage_editor_domain::{Document, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::services::DocumentSession;

pub struct GetDocumentUseCase {
    session: Arc<DocumentSession>,
}

impl GetDocumentUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<Document, DomainError> {
        let document = self.session.read().await?;
        debug!(categories = document.categories.len(), "Document loaded");
        Ok(document)
    }
}
