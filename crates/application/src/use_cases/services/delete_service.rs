use homepage_editor_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DocumentSession;

pub struct DeleteServiceUseCase {
    session: Arc<DocumentSession>,
}

impl DeleteServiceUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, category: &str, service: &str) -> Result<(), DomainError> {
        let removed = self
            .session
            .mutate(|document| document.remove_service(category, service))
            .await?;

        info!(category = %category, service = %service, removed, "Service deleted");
        Ok(())
    }
}
