use homepage_editor_domain::{DomainError, NewService, Service};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DocumentSession;

pub struct CreateServiceUseCase {
    session: Arc<DocumentSession>,
}

impl CreateServiceUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    #[instrument(skip(self, new_service), fields(service = %new_service.name))]
    pub async fn execute(
        &self,
        category: &str,
        new_service: NewService,
    ) -> Result<Service, DomainError> {
        let service = self
            .session
            .mutate(move |document| document.add_service(category, new_service).cloned())
            .await?;

        info!(
            category = %category,
            service = %service.name,
            href = %service.fields.href,
            "Service created"
        );
        Ok(service)
    }
}
