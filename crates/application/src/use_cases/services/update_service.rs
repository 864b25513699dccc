use homepage_editor_domain::{DomainError, Service, ServiceUpdate};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DocumentSession;

pub struct UpdateServiceUseCase {
    session: Arc<DocumentSession>,
}

impl UpdateServiceUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    #[instrument(skip(self, update))]
    pub async fn execute(
        &self,
        category: &str,
        service: &str,
        update: ServiceUpdate,
    ) -> Result<Service, DomainError> {
        let updated = self
            .session
            .mutate(move |document| document.update_service(category, service, update).cloned())
            .await?;

        info!(
            category = %category,
            service = %service,
            href = %updated.fields.href,
            "Service updated"
        );
        Ok(updated)
    }
}
