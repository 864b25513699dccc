use homepage_editor_domain::DomainError;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DocumentSession;

pub struct DeleteCategoryUseCase {
    session: Arc<DocumentSession>,
}

impl DeleteCategoryUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    /// Removes every category with this name.
    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<(), DomainError> {
        let removed = self
            .session
            .mutate(|document| document.remove_category(name))
            .await?;

        info!(category = %name, removed, "Category deleted");
        Ok(())
    }
}
