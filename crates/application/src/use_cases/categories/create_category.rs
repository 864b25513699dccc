use homepage_editor_domain::{Category, DomainError};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::services::DocumentSession;

pub struct CreateCategoryUseCase {
    session: Arc<DocumentSession>,
}

impl CreateCategoryUseCase {
    pub fn new(session: Arc<DocumentSession>) -> Self {
        Self { session }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, name: &str) -> Result<Category, DomainError> {
        let category = self
            .session
            .mutate(|document| document.add_category(name).cloned())
            .await?;

        info!(category = %category.name, "Category created");
        Ok(category)
    }
}
