use homepage_editor_domain::{Document, DomainError};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use crate::ports::DocumentStore;

/// Runs load-mutate-save cycles against a [`DocumentStore`] one at a time.
///
/// Every cycle holds the session lock from `load` to `save`, so two requests
/// racing on the same document cannot overwrite each other's change. A
/// mutation that returns an error is never saved.
pub struct DocumentSession {
    store: Arc<dyn DocumentStore>,
    lock: Mutex<()>,
}

impl DocumentSession {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            lock: Mutex::new(()),
        }
    }

    pub async fn read(&self) -> Result<Document, DomainError> {
        let _guard = self.lock.lock().await;
        self.store.load().await
    }

    pub async fn mutate<T, F>(&self, mutation: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut Document) -> Result<T, DomainError> + Send,
        T: Send,
    {
        let _guard = self.lock.lock().await;

        let mut document = self.store.load().await?;
        let output = mutation(&mut document)?;
        self.store.save(&document).await?;

        debug!(
            categories = document.categories.len(),
            "Document saved"
        );
        Ok(output)
    }
}
