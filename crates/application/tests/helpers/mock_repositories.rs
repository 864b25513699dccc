#![allow(dead_code)]

use async_trait::async_trait;
use homepage_editor_application::ports::DocumentStore;
use homepage_editor_domain::{Document, DomainError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct MockDocumentStore {
    document: Arc<RwLock<Document>>,
    should_fail_load: Arc<RwLock<Option<DomainError>>>,
    should_fail_save: Arc<RwLock<bool>>,
    load_delay: Arc<RwLock<Option<Duration>>>,
    saves: Arc<AtomicUsize>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::with_document(Document::default())
    }

    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(RwLock::new(document)),
            should_fail_load: Arc::new(RwLock::new(None)),
            should_fail_save: Arc::new(RwLock::new(false)),
            load_delay: Arc::new(RwLock::new(None)),
            saves: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub async fn set_load_error(&self, error: DomainError) {
        *self.should_fail_load.write().await = Some(error);
    }

    pub async fn set_should_fail_save(&self, should_fail: bool) {
        *self.should_fail_save.write().await = should_fail;
    }

    /// Widens the window between load and save so racing cycles interleave.
    pub async fn set_load_delay(&self, delay: Duration) {
        *self.load_delay.write().await = Some(delay);
    }

    pub async fn snapshot(&self) -> Document {
        self.document.read().await.clone()
    }

    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn load(&self) -> Result<Document, DomainError> {
        if let Some(error) = self.should_fail_load.read().await.clone() {
            return Err(error);
        }

        let document = self.document.read().await.clone();

        let delay = *self.load_delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        Ok(document)
    }

    async fn save(&self, document: &Document) -> Result<(), DomainError> {
        if *self.should_fail_save.read().await {
            return Err(DomainError::Io("disk full".to_string()));
        }

        *self.document.write().await = document.clone();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
