use async_trait::async_trait;
use homepage_editor_domain::{Document, DomainError};

/// Port for the persisted dashboard document.
///
/// Implementations read and write the whole document; there are no partial
/// updates. `load` on a missing document yields an empty one.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn load(&self) -> Result<Document, DomainError>;

    async fn save(&self, document: &Document) -> Result<(), DomainError>;
}
