use homepage_editor_application::ports::DocumentStore;
use homepage_editor_domain::Config;
use homepage_editor_infrastructure::repositories::YamlDocumentStore;
use std::sync::Arc;
use tracing::info;

pub struct Repositories {
    pub document: Arc<dyn DocumentStore>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        let store = YamlDocumentStore::new(&config.document.path);
        info!(path = %store.path().display(), "Using document file");
        Self {
            document: Arc::new(store),
        }
    }
}
