use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentConfig {
    /// YAML file holding the dashboard categories and services.
    #[serde(default = "default_document_path")]
    pub path: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            path: default_document_path(),
        }
    }
}

fn default_document_path() -> String {
    "/data/settings.yaml".to_string()
}
