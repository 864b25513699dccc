use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid document format: {0}")]
    Format(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Service '{service}' not found in category '{category}'")]
    ServiceNotFound { category: String, service: String },

    #[error("Category already exists: {0}")]
    CategoryAlreadyExists(String),

    #[error("Service '{service}' already exists in category '{category}'")]
    ServiceAlreadyExists { category: String, service: String },
}

impl DomainError {
    /// A required input was not supplied at all. Empty values are accepted.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("Field '{}' is required", field))
    }

    pub fn service_not_found(category: &str, service: &str) -> Self {
        Self::ServiceNotFound {
            category: category.to_string(),
            service: service.to_string(),
        }
    }

    pub fn service_already_exists(category: &str, service: &str) -> Self {
        Self::ServiceAlreadyExists {
            category: category.to_string(),
            service: service.to_string(),
        }
    }
}
