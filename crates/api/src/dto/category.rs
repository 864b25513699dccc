use homepage_editor_domain::{Category, Document, DomainError};
use serde::{Deserialize, Serialize};

use super::service::required;
use super::ServiceResponse;

#[derive(Serialize, Debug)]
pub struct CategoryResponse {
    pub name: String,
    pub services: Vec<ServiceResponse>,
}

impl CategoryResponse {
    pub fn from_category(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            services: category
                .services
                .iter()
                .map(ServiceResponse::from_service)
                .collect(),
        }
    }

    pub fn from_document(document: &Document) -> Vec<Self> {
        document.categories.iter().map(Self::from_category).collect()
    }
}

#[derive(Deserialize, Debug)]
pub struct CreateCategoryRequest {
    pub name: Option<String>,
}

impl CreateCategoryRequest {
    pub fn into_name(self) -> Result<String, DomainError> {
        required("name", self.name)
    }
}

#[derive(Deserialize, Debug)]
pub struct LegacyCategoryForm {
    pub category_name: Option<String>,
}

impl LegacyCategoryForm {
    pub fn into_name(self) -> Result<String, DomainError> {
        required("category_name", self.category_name)
    }
}
