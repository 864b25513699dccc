use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::errors::DomainError;
use crate::service::{NewService, Service, ServiceUpdate};

/// The full ordered list of categories: the unit of persistence.
///
/// Stored as a sequence of single-key mappings:
///
/// ```yaml
/// - dev:
///     - Gitea:
///         href: http://gitea.local
///         ping: http://gitea.local/healthz
/// - Media: []
/// ```
///
/// Lookups by name act on the first match in list order. Create operations
/// refuse duplicate names, but files edited by hand may still contain them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub categories: Vec<Category>,
}

impl Document {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.name == name)
    }

    pub fn add_category(&mut self, name: &str) -> Result<&Category, DomainError> {
        if self.category(name).is_some() {
            return Err(DomainError::CategoryAlreadyExists(name.to_string()));
        }

        self.categories.push(Category::new(name));
        Ok(&self.categories[self.categories.len() - 1])
    }

    /// Removes every category with the given name and returns how many went.
    pub fn remove_category(&mut self, name: &str) -> Result<usize, DomainError> {
        let before = self.categories.len();
        self.categories.retain(|c| c.name != name);

        match before - self.categories.len() {
            0 => Err(DomainError::CategoryNotFound(name.to_string())),
            removed => Ok(removed),
        }
    }

    pub fn add_service(
        &mut self,
        category: &str,
        new_service: NewService,
    ) -> Result<&Service, DomainError> {
        let target = self
            .category_mut(category)
            .ok_or_else(|| DomainError::CategoryNotFound(category.to_string()))?;

        if target.service(&new_service.name).is_some() {
            return Err(DomainError::service_already_exists(
                category,
                &new_service.name,
            ));
        }

        target.services.push(new_service.into_service());
        Ok(&target.services[target.services.len() - 1])
    }

    pub fn update_service(
        &mut self,
        category: &str,
        service: &str,
        update: ServiceUpdate,
    ) -> Result<&Service, DomainError> {
        let target = self
            .category_mut(category)
            .ok_or_else(|| DomainError::CategoryNotFound(category.to_string()))?
            .service_mut(service)
            .ok_or_else(|| DomainError::service_not_found(category, service))?;

        target.fields.apply(update);
        Ok(&*target)
    }

    /// Removes every service with the given name from the first matching
    /// category and returns how many went.
    pub fn remove_service(&mut self, category: &str, service: &str) -> Result<usize, DomainError> {
        let target = self
            .category_mut(category)
            .ok_or_else(|| DomainError::CategoryNotFound(category.to_string()))?;

        let before = target.services.len();
        target.services.retain(|s| s.name != service);

        match before - target.services.len() {
            0 => Err(DomainError::service_not_found(category, service)),
            removed => Ok(removed),
        }
    }
}
