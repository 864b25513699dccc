use homepage_editor_domain::{
    DomainError, ExtraFields, FieldUpdate, NewService, Service, ServiceUpdate,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct ServiceResponse {
    pub name: String,
    pub href: String,
    pub ping: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "ExtraFields::is_empty")]
    pub extra: ExtraFields,
}

impl ServiceResponse {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            href: service.fields.href.clone(),
            ping: service.fields.ping.clone(),
            icon: service.fields.icon.clone(),
            description: service.fields.description.clone(),
            extra: service.fields.extra.clone(),
        }
    }
}

/// Body of a service creation, shared by the JSON route and the legacy form.
///
/// Every field is optional at the wire level so that a missing `href` is
/// reported as a validation error instead of a deserialization rejection.
/// Supplied values are stored as given, empty strings included.
#[derive(Deserialize, Debug, Default)]
pub struct CreateServiceRequest {
    pub name: Option<String>,
    pub href: Option<String>,
    pub ping: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
}

impl CreateServiceRequest {
    pub fn into_new_service(self) -> Result<NewService, DomainError> {
        Ok(NewService {
            name: required("name", self.name)?,
            href: required("href", self.href)?,
            ping: required("ping", self.ping)?,
            icon: self.icon,
            description: self.description,
        })
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OptionalField {
    Icon,
    Description,
}

#[derive(Deserialize, Debug, Default)]
pub struct UpdateServiceRequest {
    pub href: Option<String>,
    pub ping: Option<String>,
    pub icon: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub clear: Vec<OptionalField>,
}

impl UpdateServiceRequest {
    pub fn into_update(self) -> Result<ServiceUpdate, DomainError> {
        let icon = if self.clear.contains(&OptionalField::Icon) {
            FieldUpdate::Clear
        } else {
            FieldUpdate::from_submitted(self.icon)
        };
        let description = if self.clear.contains(&OptionalField::Description) {
            FieldUpdate::Clear
        } else {
            FieldUpdate::from_submitted(self.description)
        };

        Ok(ServiceUpdate {
            href: required("href", self.href)?,
            ping: required("ping", self.ping)?,
            icon,
            description,
        })
    }
}

pub(crate) fn required(field: &str, value: Option<String>) -> Result<String, DomainError> {
    value.ok_or_else(|| DomainError::missing_field(field))
}
