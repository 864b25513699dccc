use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::service::Service;
use crate::single_entry::SingleEntryVisitor;

/// A named, ordered group of services.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Category {
    pub name: String,
    pub services: Vec<Service>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            services: Vec::new(),
        }
    }

    pub fn with_service(mut self, service: Service) -> Self {
        self.services.push(service);
        self
    }

    /// First service with the given name. Later duplicates are shadowed.
    pub fn service(&self, name: &str) -> Option<&Service> {
        self.services.iter().find(|s| s.name == name)
    }

    pub fn service_mut(&mut self, name: &str) -> Option<&mut Service> {
        self.services.iter_mut().find(|s| s.name == name)
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.services)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `- Media:` with no value is read as an empty category.
        let (name, services) = deserializer
            .deserialize_map(SingleEntryVisitor::<Option<Vec<Service>>>::new("category"))?;
        Ok(Self {
            name,
            services: services.unwrap_or_default(),
        })
    }
}
