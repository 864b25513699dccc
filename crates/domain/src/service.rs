use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::{Mapping, Value};

use crate::single_entry::SingleEntryVisitor;

/// Keys of a service record that the editor does not manage. They are carried
/// through every load/save cycle untouched.
pub type ExtraFields = Mapping;

/// A named link entry inside a category.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub name: String,
    pub fields: ServiceFields,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServiceFields {
    pub href: String,
    pub ping: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub extra: ExtraFields,
}

/// Input for appending a service to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub href: String,
    pub ping: String,
    pub icon: Option<String>,
    pub description: Option<String>,
}

/// Input for editing an existing service.
///
/// `href` and `ping` are always overwritten. Optional fields carry an explicit
/// [`FieldUpdate`] so "not supplied" and "clear it" stay distinguishable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUpdate {
    pub href: String,
    pub ping: String,
    pub icon: FieldUpdate,
    pub description: FieldUpdate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldUpdate {
    #[default]
    Keep,
    Set(String),
    Clear,
}

impl FieldUpdate {
    /// A missing or empty submission leaves the stored value alone.
    pub fn from_submitted(value: Option<String>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::Set(v),
            _ => Self::Keep,
        }
    }

    pub fn apply(self, slot: &mut Option<String>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = Some(value),
            Self::Clear => *slot = None,
        }
    }
}

impl Service {
    pub fn new(name: impl Into<String>, href: impl Into<String>, ping: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: ServiceFields {
                href: href.into(),
                ping: ping.into(),
                ..ServiceFields::default()
            },
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.fields.icon = Some(icon.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.fields.description = Some(description.into());
        self
    }
}

impl NewService {
    pub fn into_service(self) -> Service {
        Service {
            name: self.name,
            fields: ServiceFields {
                href: self.href,
                ping: self.ping,
                icon: self.icon.filter(|v| !v.is_empty()),
                description: self.description.filter(|v| !v.is_empty()),
                extra: ExtraFields::new(),
            },
        }
    }
}

impl ServiceFields {
    pub fn apply(&mut self, update: ServiceUpdate) {
        self.href = update.href;
        self.ping = update.ping;
        update.icon.apply(&mut self.icon);
        update.description.apply(&mut self.description);
    }

    fn from_mapping(mapping: Mapping) -> Result<Self, String> {
        let mut href = None;
        let mut ping = None;
        let mut icon = None;
        let mut description = None;
        let mut extra = ExtraFields::new();

        for (key, value) in mapping {
            match key.as_str() {
                Some("href") => href = Some(scalar_string("href", value)?),
                Some("ping") => ping = Some(scalar_string("ping", value)?),
                Some("icon") => icon = optional_scalar_string("icon", value)?,
                Some("description") => {
                    description = optional_scalar_string("description", value)?
                }
                _ => {
                    extra.insert(key, value);
                }
            }
        }

        Ok(Self {
            href: href.ok_or_else(|| "missing required field 'href'".to_string())?,
            ping: ping.ok_or_else(|| "missing required field 'ping'".to_string())?,
            icon,
            description,
            extra,
        })
    }
}

fn scalar_string(field: &str, value: Value) -> Result<String, String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(format!("field '{}' must be a string", field)),
    }
}

fn optional_scalar_string(field: &str, value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        other => scalar_string(field, other).map(Some),
    }
}

impl Serialize for ServiceFields {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let len = 2
            + usize::from(self.icon.is_some())
            + usize::from(self.description.is_some())
            + self.extra.len();

        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("href", &self.href)?;
        map.serialize_entry("ping", &self.ping)?;
        if let Some(icon) = &self.icon {
            map.serialize_entry("icon", icon)?;
        }
        if let Some(description) = &self.description {
            map.serialize_entry("description", description)?;
        }
        for (key, value) in &self.extra {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ServiceFields {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mapping = Mapping::deserialize(deserializer)?;
        Self::from_mapping(mapping).map_err(de::Error::custom)
    }
}

impl Serialize for Service {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.fields)?;
        map.end()
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (name, fields) =
            deserializer.deserialize_map(SingleEntryVisitor::<ServiceFields>::new("service"))?;
        Ok(Self { name, fields })
    }
}
