use serde::de::{self, Deserialize, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

/// Reads a mapping that must hold exactly one `name: value` entry.
///
/// Categories and services are stored as lists of such mappings so their order
/// survives formats whose native mapping type is unordered.
pub(crate) struct SingleEntryVisitor<V> {
    kind: &'static str,
    marker: PhantomData<V>,
}

impl<V> SingleEntryVisitor<V> {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            marker: PhantomData,
        }
    }
}

impl<'de, V> Visitor<'de> for SingleEntryVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = (String, V);

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a {} entry mapping a single name", self.kind)
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((name, value)) = map.next_entry::<String, V>()? else {
            return Err(de::Error::custom(format!("empty {} entry", self.kind)));
        };

        if let Some(second) = map.next_key::<String>()? {
            return Err(de::Error::custom(format!(
                "{} entry '{}' has more than one key (found '{}')",
                self.kind, name, second
            )));
        }

        Ok((name, value))
    }
}
