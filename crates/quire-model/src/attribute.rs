//! Attribute values and the per-node attribute map.
use quire_types::{Color, EnumValue, Length};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The closed set of value kinds an attribute can resolve to.
///
/// `Absent` is what resolution yields for an attribute that is not set; it is
/// never stored in an [`AttributeMap`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AttributeValue {
    #[default]
    #[serde(skip)]
    Absent,
    Length(Length),
    Boolean(bool),
    Color(Color),
    Enum(EnumValue),
    Integer(i64),
}

impl AttributeValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeValue::Absent)
    }

    /// Name of the value kind, for diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            AttributeValue::Absent => "absent",
            AttributeValue::Length(_) => "length",
            AttributeValue::Boolean(_) => "boolean",
            AttributeValue::Color(_) => "color",
            AttributeValue::Enum(_) => "enum",
            AttributeValue::Integer(_) => "integer",
        }
    }
}

impl From<Length> for AttributeValue {
    fn from(value: Length) -> Self {
        AttributeValue::Length(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Boolean(value)
    }
}

impl From<Color> for AttributeValue {
    fn from(value: Color) -> Self {
        AttributeValue::Color(value)
    }
}

impl From<EnumValue> for AttributeValue {
    fn from(value: EnumValue) -> Self {
        AttributeValue::Enum(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

/// Named attributes set directly on a node or style.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeMap(BTreeMap<String, AttributeValue>);

impl AttributeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.0.get(name)
    }

    /// Sets `name`; setting [`AttributeValue::Absent`] clears it instead.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        match value.into() {
            AttributeValue::Absent => {
                self.0.remove(&name);
            }
            value => {
                self.0.insert(name, value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = AttributeMap::new();
        for (k, v) in iter {
            map.set(k, v);
        }
        map
    }
}
