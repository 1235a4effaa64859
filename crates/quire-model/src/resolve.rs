//! Attribute resolution at the model boundary.
use crate::attribute::AttributeValue;
use serde::{Deserialize, Serialize};

/// Which value of an attribute a caller wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// Only the value set on the node itself.
    Direct,
    /// The value after the style cascade has been applied.
    #[default]
    Effective,
}

/// Read-only, string-keyed attribute access.
pub trait AttributeSource {
    /// The value set directly on this source, if any.
    fn direct(&self, name: &str) -> Option<&AttributeValue>;

    /// The cascaded value. Sources without inheritance report their direct value.
    fn effective(&self, name: &str) -> Option<&AttributeValue> {
        self.direct(name)
    }
}

/// Resolves `name` on `source` into a fresh value; unset attributes are `Absent`.
pub fn resolve<S>(source: &S, name: &str, resolution: Resolution) -> AttributeValue
where
    S: AttributeSource + ?Sized,
{
    let found = match resolution {
        Resolution::Direct => source.direct(name),
        Resolution::Effective => source.effective(name),
    };
    found.copied().unwrap_or(AttributeValue::Absent)
}
