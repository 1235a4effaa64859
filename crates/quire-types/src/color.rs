use crate::ParseError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// An opaque RGB color as carried by the document model.
///
/// RTF never embeds colors inline; the writer replaces each one with its
/// position in the document's color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, ParseError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ParseError::InvalidColor(format!("must start with #, got: {}", s)))?;
        if !hex.is_ascii() {
            return Err(ParseError::InvalidColor(format!("non-hex characters in '{}'", s)));
        }
        let component = |digits: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|e| ParseError::InvalidColor(format!("'{}': {}", s, e)))
        };

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2))?;
                let g = component(&hex[1..2].repeat(2))?;
                let b = component(&hex[2..3].repeat(2))?;
                Ok(Color::rgb(r, g, b))
            }
            6 => Ok(Color::rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            n => Err(ParseError::InvalidColor(format!(
                "expected 3 or 6 hex digits, got {}",
                n
            ))),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}
