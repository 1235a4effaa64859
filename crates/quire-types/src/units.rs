//! Lengths and the integer scales RTF control words are written in.
use crate::ParseError;
use serde::{de, Deserialize, Deserializer, Serialize};

const POINTS_PER_INCH: f64 = 72.0;
const POINTS_PER_CM: f64 = POINTS_PER_INCH / 2.54;
const POINTS_PER_PICA: f64 = 12.0;

/// A length, stored canonically in points.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Length(f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    pub const fn pt(points: f64) -> Self {
        Self(points)
    }

    pub fn inch(inches: f64) -> Self {
        Self(inches * POINTS_PER_INCH)
    }

    pub fn cm(cm: f64) -> Self {
        Self(cm * POINTS_PER_CM)
    }

    pub fn mm(mm: f64) -> Self {
        Self(mm * POINTS_PER_CM / 10.0)
    }

    pub fn points(&self) -> f64 {
        self.0
    }

    /// Converts this length into `scale`. See [`to_target_unit`].
    pub fn to_scale(&self, scale: Scale) -> i32 {
        to_target_unit(self.0, scale)
    }

    /// Parse a length with an optional unit suffix (e.g. "12pt", "2.5cm", "1in", "10").
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let input = input.trim();
        let number = |s: &str| {
            let value = s
                .trim()
                .parse::<f64>()
                .map_err(|e| ParseError::InvalidLength(format!("'{}': {}", input, e)))?;
            if !value.is_finite() {
                return Err(ParseError::InvalidLength(format!("'{}' is not finite", input)));
            }
            Ok(value)
        };

        if let Some(val) = input.strip_suffix("pt") {
            return number(val).map(Length::pt);
        }
        if let Some(val) = input.strip_suffix("in") {
            return number(val).map(Length::inch);
        }
        if let Some(val) = input.strip_suffix("cm") {
            return number(val).map(Length::cm);
        }
        if let Some(val) = input.strip_suffix("mm") {
            return number(val).map(Length::mm);
        }

        // No unit, assume points
        number(input).map(Length::pt)
    }
}

impl<'de> Deserialize<'de> for Length {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum LengthDef {
            Num(f64),
            Str(String),
        }

        match LengthDef::deserialize(deserializer)? {
            LengthDef::Num(points) => Ok(Length::pt(points)),
            LengthDef::Str(s) => Length::parse(&s).map_err(de::Error::custom),
        }
    }
}

/// The integer scales used by RTF control-word arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    /// Whole points; the only scale that truncates instead of rounding.
    #[default]
    Points,
    HalfPoints,
    /// Twentieths of a point.
    Twips,
    /// Line units, 240 per point.
    Lines,
    /// English Metric Units, used for drawing objects.
    Emu,
    /// Hundredths of a character unit (one pica).
    PicaHundredths,
}

/// Converts a length in points to an integer in the requested scale.
///
/// Every scale except [`Scale::Points`] rounds to the nearest integer with
/// ties going to the even neighbour, which is what the RTF output this
/// writer reproduces was generated with. Results outside the `i32` range
/// saturate at `i32::MIN`/`i32::MAX`.
pub fn to_target_unit(points: f64, scale: Scale) -> i32 {
    let scaled = match scale {
        Scale::Points => return points as i32,
        Scale::HalfPoints => points * 2.0,
        Scale::Twips => points * 20.0,
        Scale::Lines => points * 12.0 * 20.0,
        Scale::Emu => points * 12700.0,
        Scale::PicaHundredths => points / POINTS_PER_PICA * 100.0,
    };
    scaled.round_ties_even() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_point_in_every_scale() {
        assert_eq!(to_target_unit(1.0, Scale::HalfPoints), 2);
        assert_eq!(to_target_unit(1.0, Scale::Twips), 20);
        assert_eq!(to_target_unit(1.0, Scale::Lines), 240);
        assert_eq!(to_target_unit(1.0, Scale::Emu), 12700);
        assert_eq!(to_target_unit(1.0, Scale::Points), 1);
    }

    #[test]
    fn zero_is_zero_everywhere() {
        for scale in [
            Scale::Points,
            Scale::HalfPoints,
            Scale::Twips,
            Scale::Lines,
            Scale::Emu,
            Scale::PicaHundredths,
        ] {
            assert_eq!(to_target_unit(0.0, scale), 0, "{:?}", scale);
        }
    }

    #[test]
    fn seventy_two_points_in_emu() {
        assert_eq!(Length::inch(1.0).to_scale(Scale::Emu), 914_400);
        assert_eq!(Length::pt(72.0).to_scale(Scale::Emu), 914_400);
    }

    #[test]
    fn pica_hundredths() {
        assert_eq!(to_target_unit(12.0, Scale::PicaHundredths), 100);
        assert_eq!(to_target_unit(3.0, Scale::PicaHundredths), 25);
        // 1/12 * 100 = 8.33..
        assert_eq!(to_target_unit(1.0, Scale::PicaHundredths), 8);
    }

    #[test]
    fn points_truncate_toward_zero() {
        assert_eq!(to_target_unit(10.9, Scale::Points), 10);
        assert_eq!(to_target_unit(-10.9, Scale::Points), -10);
    }

    #[test]
    fn midpoints_round_to_even() {
        // 0.25pt * 2 = 0.5 -> 0, 0.75pt * 2 = 1.5 -> 2
        assert_eq!(to_target_unit(0.25, Scale::HalfPoints), 0);
        assert_eq!(to_target_unit(0.75, Scale::HalfPoints), 2);
        // 0.125pt * 20 = 2.5 -> 2
        assert_eq!(to_target_unit(0.125, Scale::Twips), 2);
        assert_eq!(to_target_unit(10.3, Scale::Twips), 206);
    }

    #[test]
    fn parse_lengths_with_units() {
        assert_eq!(Length::parse("12pt").unwrap(), Length::pt(12.0));
        assert_eq!(Length::parse(" 1in ").unwrap(), Length::pt(72.0));
        assert_eq!(Length::parse("2.54cm").unwrap().to_scale(Scale::Twips), 1440);
        assert_eq!(Length::parse("25.4mm").unwrap().to_scale(Scale::Twips), 1440);
        assert_eq!(Length::parse("7").unwrap(), Length::pt(7.0));
        assert!(Length::parse("wide").is_err());
    }

    #[test]
    fn parse_rejects_non_finite_lengths() {
        assert!(matches!(Length::parse("NaN"), Err(ParseError::InvalidLength(_))));
        assert!(matches!(Length::parse("inf"), Err(ParseError::InvalidLength(_))));
        assert!(matches!(Length::parse("-infpt"), Err(ParseError::InvalidLength(_))));
        assert!(serde_json::from_str::<Length>("\"NaN\"").is_err());
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!(to_target_unit(200_000.0, Scale::Emu), i32::MAX);
        assert_eq!(to_target_unit(-200_000.0, Scale::Emu), i32::MIN);
    }

    #[test]
    fn deserialize_from_number_or_string() {
        let a: Length = serde_json::from_str("18").unwrap();
        let b: Length = serde_json::from_str("\"0.25in\"").unwrap();
        assert_eq!(a, Length::pt(18.0));
        assert_eq!(b, Length::pt(18.0));
    }
}
