#![deny(unsafe_code)]

use std::fmt;

/// A raw spreadsheet cell as handed over by the file decoder.
///
/// Serialized untagged so that a JSON row such as `["Ann", 42]` maps directly
/// onto `[RawCell::Text, RawCell::Number]`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RawCell {
    Number(f64),
    Text(String),
}

impl RawCell {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Value equality used when collapsing duplicate samples.
    ///
    /// Text and numbers never compare equal, and `NaN` equals itself.
    pub fn same_value(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Number(_) => None,
        }
    }
}

impl PartialEq for RawCell {
    fn eq(&self, other: &Self) -> bool {
        self.same_value(other)
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

/// Numbers print the way a browser shows them: shortest round-trip digits,
/// plain decimal notation for exponents from -6 to 20, otherwise `1e+21` style.
impl fmt::Display for RawCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(value) => f.write_str(value),
            Self::Number(value) => write_number(f, *value),
        }
    }
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        return f.write_str("NaN");
    }
    if value.is_infinite() {
        return f.write_str(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value == 0.0 {
        return f.write_str("0");
    }
    if value < 0.0 {
        f.write_str("-")?;
    }

    // `{:e}` yields the shortest digits that round-trip, e.g. "1.2345e20".
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((&scientific, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = mantissa.replace('.', "");
    let len = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let point = exponent + 1;

    if len <= point && point <= 21 {
        write!(f, "{digits}{}", "0".repeat((point - len) as usize))
    } else if 0 < point && point <= 21 {
        let (whole, fraction) = digits.split_at(point as usize);
        write!(f, "{whole}.{fraction}")
    } else if -6 < point && point <= 0 {
        write!(f, "0.{}{digits}", "0".repeat(point.unsigned_abs() as usize))
    } else {
        let (first, rest) = digits.split_at(1);
        let sign = if exponent < 0 { '-' } else { '+' };
        if rest.is_empty() {
            write!(f, "{first}e{sign}{}", exponent.unsigned_abs())
        } else {
            write!(f, "{first}.{rest}e{sign}{}", exponent.unsigned_abs())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_and_number_are_distinct() {
        assert!(!RawCell::text("1").same_value(&RawCell::Number(1.0)));
        assert!(RawCell::Number(1.0).same_value(&RawCell::Number(1.0)));
    }

    #[test]
    fn nan_equals_itself() {
        assert_eq!(RawCell::Number(f64::NAN), RawCell::Number(f64::NAN));
    }

    #[test]
    fn display_drops_integral_fraction() {
        assert_eq!(RawCell::Number(2024.0).to_string(), "2024");
        assert_eq!(RawCell::Number(-3.0).to_string(), "-3");
        assert_eq!(RawCell::Number(1.5).to_string(), "1.5");
        assert_eq!(RawCell::text("Name").to_string(), "Name");
    }

    #[test]
    fn display_matches_browser_number_text() {
        let cases = [
            (0.001, "0.001"),
            (1e-6, "0.000001"),
            (1e-7, "1e-7"),
            (-2.5e-8, "-2.5e-8"),
            (123.456, "123.456"),
            (1.2345678901234568e20, "123456789012345680000"),
            (1e21, "1e+21"),
            (-1.5e22, "-1.5e+22"),
            (f64::NAN, "NaN"),
            (f64::NEG_INFINITY, "-Infinity"),
            (-0.0, "0"),
        ];
        for (value, expected) in cases {
            assert_eq!(RawCell::Number(value).to_string(), expected, "{value:e}");
        }
    }

    #[test]
    fn deserializes_mixed_row() {
        let row: Vec<RawCell> = serde_json::from_str(r#"["Ann", 42, 1.5]"#).unwrap();
        assert_eq!(
            row,
            vec![RawCell::text("Ann"), RawCell::Number(42.0), RawCell::Number(1.5)]
        );
    }
}
