//! Token and variable values.
//!
//! A [`Value`] is what both design tokens and theme variables hold. It is
//! deliberately small: a bare number (z-index, font weight, opacity), a
//! dimension with a CSS unit (`0.0625rem`, `50%`), or free text (colors,
//! keywords such as `transparent`).
//!
//! Strings that look like a number followed by a unit are classified as
//! dimensions both when deserializing and when converting from `&str`, so a
//! value reads the same whether it came from code or from a YAML file.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::{ColorParseError, Rgba};

/// A number with a CSS unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: String,
}

impl Dimension {
    /// Creates a dimension from a value and unit.
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// Parses `"<number><unit>"`, e.g. `"1.5rem"` or `"100%"`.
    ///
    /// Returns `None` when the number or the unit is missing, or when the
    /// unit contains anything other than ASCII letters or a single `%`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.' || c == '-' || c == '+'))?;
        let (number, unit) = s.split_at(split);
        if number.is_empty() {
            return None;
        }
        let unit_ok = unit == "%" || unit.chars().all(|c| c.is_ascii_alphabetic());
        if !unit_ok {
            return None;
        }
        let value = number.parse::<f64>().ok()?;
        Some(Self::new(value, unit))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

/// A design token or theme variable value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Unitless number.
    Number(f64),
    /// Number with a CSS unit.
    Dimension(Dimension),
    /// Anything else: colors, keywords, font stacks.
    Text(String),
}

impl Value {
    /// Returns the number if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the dimension if this is a [`Value::Dimension`].
    pub fn as_dimension(&self) -> Option<&Dimension> {
        match self {
            Value::Dimension(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the text if this is a [`Value::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Parses a text value as a CSS color.
    pub fn as_color(&self) -> Result<Rgba, ColorParseError> {
        match self {
            Value::Text(s) => Rgba::parse(s),
            other => Err(ColorParseError::new(other.to_string())),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Dimension(d) => write!(f, "{}", d),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<Dimension> for Value {
    fn from(d: Dimension) -> Self {
        Value::Dimension(d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        match Dimension::parse(s) {
            Some(d) => Value::Dimension(d),
            None => Value::Text(s.to_string()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        match Dimension::parse(&s) {
            Some(d) => Value::Dimension(d),
            None => Value::Text(s),
        }
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Dimension(d) => serializer.collect_str(d),
            Value::Text(s) => serializer.serialize_str(s),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Number(n) => Value::Number(n),
            RawValue::Text(s) => Value::from(s),
        })
    }
}
