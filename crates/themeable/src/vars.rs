//! Theme variable mappings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::Value;

/// An ordered mapping from theme variable name to value.
///
/// Generators return a complete `ThemeVars`; variant overrides are a partial
/// one. Order follows insertion so consumers can emit variables in the order
/// a component declares them. Equality ignores order.
///
/// # Example
///
/// ```rust
/// use themeable::ThemeVars;
///
/// let vars = ThemeVars::new()
///     .set("color", "#000")
///     .set("checkedBackground", "#fff");
///
/// assert_eq!(vars.len(), 2);
/// assert_eq!(vars.get("color").unwrap().to_string(), "#000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeVars {
    vars: IndexMap<String, Value>,
}

impl ThemeVars {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, returning the updated mapping for chaining.
    pub fn set<V: Into<Value>>(mut self, name: &str, value: V) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a variable in place, returning the previous value.
    pub fn insert<V: Into<Value>>(&mut self, name: &str, value: V) -> Option<Value> {
        self.vars.insert(name.to_string(), value.into())
    }

    /// Returns the value of a variable.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    /// Returns true if the variable is defined.
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Iterates over variable names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vars.keys().map(|s| s.as_str())
    }

    /// Iterates over `(name, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if no variables are defined.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ThemeVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ThemeVars {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.vars.iter()
    }
}
