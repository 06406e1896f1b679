//! Design tokens shared by every component theme.
//!
//! This module provides:
//!
//! - [`DesignTokens`]: categorized, immutable token table handed to generators
//! - [`TokenCategory`]: the fixed set of token categories
//! - [`canvas_tokens`] / [`canvas_a11y_tokens`]: the built-in token sets
//!
//! Tokens are built once (in code, or loaded from a document via
//! [`DesignTokens::from_yaml_str`] and friends) and then shared behind an
//! `Arc` by the [`ThemeContext`](crate::ThemeContext). Replacing them is the
//! only event that invalidates every cached theme.

mod canvas;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::value::Value;

pub use canvas::{canvas_a11y_tokens, canvas_tokens};

/// A category of design tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenCategory {
    Colors,
    Spacing,
    Borders,
    Typography,
    Stacking,
}

impl TokenCategory {
    /// All categories, in declaration order.
    pub const ALL: [TokenCategory; 5] = [
        TokenCategory::Colors,
        TokenCategory::Spacing,
        TokenCategory::Borders,
        TokenCategory::Typography,
        TokenCategory::Stacking,
    ];

    /// The lowercase name used in documents and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Spacing => "spacing",
            TokenCategory::Borders => "borders",
            TokenCategory::Typography => "typography",
            TokenCategory::Stacking => "stacking",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A categorized table of named design values.
///
/// # Example
///
/// ```rust
/// use themeable::{DesignTokens, TokenCategory, Value};
///
/// let tokens = DesignTokens::new()
///     .with(TokenCategory::Colors, "brand", "#008EE2")
///     .with(TokenCategory::Borders, "widthSmall", "0.0625rem")
///     .with(TokenCategory::Stacking, "topmost", 9999);
///
/// assert_eq!(tokens.stacking("topmost").unwrap(), &Value::Number(9999.0));
/// assert!(tokens.color("licorice").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DesignTokens {
    colors: IndexMap<String, Value>,
    spacing: IndexMap<String, Value>,
    borders: IndexMap<String, Value>,
    typography: IndexMap<String, Value>,
    stacking: IndexMap<String, Value>,
}

impl DesignTokens {
    /// Creates an empty token table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a token, returning the updated table for chaining.
    pub fn with<V: Into<Value>>(mut self, category: TokenCategory, name: &str, value: V) -> Self {
        self.category_mut(category)
            .insert(name.to_string(), value.into());
        self
    }

    /// Returns every token of a category, in insertion order.
    pub fn category(&self, category: TokenCategory) -> &IndexMap<String, Value> {
        match category {
            TokenCategory::Colors => &self.colors,
            TokenCategory::Spacing => &self.spacing,
            TokenCategory::Borders => &self.borders,
            TokenCategory::Typography => &self.typography,
            TokenCategory::Stacking => &self.stacking,
        }
    }

    fn category_mut(&mut self, category: TokenCategory) -> &mut IndexMap<String, Value> {
        match category {
            TokenCategory::Colors => &mut self.colors,
            TokenCategory::Spacing => &mut self.spacing,
            TokenCategory::Borders => &mut self.borders,
            TokenCategory::Typography => &mut self.typography,
            TokenCategory::Stacking => &mut self.stacking,
        }
    }

    /// Looks up a token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::MissingToken`] if the token is not defined.
    pub fn get(&self, category: TokenCategory, name: &str) -> Result<&Value, TokenError> {
        self.category(category)
            .get(name)
            .ok_or_else(|| TokenError::MissingToken {
                category,
                name: name.to_string(),
            })
    }

    /// Shorthand for `get(TokenCategory::Colors, name)`.
    pub fn color(&self, name: &str) -> Result<&Value, TokenError> {
        self.get(TokenCategory::Colors, name)
    }

    /// Shorthand for `get(TokenCategory::Spacing, name)`.
    pub fn spacing(&self, name: &str) -> Result<&Value, TokenError> {
        self.get(TokenCategory::Spacing, name)
    }

    /// Shorthand for `get(TokenCategory::Borders, name)`.
    pub fn border(&self, name: &str) -> Result<&Value, TokenError> {
        self.get(TokenCategory::Borders, name)
    }

    /// Shorthand for `get(TokenCategory::Typography, name)`.
    pub fn typography(&self, name: &str) -> Result<&Value, TokenError> {
        self.get(TokenCategory::Typography, name)
    }

    /// Shorthand for `get(TokenCategory::Stacking, name)`.
    pub fn stacking(&self, name: &str) -> Result<&Value, TokenError> {
        self.get(TokenCategory::Stacking, name)
    }

    /// Total number of tokens across all categories.
    pub fn len(&self) -> usize {
        TokenCategory::ALL
            .iter()
            .map(|c| self.category(*c).len())
            .sum()
    }

    /// Returns true if no tokens are defined.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_with_and_get() {
        let tokens = DesignTokens::new()
            .with(TokenCategory::Colors, "brand", "#008EE2")
            .with(TokenCategory::Spacing, "small", "0.75rem");

        assert_eq!(tokens.color("brand").unwrap(), &Value::from("#008EE2"));
        assert_eq!(tokens.spacing("small").unwrap(), &Value::from("0.75rem"));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_tokens_missing() {
        let tokens = DesignTokens::new();
        let err = tokens.border("radiusMedium").unwrap_err();
        assert_eq!(
            err,
            TokenError::MissingToken {
                category: TokenCategory::Borders,
                name: "radiusMedium".to_string(),
            }
        );
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_tokens_with_overwrites() {
        let tokens = DesignTokens::new()
            .with(TokenCategory::Colors, "brand", "#008EE2")
            .with(TokenCategory::Colors, "brand", "#0770A3");
        assert_eq!(tokens.color("brand").unwrap(), &Value::from("#0770A3"));
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn test_category_preserves_order() {
        let tokens = DesignTokens::new()
            .with(TokenCategory::Colors, "white", "#FFFFFF")
            .with(TokenCategory::Colors, "brand", "#008EE2");
        let names: Vec<&str> = tokens
            .category(TokenCategory::Colors)
            .keys()
            .map(|s| s.as_str())
            .collect();
        assert_eq!(names, vec!["white", "brand"]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(TokenCategory::Typography.to_string(), "typography");
    }
}
