//! Loading tokens and variants from YAML or JSON.
//!
//! Generators are code, but the values they read (design tokens) and the
//! variants layered over them are data. A theme document carries both:
//!
//! ```yaml
//! tokens:
//!   colors:
//!     brand: "#0770A3"
//!   borders:
//!     widthSmall: 0.0625rem
//! variants:
//!   checkbox-facade:
//!     brand-blue:
//!       checkedBackground: "#0a84ff"
//! ```
//!
//! [`ThemeConfig::apply`] installs the tokens (if present) and then registers
//! every variant on a [`ThemeContext`]. Components must already be registered.
//! The whole document is checked first; a rejected document changes nothing.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::context::ThemeContext;
use crate::error::ThemeError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

/// Error type for loading and applying theme documents.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io { path: PathBuf, source: std::io::Error },

    /// The document is not valid YAML/JSON or does not match the schema.
    Parse(String),

    /// The file extension is not `.yaml`, `.yml` or `.json`.
    UnsupportedFormat { path: PathBuf },

    /// A variant in the document was rejected by the registry.
    Theme(ThemeError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read theme file \"{}\": {}", path.display(), source)
            }
            ConfigError::Parse(msg) => write!(f, "invalid theme document: {}", msg),
            ConfigError::UnsupportedFormat { path } => write!(
                f,
                "unsupported theme file \"{}\": expected .yaml, .yml or .json",
                path.display()
            ),
            ConfigError::Theme(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Theme(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

impl From<ThemeError> for ConfigError {
    fn from(err: ThemeError) -> Self {
        ConfigError::Theme(err)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
}

fn read_document(path: &Path) -> Result<(String, Format), ConfigError> {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => Format::Yaml,
        Some("json") => Format::Json,
        _ => {
            return Err(ConfigError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok((content, format))
}

impl DesignTokens {
    /// Parses a token table from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a token table from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a token table from a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match read_document(path.as_ref())? {
            (content, Format::Yaml) => Self::from_yaml_str(&content),
            (content, Format::Json) => Self::from_json_str(&content),
        }
    }
}

/// A theme document: optional tokens plus variants per component.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub tokens: Option<DesignTokens>,
    pub variants: IndexMap<String, IndexMap<String, ThemeVars>>,
}

impl ThemeConfig {
    /// Parses a theme document from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parses a theme document from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads a theme document from a `.yaml`, `.yml` or `.json` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        match read_document(path.as_ref())? {
            (content, Format::Yaml) => Self::from_yaml_str(&content),
            (content, Format::Json) => Self::from_json_str(&content),
        }
    }

    /// Installs the document on a context.
    ///
    /// Every registered generator must succeed under the document's tokens,
    /// and every variant must fit the defaults those tokens produce. Only
    /// then are the tokens replaced and the variants registered, in document
    /// order. On error the context is left as it was.
    pub fn apply(&self, context: &ThemeContext) -> Result<(), ConfigError> {
        let tokens = match &self.tokens {
            Some(tokens) => {
                context.check_tokens(tokens)?;
                Arc::new(tokens.clone())
            }
            None => context.tokens(),
        };
        for (component, variants) in &self.variants {
            for (variant, overrides) in variants {
                context.check_variant(component, variant, overrides, &tokens)?;
            }
        }

        if self.tokens.is_some() {
            context.replace_tokens(tokens);
        }
        for (component, variants) in &self.variants {
            for (variant, overrides) in variants {
                context.register_variant(component, variant, overrides.clone())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{avatar, checkbox_facade};
    use crate::tokens::{canvas_a11y_tokens, TokenCategory};
    use crate::value::Value;
    use std::error::Error;

    const DOCUMENT: &str = r##"
tokens:
  colors:
    brand: "#0770A3"
  stacking:
    topmost: 100
variants:
  checkbox-facade:
    brand-blue:
      checkedBackground: "#0a84ff"
"##;

    #[test]
    fn test_tokens_from_yaml() {
        let yaml = "colors:\n  brand: '#008EE2'\nborders:\n  widthSmall: 0.0625rem\n";
        let tokens = DesignTokens::from_yaml_str(yaml).unwrap();
        assert_eq!(tokens.color("brand").unwrap(), &Value::from("#008EE2"));
        assert_eq!(tokens.border("widthSmall").unwrap(), &Value::from("0.0625rem"));
    }

    #[test]
    fn test_tokens_from_json() {
        let tokens = DesignTokens::from_json_str(r##"{"stacking": {"topmost": 9999}}"##).unwrap();
        assert_eq!(
            tokens.get(TokenCategory::Stacking, "topmost").unwrap(),
            &Value::Number(9999.0)
        );
    }

    #[test]
    fn test_tokens_reject_unknown_category() {
        let result = DesignTokens::from_yaml_str("shadows:\n  small: 1px\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_theme_config_from_yaml() {
        let config = ThemeConfig::from_yaml_str(DOCUMENT).unwrap();
        assert!(config.tokens.is_some());
        assert_eq!(config.variants["checkbox-facade"].len(), 1);
    }

    #[test]
    fn test_theme_config_apply_partial_tokens_changes_nothing() {
        let context = ThemeContext::canvas().unwrap();
        context.resolve(avatar::ID, None).unwrap();

        // The document's token table would replace the canvas one wholesale.
        let err = ThemeConfig::from_yaml_str(DOCUMENT)
            .unwrap()
            .apply(&context)
            .unwrap_err();

        assert!(matches!(err, ConfigError::Theme(ThemeError::Token { .. })));
        assert_eq!(context.token_version(), 0);
        assert_eq!(context.cached_len(), 1);
        assert_eq!(context.tokens().color("brand").unwrap(), &Value::from("#008EE2"));
        assert!(!context
            .list_variants(checkbox_facade::ID)
            .unwrap()
            .contains("brand-blue"));
        for component in context.components() {
            context.resolve(&component, None).unwrap();
        }
    }

    #[test]
    fn test_theme_config_apply_bad_variant_keeps_tokens() {
        let context = ThemeContext::canvas().unwrap();
        let mut variants = IndexMap::new();
        variants.insert(
            "brand-blue".to_string(),
            ThemeVars::new().set("checkedBackground", "#0a84ff"),
        );
        variants.insert("broken".to_string(), ThemeVars::new().set("glow", "#fff"));
        let config = ThemeConfig {
            tokens: Some((*canvas_a11y_tokens()).clone()),
            variants: IndexMap::from([(checkbox_facade::ID.to_string(), variants)]),
        };

        let err = config.apply(&context).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Theme(ThemeError::UnknownVariable { ref variable, .. })
                if variable == "glow"
        ));
        assert_eq!(context.token_version(), 0);
        assert_eq!(context.tokens().color("brand").unwrap(), &Value::from("#008EE2"));
        let registered = context.list_variants(checkbox_facade::ID).unwrap();
        assert!(!registered.contains("brand-blue"));
        assert!(!registered.contains("broken"));
    }

    #[test]
    fn test_theme_config_apply_full_tokens() {
        let context = ThemeContext::canvas().unwrap();
        let config = ThemeConfig {
            tokens: Some((*canvas_a11y_tokens()).clone()),
            variants: IndexMap::new(),
        };
        config.apply(&context).unwrap();

        assert_eq!(context.token_version(), 1);
        assert_eq!(context.tokens().color("brand").unwrap(), &Value::from("#0770A3"));
    }

    #[test]
    fn test_theme_config_apply_variants_only() {
        let context = ThemeContext::canvas().unwrap();
        let config = ThemeConfig::from_yaml_str(
            "variants:\n  checkbox-facade:\n    brand-blue:\n      checkedBackground: '#0a84ff'\n",
        )
        .unwrap();
        config.apply(&context).unwrap();

        let resolved = context.resolve(checkbox_facade::ID, Some("brand-blue")).unwrap();
        assert_eq!(resolved.get("checkedBackground"), Some(&Value::from("#0a84ff")));
        assert_eq!(context.token_version(), 0);
    }

    #[test]
    fn test_theme_config_apply_rejects_unknown_variable() {
        let context = ThemeContext::canvas().unwrap();
        let config = ThemeConfig::from_yaml_str(
            "variants:\n  checkbox-facade:\n    broken:\n      glow: '#fff'\n",
        )
        .unwrap();

        let err = config.apply(&context).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Theme(ThemeError::UnknownVariable { .. })
        ));
        assert!(err.source().is_some());
        assert!(!context
            .list_variants(checkbox_facade::ID)
            .unwrap()
            .contains("broken"));
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let result = ThemeConfig::from_path("theme.toml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_from_path_missing_file() {
        let result = DesignTokens::from_path("/nonexistent/tokens.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
