//! Override resolution.
//!
//! Resolving a theme is a shallow merge over the default variable set:
//!
//! 1. The component's generator runs against the current tokens.
//! 2. For the default variant (`None` or `"default"`) the result is returned as is.
//! 3. Otherwise every default variable takes the variant's value if the
//!    variant sets it, and keeps its default if not.
//!
//! Overrides can never add variables. A key the defaults lack is a
//! [`ThemeError::UnknownVariable`]; this keeps every resolved theme complete
//! with respect to the component's declared variables.

use super::registry::ThemeRegistry;
use crate::error::ThemeError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;
use crate::DEFAULT_VARIANT;

/// Returns true for the implicit default variant.
pub fn is_default_variant(variant: Option<&str>) -> bool {
    match variant {
        None => true,
        Some(name) => name == DEFAULT_VARIANT,
    }
}

/// Checks that every override key is one of the default variables.
///
/// # Errors
///
/// Returns [`ThemeError::UnknownVariable`] naming the first offending key.
pub fn check_overrides(
    component: &str,
    variant: &str,
    defaults: &ThemeVars,
    overrides: &ThemeVars,
) -> Result<(), ThemeError> {
    match overrides.names().find(|name| !defaults.contains(name)) {
        Some(variable) => Err(ThemeError::UnknownVariable {
            component: component.to_string(),
            variant: variant.to_string(),
            variable: variable.to_string(),
        }),
        None => Ok(()),
    }
}

/// Merges a variant's overrides into the default variables.
///
/// The result has exactly the keys of `defaults`, in the same order.
///
/// # Example
///
/// ```rust
/// use themeable::{merge_overrides, ThemeVars};
///
/// let defaults = ThemeVars::new()
///     .set("color", "#000")
///     .set("checkedBackground", "#fff");
/// let modern = ThemeVars::new().set("checkedBackground", "#0a84ff");
///
/// let resolved = merge_overrides("checkbox", "modern", defaults, &modern).unwrap();
/// assert_eq!(
///     resolved,
///     ThemeVars::new()
///         .set("color", "#000")
///         .set("checkedBackground", "#0a84ff"),
/// );
/// ```
///
/// # Errors
///
/// Returns [`ThemeError::UnknownVariable`] if `overrides` names a variable
/// `defaults` does not have.
pub fn merge_overrides(
    component: &str,
    variant: &str,
    defaults: ThemeVars,
    overrides: &ThemeVars,
) -> Result<ThemeVars, ThemeError> {
    check_overrides(component, variant, &defaults, overrides)?;

    Ok(defaults
        .iter()
        .map(|(name, default)| (name, overrides.get(name).unwrap_or(default)))
        .collect())
}

/// Resolves a component theme against `tokens`, bypassing any cache.
pub(crate) fn resolve_theme(
    registry: &ThemeRegistry,
    tokens: &DesignTokens,
    component: &str,
    variant: Option<&str>,
) -> Result<ThemeVars, ThemeError> {
    let (generator, overrides) = registry.lookup(component, variant)?;
    let defaults = generator(tokens).map_err(|source| ThemeError::Token {
        component: component.to_string(),
        source,
    })?;

    match (variant, overrides) {
        (Some(name), Some(overrides)) => merge_overrides(component, name, defaults, &overrides),
        _ => Ok(defaults),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TokenError;
    use crate::theme::ComponentTheme;
    use crate::tokens::TokenCategory;

    fn defaults() -> ThemeVars {
        ThemeVars::new()
            .set("color", "#000")
            .set("checkedBackground", "#fff")
            .set("borderWidth", "0.0625rem")
    }

    #[test]
    fn test_is_default_variant() {
        assert!(is_default_variant(None));
        assert!(is_default_variant(Some("default")));
        assert!(!is_default_variant(Some("modern")));
        assert!(!is_default_variant(Some("Default")));
    }

    #[test]
    fn test_merge_partial_override() {
        let overrides = ThemeVars::new().set("checkedBackground", "#0a84ff");
        let merged = merge_overrides("checkbox", "modern", defaults(), &overrides).unwrap();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged.get("color").unwrap().to_string(), "#000");
        assert_eq!(merged.get("checkedBackground").unwrap().to_string(), "#0a84ff");
    }

    #[test]
    fn test_merge_keeps_default_order() {
        let overrides = ThemeVars::new()
            .set("borderWidth", "0.125rem")
            .set("color", "#111");
        let merged = merge_overrides("checkbox", "modern", defaults(), &overrides).unwrap();
        let names: Vec<&str> = merged.names().collect();
        assert_eq!(names, vec!["color", "checkedBackground", "borderWidth"]);
    }

    #[test]
    fn test_merge_empty_override_is_identity() {
        let merged = merge_overrides("checkbox", "modern", defaults(), &ThemeVars::new()).unwrap();
        assert_eq!(merged, defaults());
    }

    #[test]
    fn test_merge_rejects_new_variable() {
        let overrides = ThemeVars::new().set("glow", "#fff");
        let err = merge_overrides("checkbox", "modern", defaults(), &overrides).unwrap_err();
        assert!(matches!(
            err,
            ThemeError::UnknownVariable { ref variable, .. } if variable == "glow"
        ));
    }

    fn brand_link(tokens: &DesignTokens) -> Result<ThemeVars, TokenError> {
        Ok(ThemeVars::new()
            .set("color", tokens.color("brand")?)
            .set("hoverColor", tokens.color("brand")?))
    }

    #[test]
    fn test_resolve_theme_default_and_variant() {
        let registry = ThemeRegistry::new();
        registry
            .register_component(ComponentTheme::new("link", brand_link))
            .unwrap();
        let tokens = DesignTokens::new().with(TokenCategory::Colors, "brand", "#008EE2");
        registry
            .register_variant(
                "link",
                "inverse",
                ThemeVars::new().set("color", "#FFFFFF"),
                &tokens,
            )
            .unwrap();

        let default = resolve_theme(&registry, &tokens, "link", None).unwrap();
        assert_eq!(default.get("color").unwrap().to_string(), "#008EE2");

        let inverse = resolve_theme(&registry, &tokens, "link", Some("inverse")).unwrap();
        assert_eq!(inverse.get("color").unwrap().to_string(), "#FFFFFF");
        assert_eq!(inverse.get("hoverColor").unwrap().to_string(), "#008EE2");
    }

    #[test]
    fn test_resolve_theme_missing_token() {
        let registry = ThemeRegistry::new();
        registry
            .register_component(ComponentTheme::new("link", brand_link))
            .unwrap();
        let result = resolve_theme(&registry, &DesignTokens::new(), "link", None);
        assert!(matches!(result, Err(ThemeError::Token { .. })));
    }
}
