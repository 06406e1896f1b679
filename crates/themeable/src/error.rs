//! Error types for theme registration and resolution.
//!
//! Every error here describes a configuration mistake, not a transient
//! failure: a component that was never registered, a variant name that does
//! not exist, or an override that names a variable the component does not
//! have. None of them are retried, and a failed call never changes the state
//! of the registry or the cache.

use std::fmt;

use crate::tokens::TokenCategory;

/// Error returned when a generator reads a token that is not defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token does not exist in the given category.
    MissingToken {
        category: TokenCategory,
        name: String,
    },
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::MissingToken { category, name } => {
                write!(f, "design token '{}.{}' is not defined", category, name)
            }
        }
    }
}

impl std::error::Error for TokenError {}

/// Error type for theme registry and resolution operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// No generator is registered for the component.
    UnknownComponent { component: String },

    /// The component has no override mapping under this variant name.
    UnknownVariant { component: String, variant: String },

    /// An override names a variable that the component's generator does not produce.
    UnknownVariable {
        component: String,
        variant: String,
        variable: String,
    },

    /// The component is already registered with a different generator.
    DuplicateComponent { component: String },

    /// The variant name is the reserved `"default"` sentinel.
    ReservedVariant { component: String },

    /// The generator could not read a design token.
    Token {
        component: String,
        source: TokenError,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::UnknownComponent { component } => {
                write!(f, "no theme registered for component '{}'", component)
            }
            ThemeError::UnknownVariant { component, variant } => {
                write!(
                    f,
                    "component '{}' has no theme variant named '{}'",
                    component, variant
                )
            }
            ThemeError::UnknownVariable {
                component,
                variant,
                variable,
            } => {
                write!(
                    f,
                    "variant '{}' of component '{}' overrides unknown variable '{}'",
                    variant, component, variable
                )
            }
            ThemeError::DuplicateComponent { component } => {
                write!(
                    f,
                    "component '{}' is already registered with a different generator",
                    component
                )
            }
            ThemeError::ReservedVariant { component } => {
                write!(
                    f,
                    "cannot register variant '{}' for component '{}': the name is reserved",
                    crate::DEFAULT_VARIANT,
                    component
                )
            }
            ThemeError::Token { component, source } => {
                write!(f, "theme for component '{}': {}", component, source)
            }
        }
    }
}

impl std::error::Error for ThemeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ThemeError::Token { source, .. } => Some(source),
            _ => None,
        }
    }
}
