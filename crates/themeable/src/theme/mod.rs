//! Component themes: registration, override resolution and caching.
//!
//! This module provides:
//!
//! - [`ComponentTheme`]: a component identity bound to its variable generator
//! - [`GeneratorFn`]: the generator signature
//! - [`ThemeRegistry`]: generators and variant overrides per component
//! - [`ThemeCache`]: resolved themes memoized per component, variant and token version
//! - [`merge_overrides`] / [`check_overrides`]: the override merge rules
//!
//! Most applications use these through [`ThemeContext`](crate::ThemeContext),
//! which ties them to a token set.

mod cache;
mod registry;
mod resolve;

use std::fmt;

use crate::error::{ThemeError, TokenError};
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

pub use cache::ThemeCache;
pub use registry::ThemeRegistry;
pub use resolve::{check_overrides, is_default_variant, merge_overrides};
pub(crate) use resolve::resolve_theme;

/// Produces a component's default variables from the design tokens.
///
/// Generators are plain function pointers, so they cannot capture state:
/// given equal tokens they return equal variables. Returning an error means
/// the generator read a token the token set does not define.
pub type GeneratorFn = fn(&DesignTokens) -> Result<ThemeVars, TokenError>;

/// A component identity and its variable generator.
///
/// # Example
///
/// ```rust
/// use themeable::{ComponentTheme, DesignTokens, ThemeVars};
///
/// let checkbox = ComponentTheme::new("checkbox", |_tokens| {
///     Ok(ThemeVars::new()
///         .set("color", "#000")
///         .set("checkedBackground", "#fff"))
/// });
///
/// let vars = checkbox.generate(&DesignTokens::new()).unwrap();
/// assert_eq!(vars.len(), 2);
/// ```
#[derive(Clone)]
pub struct ComponentTheme {
    id: String,
    generator: GeneratorFn,
}

impl ComponentTheme {
    /// Binds a component identity to its generator.
    pub fn new(id: impl Into<String>, generator: GeneratorFn) -> Self {
        Self {
            id: id.into(),
            generator,
        }
    }

    /// The component identity.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The generator function.
    pub fn generator(&self) -> GeneratorFn {
        self.generator
    }

    /// Runs the generator, attributing token errors to this component.
    pub fn generate(&self, tokens: &DesignTokens) -> Result<ThemeVars, ThemeError> {
        (self.generator)(tokens).map_err(|source| ThemeError::Token {
            component: self.id.clone(),
            source,
        })
    }

    /// Returns true if both themes use the same generator function.
    ///
    /// Function pointers are compared by address. Rust does not promise one
    /// address per function: a generator instantiated in several codegen
    /// units may compare unequal to itself, and identical functions may be
    /// merged into one. Registering the same path twice from one crate is
    /// the supported idempotent case.
    pub fn same_generator(&self, other: &ComponentTheme) -> bool {
        self.generator as usize == other.generator as usize
    }
}

impl fmt::Debug for ComponentTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentTheme")
            .field("id", &self.id)
            .field("generator", &format_args!("{:#x}", self.generator as usize))
            .finish()
    }
}
