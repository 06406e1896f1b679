//! The theme context: tokens, registry and cache in one place.

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::components::register_builtin;
use crate::error::ThemeError;
use crate::theme::{resolve_theme, ComponentTheme, GeneratorFn, ThemeCache, ThemeRegistry};
use crate::tokens::{canvas_tokens, DesignTokens};
use crate::vars::ThemeVars;

/// Resolves component themes against a set of design tokens.
///
/// A context is built once at startup and shared by reference (it is
/// `Send + Sync`). Components register their generators, applications add
/// variants, and renderers call [`resolve`](Self::resolve).
///
/// # Example
///
/// ```rust
/// use themeable::{DesignTokens, ThemeContext, ThemeError, ThemeVars};
///
/// let themes = ThemeContext::new(DesignTokens::new());
/// themes
///     .register_component("checkbox", |_| {
///         Ok(ThemeVars::new()
///             .set("color", "#000")
///             .set("checkedBackground", "#fff"))
///     })
///     .unwrap();
/// themes
///     .register_variant(
///         "checkbox",
///         "modern",
///         ThemeVars::new().set("checkedBackground", "#0a84ff"),
///     )
///     .unwrap();
///
/// let modern = themes.resolve("checkbox", Some("modern")).unwrap();
/// assert_eq!(
///     *modern,
///     ThemeVars::new()
///         .set("color", "#000")
///         .set("checkedBackground", "#0a84ff"),
/// );
///
/// assert!(matches!(
///     themes.resolve("checkbox", Some("nonexistent")),
///     Err(ThemeError::UnknownVariant { .. })
/// ));
/// ```
#[derive(Debug)]
pub struct ThemeContext {
    tokens: RwLock<Arc<DesignTokens>>,
    registry: ThemeRegistry,
    cache: ThemeCache,
}

impl ThemeContext {
    /// Creates a context with no registered components.
    pub fn new(tokens: impl Into<Arc<DesignTokens>>) -> Self {
        Self {
            tokens: RwLock::new(tokens.into()),
            registry: ThemeRegistry::new(),
            cache: ThemeCache::new(),
        }
    }

    /// Creates a context over the canvas tokens with every built-in
    /// component and variant registered.
    pub fn canvas() -> Result<Self, ThemeError> {
        let context = Self::new(canvas_tokens());
        register_builtin(&context)?;
        Ok(context)
    }

    /// The current design tokens.
    pub fn tokens(&self) -> Arc<DesignTokens> {
        Arc::clone(&self.tokens.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// The version of the current design tokens; starts at 0.
    pub fn token_version(&self) -> u64 {
        self.cache.token_version()
    }

    /// Registers a component's generator.
    ///
    /// Registering the same generator twice under one identity is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateComponent`] if the identity is taken by a
    /// different generator.
    pub fn register_component(
        &self,
        component: &str,
        generator: GeneratorFn,
    ) -> Result<(), ThemeError> {
        self.register(ComponentTheme::new(component, generator))
    }

    /// Registers a prebuilt [`ComponentTheme`].
    pub fn register(&self, theme: ComponentTheme) -> Result<(), ThemeError> {
        self.registry.register_component(theme).map(|_| ())
    }

    /// Registers (or replaces) a named variant for a component.
    ///
    /// Overrides are checked against the component's default variables under
    /// the current tokens before anything is stored. Replacing a variant drops
    /// its cached theme.
    ///
    /// # Errors
    ///
    /// [`ThemeError::UnknownComponent`], [`ThemeError::UnknownVariable`],
    /// [`ThemeError::ReservedVariant`] or [`ThemeError::Token`].
    pub fn register_variant(
        &self,
        component: &str,
        variant: &str,
        overrides: ThemeVars,
    ) -> Result<(), ThemeError> {
        let tokens = self.tokens();
        let previous = self
            .registry
            .register_variant(component, variant, overrides, &tokens)?;
        if previous.is_some() {
            self.cache.invalidate(component, Some(variant));
        }
        Ok(())
    }

    /// Checks a variant against the registry under `tokens` without
    /// registering it.
    pub(crate) fn check_variant(
        &self,
        component: &str,
        variant: &str,
        overrides: &ThemeVars,
        tokens: &DesignTokens,
    ) -> Result<(), ThemeError> {
        self.registry
            .check_variant(component, variant, overrides, tokens)
    }

    /// Checks that every registered generator succeeds under `tokens`.
    pub(crate) fn check_tokens(&self, tokens: &DesignTokens) -> Result<(), ThemeError> {
        self.registry.check_tokens(tokens)
    }

    /// Names of a component's registered variants, sorted.
    pub fn list_variants(&self, component: &str) -> Result<BTreeSet<String>, ThemeError> {
        self.registry.list_variants(component)
    }

    /// Every registered component identity, sorted.
    pub fn components(&self) -> Vec<String> {
        self.registry.components()
    }

    /// Resolves a component theme, using the cache.
    ///
    /// `None` and `Some("default")` both select the generator's defaults.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::UnknownComponent`] if no generator is registered
    /// - [`ThemeError::UnknownVariant`] if the variant is not registered
    /// - [`ThemeError::UnknownVariable`] if the variant no longer fits the
    ///   defaults produced by the current tokens
    /// - [`ThemeError::Token`] if the generator reads a missing token
    pub fn resolve(
        &self,
        component: &str,
        variant: Option<&str>,
    ) -> Result<Arc<ThemeVars>, ThemeError> {
        self.cache.get_or_try_insert_with(component, variant, || {
            let tokens = self.tokens();
            resolve_theme(&self.registry, &tokens, component, variant)
        })
    }

    /// Resolves a component theme without reading or filling the cache.
    pub fn generate(
        &self,
        component: &str,
        variant: Option<&str>,
    ) -> Result<ThemeVars, ThemeError> {
        let tokens = self.tokens();
        resolve_theme(&self.registry, &tokens, component, variant)
    }

    /// Swaps in new design tokens and invalidates every cached theme.
    ///
    /// Returns the new token version.
    pub fn replace_tokens(&self, tokens: impl Into<Arc<DesignTokens>>) -> u64 {
        *self.tokens.write().unwrap_or_else(PoisonError::into_inner) = tokens.into();
        let version = self.cache.invalidate_all();
        tracing::debug!(token_version = version, "design tokens replaced");
        version
    }

    /// Drops every cached theme and moves to a new token version.
    pub fn invalidate_all(&self) -> u64 {
        self.cache.invalidate_all()
    }

    /// Number of cached themes.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}
