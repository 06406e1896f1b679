//! Registry of component generators and variant overrides.
//!
//! The registry maps each component identity to its [`ComponentTheme`], and
//! each `(component, variant)` pair to a partial override mapping.
//!
//! # Registration rules
//!
//! - A component may be registered more than once with the *same* generator
//!   (modules initialized twice are harmless). A different generator under an
//!   existing identity is a [`ThemeError::DuplicateComponent`].
//! - A variant can only be registered for a known component, may only
//!   override variables the generator produces, and may not use the reserved
//!   `"default"` name. All checks run before anything is stored.
//! - Registering a variant that already exists replaces it (last write wins).
//!
//! # Thread Safety
//!
//! Tables sit behind a single `RwLock`. Write locks are held only for one
//! insert; generators run with no lock held.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::resolve::{check_overrides, is_default_variant};
use super::{ComponentTheme, GeneratorFn};
use crate::error::ThemeError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

#[derive(Debug)]
struct ComponentEntry {
    theme: ComponentTheme,
    variants: BTreeMap<String, Arc<ThemeVars>>,
}

/// Generators and variant overrides, keyed by component identity.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    components: RwLock<HashMap<String, ComponentEntry>>,
}

impl ThemeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ComponentEntry>> {
        self.components.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ComponentEntry>> {
        self.components.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Registers a component's generator.
    ///
    /// Returns `Ok(false)` when the identical generator was already
    /// registered under this identity, `Ok(true)` when it was newly added.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::DuplicateComponent`] if the identity is taken by a
    /// different generator.
    pub fn register_component(&self, theme: ComponentTheme) -> Result<bool, ThemeError> {
        let mut components = self.write();
        if let Some(existing) = components.get(theme.id()) {
            if existing.theme.same_generator(&theme) {
                return Ok(false);
            }
            return Err(ThemeError::DuplicateComponent {
                component: theme.id().to_string(),
            });
        }

        tracing::debug!(component = theme.id(), "registered component theme");
        components.insert(
            theme.id().to_string(),
            ComponentEntry {
                theme,
                variants: BTreeMap::new(),
            },
        );
        Ok(true)
    }

    /// Registers a variant's override mapping.
    ///
    /// `tokens` is used to run the component's generator so that override
    /// keys can be checked against the default variable set. Returns the
    /// mapping that was replaced, if any.
    ///
    /// # Errors
    ///
    /// - [`ThemeError::ReservedVariant`] if `variant` is `"default"`
    /// - [`ThemeError::UnknownComponent`] if the component is not registered
    /// - [`ThemeError::Token`] if the generator fails under `tokens`
    /// - [`ThemeError::UnknownVariable`] if an override key is not a default variable
    pub fn register_variant(
        &self,
        component: &str,
        variant: &str,
        overrides: ThemeVars,
        tokens: &DesignTokens,
    ) -> Result<Option<Arc<ThemeVars>>, ThemeError> {
        self.check_variant(component, variant, &overrides, tokens)?;

        let mut components = self.write();
        let entry = components
            .get_mut(component)
            .ok_or_else(|| ThemeError::UnknownComponent {
                component: component.to_string(),
            })?;
        let previous = entry
            .variants
            .insert(variant.to_string(), Arc::new(overrides));

        if previous.is_some() {
            tracing::warn!(component, variant, "replaced existing theme variant");
        } else {
            tracing::debug!(component, variant, "registered theme variant");
        }
        Ok(previous)
    }

    /// Runs every check [`register_variant`](Self::register_variant) runs,
    /// without storing anything.
    ///
    /// # Errors
    ///
    /// The same errors as [`register_variant`](Self::register_variant).
    pub fn check_variant(
        &self,
        component: &str,
        variant: &str,
        overrides: &ThemeVars,
        tokens: &DesignTokens,
    ) -> Result<(), ThemeError> {
        if is_default_variant(Some(variant)) {
            return Err(ThemeError::ReservedVariant {
                component: component.to_string(),
            });
        }

        let defaults = self.component(component)?.generate(tokens)?;
        check_overrides(component, variant, &defaults, overrides)
    }

    /// Runs every registered generator against `tokens`, in component order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ThemeError::Token`] raised by a generator.
    pub fn check_tokens(&self, tokens: &DesignTokens) -> Result<(), ThemeError> {
        let mut themes: Vec<ComponentTheme> =
            self.read().values().map(|entry| entry.theme.clone()).collect();
        themes.sort_by(|a, b| a.id().cmp(b.id()));
        for theme in &themes {
            theme.generate(tokens)?;
        }
        Ok(())
    }

    /// Returns the registered theme for a component.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownComponent`] if the component is not registered.
    pub fn component(&self, component: &str) -> Result<ComponentTheme, ThemeError> {
        self.read()
            .get(component)
            .map(|entry| entry.theme.clone())
            .ok_or_else(|| ThemeError::UnknownComponent {
                component: component.to_string(),
            })
    }

    /// Looks up a component's generator together with a variant's overrides.
    ///
    /// For the default variant (`None` or `"default"`) the overrides are `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownComponent`] or [`ThemeError::UnknownVariant`].
    pub fn lookup(
        &self,
        component: &str,
        variant: Option<&str>,
    ) -> Result<(GeneratorFn, Option<Arc<ThemeVars>>), ThemeError> {
        let components = self.read();
        let entry = components
            .get(component)
            .ok_or_else(|| ThemeError::UnknownComponent {
                component: component.to_string(),
            })?;

        let overrides = match variant {
            Some(name) if !is_default_variant(variant) => Some(
                entry
                    .variants
                    .get(name)
                    .cloned()
                    .ok_or_else(|| ThemeError::UnknownVariant {
                        component: component.to_string(),
                        variant: name.to_string(),
                    })?,
            ),
            _ => None,
        };

        Ok((entry.theme.generator(), overrides))
    }

    /// Returns the names of a component's registered variants, sorted.
    ///
    /// The implicit `"default"` variant is not listed.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnknownComponent`] if the component is not registered.
    pub fn list_variants(&self, component: &str) -> Result<BTreeSet<String>, ThemeError> {
        self.read()
            .get(component)
            .map(|entry| entry.variants.keys().cloned().collect())
            .ok_or_else(|| ThemeError::UnknownComponent {
                component: component.to_string(),
            })
    }

    /// Returns every registered component identity, sorted.
    pub fn components(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    /// Returns true if the component is registered.
    pub fn contains(&self, component: &str) -> bool {
        self.read().contains_key(component)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Returns true if no components are registered.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}
