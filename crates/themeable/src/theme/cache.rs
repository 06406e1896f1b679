//! Memoization of resolved themes.
//!
//! Entries are keyed by component and variant and belong to the current
//! token version. [`ThemeCache::invalidate_all`] bumps the version and drops
//! every entry at once, so no entry computed under old tokens survives.
//!
//! Misses are computed with no lock held. Two threads missing on the same key
//! may both run the generator; the first result stored wins and both callers
//! get that `Arc`. A computation that overlaps any invalidation is returned to
//! its caller but never stored.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::resolve::is_default_variant;
use crate::vars::ThemeVars;
use crate::DEFAULT_VARIANT;

#[derive(Debug, Default)]
struct CacheState {
    /// Bumped when the design tokens change.
    token_version: u64,
    /// Bumped on every invalidation, including single entries.
    epoch: u64,
    entries: HashMap<String, HashMap<String, Arc<ThemeVars>>>,
}

/// Resolved themes for the current token version.
#[derive(Debug, Default)]
pub struct ThemeCache {
    state: RwLock<CacheState>,
}

fn variant_key(variant: Option<&str>) -> &str {
    match variant {
        Some(name) if !is_default_variant(variant) => name,
        _ => DEFAULT_VARIANT,
    }
}

impl ThemeCache {
    /// Creates an empty cache at token version 0.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The current token version.
    pub fn token_version(&self) -> u64 {
        self.read().token_version
    }

    /// Returns the cached theme, if any.
    pub fn get(&self, component: &str, variant: Option<&str>) -> Option<Arc<ThemeVars>> {
        self.read()
            .entries
            .get(component)?
            .get(variant_key(variant))
            .cloned()
    }

    /// Returns the cached theme, or computes and stores it.
    ///
    /// Errors from `compute` are returned as is and nothing is stored.
    pub fn get_or_try_insert_with<E, F>(
        &self,
        component: &str,
        variant: Option<&str>,
        compute: F,
    ) -> Result<Arc<ThemeVars>, E>
    where
        F: FnOnce() -> Result<ThemeVars, E>,
    {
        let key = variant_key(variant);
        let epoch = {
            let state = self.read();
            if let Some(hit) = state.entries.get(component).and_then(|v| v.get(key)) {
                tracing::trace!(component, variant = key, "theme cache hit");
                return Ok(Arc::clone(hit));
            }
            state.epoch
        };

        tracing::trace!(component, variant = key, "theme cache miss");
        let computed = Arc::new(compute()?);

        let mut state = self.write();
        if state.epoch != epoch {
            return Ok(computed);
        }
        let stored = state
            .entries
            .entry(component.to_string())
            .or_default()
            .entry(key.to_string())
            .or_insert(computed);
        Ok(Arc::clone(stored))
    }

    /// Drops one entry. Returns true if it was present.
    pub fn invalidate(&self, component: &str, variant: Option<&str>) -> bool {
        let mut state = self.write();
        state.epoch += 1;
        let key = variant_key(variant);
        match state.entries.get_mut(component) {
            Some(variants) => variants.remove(key).is_some(),
            None => false,
        }
    }

    /// Drops every entry and moves to a new token version, which is returned.
    pub fn invalidate_all(&self) -> u64 {
        let mut state = self.write();
        state.epoch += 1;
        state.token_version += 1;
        state.entries.clear();
        tracing::debug!(token_version = state.token_version, "theme cache invalidated");
        state.token_version
    }

    /// Number of cached themes.
    pub fn len(&self) -> usize {
        self.read().entries.values().map(HashMap::len).sum()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
