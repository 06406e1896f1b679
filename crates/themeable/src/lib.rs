//! # Themeable - component theme resolution
//!
//! `themeable` computes, for a UI component and an optional named variant,
//! the final mapping of style variables to values. It knows nothing about
//! markup or CSS; a rendering layer asks for a resolved theme and applies the
//! variables however it likes.
//!
//! ## Concepts
//!
//! - **Design tokens** ([`DesignTokens`]): named primitive values shared by
//!   all components (colors, spacing, borders, typography, stacking).
//! - **Generators** ([`GeneratorFn`]): pure functions from tokens to a
//!   component's complete default variables.
//! - **Variants**: named partial overrides of those defaults, e.g. a
//!   high-contrast `canvas-a11y` look.
//! - **Resolved theme** ([`ThemeVars`]): defaults with a variant's overrides
//!   applied. Always has exactly the default variable set.
//!
//! ## Quick Start
//!
//! ```rust
//! use themeable::{DesignTokens, TokenCategory, ThemeContext, ThemeVars};
//!
//! let tokens = DesignTokens::new()
//!     .with(TokenCategory::Colors, "brand", "#008EE2")
//!     .with(TokenCategory::Colors, "white", "#FFFFFF");
//!
//! let themes = ThemeContext::new(tokens);
//! themes
//!     .register_component("button", |tokens| {
//!         Ok(ThemeVars::new()
//!             .set("background", tokens.color("brand")?)
//!             .set("color", tokens.color("white")?))
//!     })
//!     .unwrap();
//! themes
//!     .register_variant("button", "inverse", ThemeVars::new().set("background", "#FFFFFF"))
//!     .unwrap();
//!
//! let inverse = themes.resolve("button", Some("inverse")).unwrap();
//! assert_eq!(inverse.get("background").unwrap().to_string(), "#FFFFFF");
//! assert_eq!(inverse.get("color").unwrap().to_string(), "#FFFFFF");
//! ```
//!
//! ## Built-in themes
//!
//! [`ThemeContext::canvas`] starts from the built-in canvas tokens with the
//! [`components`] registered, including their `canvas-a11y` variants:
//!
//! ```rust
//! use themeable::color::contrast;
//! use themeable::components::{avatar, CANVAS_A11Y};
//! use themeable::ThemeContext;
//!
//! let themes = ThemeContext::canvas().unwrap();
//! let vars = themes.resolve(avatar::ID, Some(CANVAS_A11Y)).unwrap();
//! let ratio = contrast(
//!     vars.get("background").unwrap().as_color().unwrap(),
//!     vars.get("color").unwrap().as_color().unwrap(),
//! );
//! assert!(ratio > 4.5);
//! ```
//!
//! ## Errors
//!
//! Registration and resolution return [`ThemeError`]. Unknown variant names
//! are always errors; there is no silent fallback to the defaults. Failed
//! calls leave the registry and cache as they were.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (registration at `debug`, cache hits
//! and misses at `trace`, replaced variants at `warn`) and installs no
//! subscriber of its own.

pub mod color;
pub mod components;
mod config;
mod context;
mod error;
pub mod theme;
pub mod tokens;
mod value;
mod vars;

/// Variant name that selects a component's generated defaults.
pub const DEFAULT_VARIANT: &str = "default";

pub use config::{ConfigError, ThemeConfig};
pub use context::ThemeContext;
pub use error::{ThemeError, TokenError};
pub use theme::{
    check_overrides, merge_overrides, ComponentTheme, GeneratorFn, ThemeCache, ThemeRegistry,
};
pub use tokens::{canvas_a11y_tokens, canvas_tokens, DesignTokens, TokenCategory};
pub use value::{Dimension, Value};
pub use vars::ThemeVars;
