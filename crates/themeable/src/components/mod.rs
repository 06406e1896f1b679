//! Built-in component themes.
//!
//! Each submodule exposes its component identity (`ID`), its generator and,
//! where it has any, its named variants. [`register_builtin`] wires all of
//! them into a [`ThemeContext`].

pub mod avatar;
pub mod checkbox_facade;
pub mod mask;

use crate::context::ThemeContext;
use crate::error::ThemeError;

/// Variant name of the high-contrast themes.
pub const CANVAS_A11Y: &str = "canvas-a11y";

/// Variant name of the modern checkbox look.
pub const MODERN: &str = "modern";

/// Registers every built-in component and its variants.
///
/// # Errors
///
/// Fails if a built-in identity is already taken by another generator, or if
/// the context's tokens lack a token a built-in generator reads.
pub fn register_builtin(context: &ThemeContext) -> Result<(), ThemeError> {
    context.register_component(mask::ID, mask::generate)?;

    context.register_component(avatar::ID, avatar::generate)?;
    context.register_variant(avatar::ID, CANVAS_A11Y, avatar::canvas_a11y())?;

    context.register_component(checkbox_facade::ID, checkbox_facade::generate)?;
    context.register_variant(checkbox_facade::ID, MODERN, checkbox_facade::modern())?;
    context.register_variant(checkbox_facade::ID, CANVAS_A11Y, checkbox_facade::canvas_a11y())?;

    Ok(())
}
