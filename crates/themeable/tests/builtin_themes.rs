//! Accessibility checks for the built-in component themes.
//!
//! Default looks must reach 3:1 contrast (UI components, large text);
//! `canvas-a11y` variants must reach 4.5:1 (normal text).

use themeable::color::{contrast, Rgba};
use themeable::components::{avatar, checkbox_facade, mask, CANVAS_A11Y, MODERN};
use themeable::{canvas_a11y_tokens, ThemeContext, ThemeVars};

fn color(vars: &ThemeVars, name: &str) -> Rgba {
    vars.get(name)
        .unwrap_or_else(|| panic!("missing variable {}", name))
        .as_color()
        .unwrap_or_else(|e| panic!("{}: {}", name, e))
}

fn ratio(vars: &ThemeVars, a: &str, b: &str) -> f64 {
    contrast(color(vars, a), color(vars, b))
}

#[test]
fn test_builtin_components_registered() {
    let themes = ThemeContext::canvas().unwrap();
    assert_eq!(
        themes.components(),
        vec![avatar::ID, checkbox_facade::ID, mask::ID]
    );
    assert!(themes.list_variants(mask::ID).unwrap().is_empty());
    assert_eq!(
        themes
            .list_variants(checkbox_facade::ID)
            .unwrap()
            .into_iter()
            .collect::<Vec<_>>(),
        vec![CANVAS_A11Y, MODERN]
    );
}

// =============================================================================
// Avatar
// =============================================================================

#[test]
fn test_avatar_default_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    let vars = themes.resolve(avatar::ID, None).unwrap();
    assert!(ratio(&vars, "background", "color") > 3.0);
}

#[test]
fn test_avatar_a11y_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    let vars = themes.resolve(avatar::ID, Some(CANVAS_A11Y)).unwrap();
    assert!(ratio(&vars, "background", "color") > 4.5);
}

// =============================================================================
// CheckboxFacade
// =============================================================================

#[test]
fn test_checkbox_default_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    let vars = themes.resolve(checkbox_facade::ID, None).unwrap();
    assert!(ratio(&vars, "color", "checkedBackground") > 3.0);
}

#[test]
fn test_checkbox_modern_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    let vars = themes.resolve(checkbox_facade::ID, Some(MODERN)).unwrap();
    assert!(ratio(&vars, "color", "checkedBackground") > 3.0);
    assert!(ratio(&vars, "labelColor", "background") > 3.0);
    assert!(ratio(&vars, "checkedLabelColor", "background") > 3.0);
}

#[test]
fn test_checkbox_a11y_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    let vars = themes.resolve(checkbox_facade::ID, Some(CANVAS_A11Y)).unwrap();
    assert!(ratio(&vars, "color", "checkedBackground") > 4.5);
    assert!(ratio(&vars, "borderColor", "background") > 4.5);
}

#[test]
fn test_variants_keep_every_default_variable() {
    let themes = ThemeContext::canvas().unwrap();
    for component in themes.components() {
        let defaults = themes.resolve(&component, None).unwrap();
        for variant in themes.list_variants(&component).unwrap() {
            let resolved = themes.resolve(&component, Some(variant.as_str())).unwrap();
            let expected: Vec<&str> = defaults.names().collect();
            let actual: Vec<&str> = resolved.names().collect();
            assert_eq!(expected, actual, "{} / {}", component, variant);
        }
    }
}

// =============================================================================
// Token sets
// =============================================================================

#[test]
fn test_a11y_tokens_raise_default_contrast() {
    let themes = ThemeContext::canvas().unwrap();
    themes.replace_tokens(canvas_a11y_tokens());

    let vars = themes.resolve(avatar::ID, None).unwrap();
    assert!(ratio(&vars, "background", "color") > 4.5);
    assert_eq!(themes.token_version(), 1);
}
