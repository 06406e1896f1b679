//! Built-in "canvas" token sets.

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::{DesignTokens, TokenCategory};

static CANVAS: Lazy<Arc<DesignTokens>> = Lazy::new(|| Arc::new(build_canvas()));

static CANVAS_A11Y: Lazy<Arc<DesignTokens>> = Lazy::new(|| Arc::new(build_canvas_a11y()));

/// The default token set.
pub fn canvas_tokens() -> Arc<DesignTokens> {
    Arc::clone(&CANVAS)
}

/// The high-contrast token set.
///
/// Same token names as [`canvas_tokens`], with darker accent colors so that
/// text on white meets a 4.5:1 contrast ratio.
pub fn canvas_a11y_tokens() -> Arc<DesignTokens> {
    Arc::clone(&CANVAS_A11Y)
}

fn build_canvas() -> DesignTokens {
    use TokenCategory::*;

    DesignTokens::new()
        .with(Colors, "brand", "#008EE2")
        .with(Colors, "electric", "#008EE2")
        .with(Colors, "shamrock", "#00AC18")
        .with(Colors, "barney", "#BF32A4")
        .with(Colors, "crimson", "#EE0612")
        .with(Colors, "fire", "#FC5E13")
        .with(Colors, "licorice", "#2D3B45")
        .with(Colors, "oxford", "#394B58")
        .with(Colors, "ash", "#8B969E")
        .with(Colors, "slate", "#73818C")
        .with(Colors, "tiara", "#C7CDD1")
        .with(Colors, "porcelain", "#F5F5F5")
        .with(Colors, "white", "#FFFFFF")
        .with(Spacing, "xxxSmall", "0.125rem")
        .with(Spacing, "xxSmall", "0.375rem")
        .with(Spacing, "xSmall", "0.5rem")
        .with(Spacing, "small", "0.75rem")
        .with(Spacing, "medium", "1.5rem")
        .with(Spacing, "large", "2.25rem")
        .with(Spacing, "xLarge", "3rem")
        .with(Spacing, "xxLarge", "3.75rem")
        .with(Borders, "radiusSmall", "0.125rem")
        .with(Borders, "radiusMedium", "0.25rem")
        .with(Borders, "radiusLarge", "0.5rem")
        .with(Borders, "widthSmall", "0.0625rem")
        .with(Borders, "widthMedium", "0.125rem")
        .with(Borders, "widthLarge", "0.25rem")
        .with(Borders, "style", "solid")
        .with(
            Typography,
            "fontFamily",
            "LatoWeb, Lato, \"Helvetica Neue\", Helvetica, Arial, sans-serif",
        )
        .with(Typography, "fontSizeXSmall", "0.75rem")
        .with(Typography, "fontSizeSmall", "0.875rem")
        .with(Typography, "fontSizeMedium", "1rem")
        .with(Typography, "fontSizeLarge", "1.375rem")
        .with(Typography, "fontWeightNormal", 400)
        .with(Typography, "fontWeightBold", 700)
        .with(Typography, "lineHeight", 1.5)
        .with(Stacking, "topmost", 9999)
        .with(Stacking, "above", 1)
        .with(Stacking, "below", -1)
        .with(Stacking, "deepest", -9999)
}

fn build_canvas_a11y() -> DesignTokens {
    use TokenCategory::*;

    build_canvas()
        .with(Colors, "brand", "#0770A3")
        .with(Colors, "electric", "#0770A3")
        .with(Colors, "shamrock", "#127A1B")
        .with(Colors, "barney", "#B8309E")
        .with(Colors, "crimson", "#D01A19")
        .with(Colors, "fire", "#C23C0D")
        .with(Colors, "ash", "#556572")
        .with(Colors, "slate", "#556572")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{contrast, Rgba};

    #[test]
    fn test_canvas_tokens_are_shared() {
        assert!(Arc::ptr_eq(&canvas_tokens(), &canvas_tokens()));
    }

    #[test]
    fn test_a11y_defines_the_same_names() {
        let canvas = canvas_tokens();
        let a11y = canvas_a11y_tokens();
        for category in TokenCategory::ALL {
            let a: Vec<&String> = canvas.category(category).keys().collect();
            let b: Vec<&String> = a11y.category(category).keys().collect();
            assert_eq!(a, b, "category {} differs", category);
        }
    }

    #[test]
    fn test_a11y_accents_meet_text_contrast_on_white() {
        let tokens = canvas_a11y_tokens();
        let white = Rgba::rgb(255, 255, 255);
        for name in ["brand", "shamrock", "crimson", "fire", "ash", "slate"] {
            let color = tokens.color(name).unwrap().as_color().unwrap();
            assert!(
                contrast(color, white) >= 4.5,
                "{} ({}) fails 4.5:1 on white",
                name,
                color
            );
        }
    }
}
