//! Theme for the visual box drawn in place of a native checkbox.

use crate::error::TokenError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

pub const ID: &str = "checkbox-facade";

pub fn generate(tokens: &DesignTokens) -> Result<ThemeVars, TokenError> {
    Ok(ThemeVars::new()
        .set("color", tokens.color("white")?)
        .set("borderWidth", tokens.border("widthSmall")?)
        .set("borderColor", tokens.color("ash")?)
        .set("borderRadius", tokens.border("radiusMedium")?)
        .set("background", tokens.color("white")?)
        .set("marginRight", tokens.spacing("xSmall")?)
        .set("padding", tokens.spacing("xxxSmall")?)
        .set("checkedBackground", tokens.color("licorice")?)
        .set("checkedBorderColor", tokens.color("licorice")?)
        .set("hoverBorderColor", tokens.color("licorice")?)
        .set("focusBorderColor", tokens.color("brand")?)
        .set("labelColor", tokens.color("licorice")?)
        .set("checkedLabelColor", tokens.color("licorice")?)
        .set("labelFontFamily", tokens.typography("fontFamily")?)
        .set("labelFontWeight", tokens.typography("fontWeightNormal")?)
        .set("labelLineHeight", tokens.typography("lineHeight")?)
        .set("facadeSizeSmall", "1rem")
        .set("facadeSizeMedium", "1.25rem")
        .set("facadeSizeLarge", "1.75rem")
        .set("labelFontSizeSmall", tokens.typography("fontSizeSmall")?)
        .set("labelFontSizeMedium", tokens.typography("fontSizeMedium")?)
        .set("labelFontSizeLarge", tokens.typography("fontSizeLarge")?))
}

/// Brighter checked state with rounder corners.
pub fn modern() -> ThemeVars {
    ThemeVars::new()
        .set("checkedBackground", "#0a84ff")
        .set("checkedBorderColor", "#0a84ff")
        .set("borderRadius", "0.375rem")
}

/// Darker accents so the check mark and border reach 4.5:1.
pub fn canvas_a11y() -> ThemeVars {
    ThemeVars::new()
        .set("checkedBackground", "#0770A3")
        .set("checkedBorderColor", "#0770A3")
        .set("borderColor", "#556572")
        .set("focusBorderColor", "#0770A3")
}
