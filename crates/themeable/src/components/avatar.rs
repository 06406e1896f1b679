//! Theme for user avatars: initials on a plain circle or square.

use crate::error::TokenError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

pub const ID: &str = "avatar";

pub fn generate(tokens: &DesignTokens) -> Result<ThemeVars, TokenError> {
    Ok(ThemeVars::new()
        .set("background", tokens.color("white")?)
        .set("borderWidthSmall", tokens.border("widthSmall")?)
        .set("borderWidthMedium", tokens.border("widthMedium")?)
        .set("borderColor", tokens.color("tiara")?)
        .set("boxShadowColor", "rgba(45, 59, 69, 0.12)")
        .set("boxShadowBlur", "1rem")
        .set("fontFamily", tokens.typography("fontFamily")?)
        .set("fontWeight", tokens.typography("fontWeightBold")?)
        .set("color", tokens.color("brand")?))
}

/// Darker initials for 4.5:1 contrast on the white background.
pub fn canvas_a11y() -> ThemeVars {
    ThemeVars::new().set("color", "#0770A3")
}
