//! Theme for the translucent overlay mask.

use crate::error::TokenError;
use crate::tokens::DesignTokens;
use crate::vars::ThemeVars;

pub const ID: &str = "mask";

pub fn generate(tokens: &DesignTokens) -> Result<ThemeVars, TokenError> {
    Ok(ThemeVars::new()
        .set("zIndex", tokens.stacking("topmost")?)
        .set("background", "rgba(255, 255, 255, 0.75)")
        .set("borderColor", "transparent")
        .set("focusBorderColor", tokens.color("brand")?)
        .set("borderRadius", tokens.border("radiusMedium")?)
        .set("borderWidth", tokens.border("widthSmall")?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::canvas_tokens;
    use crate::value::{Dimension, Value};

    #[test]
    fn test_mask_reads_tokens() {
        let vars = generate(&canvas_tokens()).unwrap();
        assert_eq!(vars.get("zIndex"), Some(&Value::Number(9999.0)));
        assert_eq!(
            vars.get("borderWidth"),
            Some(&Value::Dimension(Dimension::new(0.0625, "rem")))
        );
        assert_eq!(vars.len(), 6);
    }

    #[test]
    fn test_mask_background_is_translucent() {
        let vars = generate(&canvas_tokens()).unwrap();
        let background = vars.get("background").unwrap().as_color().unwrap();
        assert_eq!(background.a, 0.75);
    }
}
