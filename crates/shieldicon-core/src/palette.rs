//! Fill colors of the shield icon.
//!
//! Alpha is part of the design: the panel, eye and highlight are translucent
//! and let the layers below show through.

use peniko::Color;

/// Shield body and pupil (#4A90E2).
pub const SHIELD_BLUE: Color = Color::from_rgba8(74, 144, 226, 255);

/// Inner panel (#6BB6FF at 90% opacity).
pub const PANEL_BLUE: Color = Color::from_rgba8(107, 182, 255, 230);

/// Eye white (95% opacity).
pub const EYE_WHITE: Color = Color::from_rgba8(255, 255, 255, 242);

/// Pupil, same blue as the shield.
pub const PUPIL_BLUE: Color = SHIELD_BLUE;

/// Eye reflection (60% opacity).
pub const HIGHLIGHT_WHITE: Color = Color::from_rgba8(255, 255, 255, 153);

/// Convert a color to straight-alpha RGBA8 channels.
pub fn to_rgba8_array(color: Color) -> [u8; 4] {
    let rgba = color.to_rgba8();
    [rgba.r, rgba.g, rgba.b, rgba.a]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_channels() {
        assert_eq!(to_rgba8_array(SHIELD_BLUE), [74, 144, 226, 255]);
        assert_eq!(to_rgba8_array(PANEL_BLUE), [107, 182, 255, 230]);
        assert_eq!(to_rgba8_array(EYE_WHITE), [255, 255, 255, 242]);
        assert_eq!(to_rgba8_array(HIGHLIGHT_WHITE), [255, 255, 255, 153]);
    }

    #[test]
    fn test_pupil_matches_shield() {
        assert_eq!(to_rgba8_array(PUPIL_BLUE), to_rgba8_array(SHIELD_BLUE));
    }
}
