use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use crate::prelude::*;

/// An sRGB color with alpha, each channel `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[display(fmt = "#{red:02x}{green:02x}{blue:02x}{alpha:02x}")]
pub struct Rgba {
    pub red:   u8,
    pub green: u8,
    pub blue:  u8,
    pub alpha: u8,
}

impl Rgba {
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const WHITE: Self = Self::opaque(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red, green, blue, u8::MAX)
    }
}

/// How the host should style wheel labels.
///
/// Renderers read this from the picker when they draw a row; `None` colors mean
/// "use the platform default".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelAppearance {
    pub font_name:        String,
    pub font_size:        f64,
    pub text_color:       Option<Rgba>,
    pub background_color: Option<Rgba>,
}

impl Default for WheelAppearance {
    fn default() -> Self {
        Self {
            font_name:        DEFAULT_FONT_NAME.to_owned(),
            font_size:        DEFAULT_FONT_SIZE,
            text_color:       None,
            background_color: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_appearance() {
        let appearance = WheelAppearance::default();
        assert_eq!(appearance.font_name, "Helvetica");
        assert!((appearance.font_size - 20.0).abs() < f64::EPSILON);
        assert_eq!(appearance.text_color, None);
    }

    #[test]
    fn test_color_display() {
        assert_eq!(Rgba::opaque(255, 0, 128).to_string(), "#ff0080ff");
        assert_eq!(Rgba::new(1, 2, 3, 0).to_string(), "#01020300");
    }

    #[test]
    fn test_appearance_serde_fills_defaults() {
        let json = r#"{"text_color":{"red":10,"green":20,"blue":30,"alpha":255}}"#;
        let appearance: WheelAppearance = serde_json::from_str(json).unwrap();
        assert_eq!(appearance.text_color, Some(Rgba::opaque(10, 20, 30)));
        assert_eq!(appearance.font_name, "Helvetica");
    }
}
