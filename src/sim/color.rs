//! Fill/stroke colours with CSS formatting

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    /// Hue in degrees, saturation and lightness in percent
    Hsl { h: f32, s: f32, l: f32 },
    /// 8-bit channels with alpha in 0-1
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

impl Color {
    pub const WHITE: Color = Color::Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 1.0,
    };

    /// Translucent white used for balloon highlights
    pub const GLOSS: Color = Color::Rgba {
        r: 255,
        g: 255,
        b: 255,
        a: 0.5,
    };

    /// Fully saturated colour at the given hue (wrapped into [0, 360))
    pub fn vivid(hue: f32) -> Self {
        Color::Hsl {
            h: hue.rem_euclid(360.0),
            s: 100.0,
            l: 60.0,
        }
    }

    /// CSS colour string, e.g. `hsl(120, 100%, 60%)`
    pub fn to_css(&self) -> String {
        match *self {
            Color::Hsl { h, s, l } => format!("hsl({:.0}, {:.0}%, {:.0}%)", h, s, l),
            Color::Rgba { r, g, b, a } => format!("rgba({},{},{},{})", r, g, b, a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_formatting() {
        assert_eq!(Color::vivid(120.0).to_css(), "hsl(120, 100%, 60%)");
        assert_eq!(Color::GLOSS.to_css(), "rgba(255,255,255,0.5)");
        assert_eq!(Color::WHITE.to_css(), "rgba(255,255,255,1)");
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Color::vivid(-10.0), Color::vivid(350.0));
        assert_eq!(Color::vivid(370.0).to_css(), "hsl(10, 100%, 60%)");
    }
}
