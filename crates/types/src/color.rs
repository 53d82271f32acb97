use serde::{Deserialize, Deserializer, Serialize, de};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }
}

pub const BLACK: Color = Color { r: 0, g: 0, b: 0 };
pub const WHITE: Color = Color { r: 255, g: 255, b: 255 };

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn parse_hex(s: &str) -> Result<Color, String> {
        let s = s.trim();
        if !s.starts_with('#') {
            return Err(format!("Color must start with #, got: {}", s));
        }
        let hex = &s[1..];

        match hex.len() {
            3 => {
                // #RGB format - expand each digit
                let r = u8::from_str_radix(&hex[0..1].repeat(2), 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[1..2].repeat(2), 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[2..3].repeat(2), 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            6 => {
                // #RRGGBB format
                let r = u8::from_str_radix(&hex[0..2], 16)
                    .map_err(|e| format!("Invalid red component: {}", e))?;
                let g = u8::from_str_radix(&hex[2..4], 16)
                    .map_err(|e| format!("Invalid green component: {}", e))?;
                let b = u8::from_str_radix(&hex[4..6], 16)
                    .map_err(|e| format!("Invalid blue component: {}", e))?;
                Ok(Color { r, g, b })
            }
            _ => Err(format!(
                "Invalid hex color length: expected 3 or 6, got {}",
                hex.len()
            )),
        }
    }

    /// Relative luminance on a 0..255 scale, using the standard
    /// 0.2126/0.7152/0.0722 channel weights.
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32
    }

    /// Black or white, whichever reads against this color as a fill.
    /// Fills darker than the mid-scale threshold get white text.
    pub fn contrast_text(&self) -> Color {
        if self.luminance() < 128.0 { WHITE } else { BLACK }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum ColorDef {
            Str(String),
            Map { r: u8, g: u8, b: u8 },
        }

        match ColorDef::deserialize(deserializer)? {
            ColorDef::Str(s) => Self::parse_hex(&s).map_err(de::Error::custom),
            ColorDef::Map { r, g, b } => Ok(Color { r, g, b }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_long_form() {
        assert_eq!(Color::parse_hex("#ff8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn test_parse_hex_short_form() {
        assert_eq!(Color::parse_hex("#f80").unwrap(), Color::new(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(Color::parse_hex("ff8000").is_err());
        assert!(Color::parse_hex("#ff80").is_err());
        assert!(Color::parse_hex("#gggggg").is_err());
    }

    #[test]
    fn test_contrast_text_threshold() {
        assert_eq!(Color::new(0, 0, 0).contrast_text(), WHITE);
        assert_eq!(Color::new(255, 255, 255).contrast_text(), BLACK);
        // Saturated blue is dark despite a high channel value.
        assert_eq!(Color::new(0, 0, 255).contrast_text(), WHITE);
        // Saturated green is bright.
        assert_eq!(Color::new(0, 255, 0).contrast_text(), BLACK);
    }
}
