//! Fill and stroke colors.

use std::fmt;

/// An opaque color given by its byte channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }
}

/// A color with byte channels and a floating-point opacity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    /// Opacity (0.0 = fully transparent, 1.0 = fully opaque).
    pub opacity: f64,
}

impl Rgba {
    pub fn new(red: u8, green: u8, blue: u8, opacity: f64) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }
}

/// Color of a shape's fill or stroke.
///
/// Any string is accepted as a named color; the caller is responsible for
/// it being valid SVG color syntax.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Color {
    /// No color. Shapes omit the attribute entirely.
    #[default]
    None,
    Named(String),
    Rgb(Rgb),
    Rgba(Rgba),
}

impl Color {
    /// Check if this is [`Color::None`].
    pub fn is_none(&self) -> bool {
        matches!(self, Color::None)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color::Named(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color::Named(name)
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb(rgb)
    }
}

impl From<Rgba> for Color {
    fn from(rgba: Rgba) -> Self {
        Color::Rgba(rgba)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({},{},{},{})",
            self.red, self.green, self.blue, self.opacity
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::None => f.write_str("none"),
            Color::Named(name) => f.write_str(name),
            Color::Rgb(rgb) => rgb.fmt(f),
            Color::Rgba(rgba) => rgba.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(Color::default(), Color::None);
        assert!(Color::default().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::None.to_string(), "none");
        assert_eq!(Color::from("purple").to_string(), "purple");
        assert_eq!(
            Color::from(Rgb::new(100, 200, 255)).to_string(),
            "rgb(100,200,255)"
        );
        assert_eq!(
            Color::from(Rgba::new(100, 200, 255, 0.5)).to_string(),
            "rgba(100,200,255,0.5)"
        );
    }

    #[test]
    fn test_opacity_keeps_full_precision() {
        let color = Color::from(Rgba::new(0, 0, 0, 0.123456789));
        assert_eq!(color.to_string(), "rgba(0,0,0,0.123456789)");
    }

    #[test]
    fn test_string_becomes_named() {
        let color: Color = String::from("rgb(1,2,3)").into();
        // Strings are never parsed into channels.
        assert_eq!(color, Color::Named("rgb(1,2,3)".to_string()));
        assert_ne!(color, Color::from(Rgb::new(1, 2, 3)));
    }
}
