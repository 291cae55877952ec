//! Color handling with CSS color string support.

use color::DynamicColor;
use std::{
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Wrapper around the `DynamicColor` type from the color crate.
/// Figure definitions declare colors as CSS strings ("#1976D2", "white")
/// and renderers emit them back as strings.
#[derive(Clone, PartialEq, Debug)]
pub struct Color {
    color: DynamicColor,
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl Color {
    /// Create a new `Color` from a string.
    /// This parses CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(color) => Ok(Color { color }),
            Err(err) => Err(format!("Invalid color '{color_str}': {err}")),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color)
    }
}

impl From<&Color> for svg::node::Value {
    fn from(color: &Color) -> Self {
        svg::node::Value::from(color.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_parses() {
        let color = Color::new("white").unwrap();
        assert!(!color.to_string().is_empty());
    }

    #[test]
    fn test_hex_color_parses() {
        assert!(Color::new("#1976D2").is_ok());
        assert!(Color::new("#E8F4FD").is_ok());
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = Color::new("definitely-not-a-color").unwrap_err();
        assert!(err.contains("definitely-not-a-color"));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default(), Color::new("black").unwrap());
    }
}
