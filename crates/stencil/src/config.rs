//! Configuration types for figure rendering.
//!
//! All types implement [`serde::Deserialize`] so configuration can be
//! loaded from a TOML file by the CLI; every field has a default so an
//! empty or missing file means default behavior.

use std::path::PathBuf;

use serde::Deserialize;

use stencil_core::color::Color;

/// Top-level application configuration combining render and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Render configuration section.
    #[serde(default)]
    render: RenderConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(render: RenderConfig, style: StyleConfig) -> Self {
        Self { render, style }
    }

    /// Returns the render configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Settings for the render stage.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    /// Command name of the external Mermaid compiler.
    #[serde(default = "default_command")]
    command: String,

    /// Directory receiving the generated images.
    #[serde(default = "default_out_dir")]
    out_dir: PathBuf,
}

impl RenderConfig {
    /// The external Mermaid compiler command.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// The output directory for generated images.
    pub fn out_dir(&self) -> &PathBuf {
        &self.out_dir
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            out_dir: default_out_dir(),
        }
    }
}

fn default_command() -> String {
    "mmdc".to_string()
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("images")
}

/// Visual styling configuration for rendered figures.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for figures, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.render().command(), "mmdc");
        assert_eq!(config.render().out_dir(), &PathBuf::from("images"));
        assert!(config.style().background_color().unwrap().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config: AppConfig = toml::from_str(
            r##"
            [render]
            command = "npx mmdc"
            out_dir = "figures"

            [style]
            background_color = "#F8F9FA"
            "##,
        )
        .unwrap();

        assert_eq!(config.render().command(), "npx mmdc");
        assert_eq!(config.render().out_dir(), &PathBuf::from("figures"));
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "white"
            "#,
        )
        .unwrap();

        assert_eq!(config.render().command(), "mmdc");
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "not-a-color"
            "#,
        )
        .unwrap();

        assert!(config.style().background_color().is_err());
    }
}
