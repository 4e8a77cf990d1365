//! Host-supplied indicator settings.
//!
//! The host UI layer maps its own styling attributes onto [`IndicatorConfig`];
//! missing fields fall back to the widget defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    color::Color,
    colormap::{ColorBoundaryResolver, ThresholdPreset},
    error::ConfigError,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    pub percent: f32,
    pub corner_radius: f32,
    pub border_stroke_size: f32,
    pub border_stroke_color: Color,
    pub preset: ThresholdPreset,
    pub low_level_color: Color,
    /// `None` picks the preset's own normal-tier color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normal_level_color: Option<Color>,
    pub excellent_level_color: Color,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            percent: 0.0,
            corner_radius: 14.0,
            border_stroke_size: 4.0,
            border_stroke_color: Color::BLACK,
            preset: ThresholdPreset::default(),
            low_level_color: Color::RED,
            normal_level_color: None,
            excellent_level_color: Color::GREEN,
        }
    }
}

impl IndicatorConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: IndicatorConfig = serde_json::from_str(json)?;
        config.validate()?;
        log::debug!("loaded indicator config: {config:?}");
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(ConfigError::InvalidCornerRadius(self.corner_radius));
        }
        if !self.border_stroke_size.is_finite() || self.border_stroke_size < 0.0 {
            return Err(ConfigError::InvalidBorderStroke(self.border_stroke_size));
        }
        Ok(())
    }

    pub fn normal_color(&self) -> Color {
        self.normal_level_color
            .unwrap_or_else(|| self.preset.default_normal_color())
    }

    pub fn resolver(&self) -> ColorBoundaryResolver {
        ColorBoundaryResolver::with_preset(
            self.preset,
            self.low_level_color,
            self.normal_color(),
            self.excellent_level_color,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let config = IndicatorConfig::from_json("{}").unwrap();
        assert_eq!(config, IndicatorConfig::default());
        assert_eq!(config.normal_color(), Color::YELLOW);
    }

    #[test]
    fn fifths_preset_defaults_to_magenta() {
        let config = IndicatorConfig::from_json(r#"{ "preset": "fifths" }"#).unwrap();
        assert_eq!(config.normal_color(), Color::MAGENTA);

        let resolver = config.resolver();
        assert_eq!(resolver.resolve(20.0), Color::RED);
        assert_eq!(resolver.resolve(21.0), Color::MAGENTA);
    }

    #[test]
    fn explicit_colors_override_defaults() {
        let json = r##"{
            "percent": 42,
            "border_stroke_color": "#ffffff",
            "low_level_color": "#800000",
            "normal_level_color": "#0000ff80",
            "excellent_level_color": "#008000"
        }"##;
        let config = IndicatorConfig::from_json(json).unwrap();
        assert_eq!(config.percent, 42.0);
        assert_eq!(config.border_stroke_color, Color::WHITE);
        assert_eq!(config.normal_color(), Color::rgba(0, 0, 255, 0x80));

        let resolver = config.resolver();
        assert_eq!(resolver.resolve(10.0), Color::rgb(0x80, 0, 0));
        assert_eq!(resolver.resolve(90.0), Color::rgb(0, 0x80, 0));
    }

    #[test]
    fn rejects_bad_color() {
        let err = IndicatorConfig::from_json(r#"{ "low_level_color": "red" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_negative_geometry() {
        let err = IndicatorConfig::from_json(r#"{ "corner_radius": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCornerRadius(_)));

        let err = IndicatorConfig::from_json(r#"{ "border_stroke_size": -4.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBorderStroke(_)));
    }

    #[test]
    fn reads_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("indicator.json");
        std::fs::write(&path, r#"{ "preset": "fifths", "percent": 30 }"#).unwrap();

        let config = IndicatorConfig::from_path(&path).unwrap();
        assert_eq!(config.preset, ThresholdPreset::Fifths);
        assert_eq!(config.percent, 30.0);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = IndicatorConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn json_round_trip() {
        let config = IndicatorConfig {
            preset: ThresholdPreset::Fifths,
            normal_level_color: Some(Color::rgb(1, 2, 3)),
            ..IndicatorConfig::default()
        };
        let json = config.to_json().unwrap();
        assert_eq!(IndicatorConfig::from_json(&json).unwrap(), config);
    }
}
