//! Configuration types for Chanviz diagram rendering.
//!
//! This module provides configuration structures that control how channel
//! graphs are rendered. All types implement [`serde::Deserialize`] for
//! loading from external sources; every field has a default, so an empty
//! document yields [`AppConfig::default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining graph and style settings.
//! - [`GraphConfig`] - Controls the diagram [`Direction`].
//! - [`StyleConfig`] - Controls how tombstoned versions are drawn.
//!
//! # Example
//!
//! ```
//! # use chanviz::config::{AppConfig, Direction};
//! let config = AppConfig::default();
//! assert_eq!(config.graph().direction(), Direction::RightToLeft);
//! assert!(config.validate().is_ok());
//! ```

use std::{fmt, str::FromStr};

use color::DynamicColor;
use serde::Deserialize;

/// Top-level application configuration combining graph and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Graph configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified graph and style configurations.
    pub fn new(graph: GraphConfig, style: StyleConfig) -> Self {
        Self { graph, style }
    }

    /// Returns the graph configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Checks that every configured color is a valid CSS color.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        self.style.tombstone().validate()
    }
}

/// Flow direction of the rendered graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Direction {
    /// Newest versions on the left.
    #[default]
    #[serde(rename = "RL")]
    RightToLeft,
    #[serde(rename = "LR")]
    LeftToRight,
    #[serde(rename = "TB")]
    TopToBottom,
    #[serde(rename = "BT")]
    BottomToTop,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Direction::RightToLeft => "RL",
            Direction::LeftToRight => "LR",
            Direction::TopToBottom => "TB",
            Direction::BottomToTop => "BT",
        };
        f.write_str(keyword)
    }
}

/// Graph layout configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct GraphConfig {
    /// Direction written on the `graph` header line.
    #[serde(default)]
    direction: Direction,
}

impl GraphConfig {
    /// Creates a new [`GraphConfig`] with the given direction.
    pub fn new(direction: Direction) -> Self {
        Self { direction }
    }

    /// Returns the graph [`Direction`].
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Style applied to tombstoned versions.
    #[serde(default)]
    tombstone: TombstoneStyle,
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] with the given tombstone style.
    pub fn new(tombstone: TombstoneStyle) -> Self {
        Self { tombstone }
    }

    /// Returns the style used for tombstoned versions.
    pub fn tombstone(&self) -> &TombstoneStyle {
        &self.tombstone
    }
}

/// Node style for retired versions: a muted, dashed box.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TombstoneStyle {
    fill: String,
    stroke: String,
    stroke_width: String,
    color: String,
    stroke_dasharray: String,
}

impl Default for TombstoneStyle {
    fn default() -> Self {
        Self {
            fill: "#ccc".to_string(),
            stroke: "#666".to_string(),
            stroke_width: "1px".to_string(),
            color: "#666".to_string(),
            stroke_dasharray: "4".to_string(),
        }
    }
}

impl TombstoneStyle {
    /// Checks `fill`, `stroke` and `color` parse as CSS colors.
    ///
    /// # Errors
    ///
    /// Returns a message naming the offending field and value.
    pub fn validate(&self) -> Result<(), String> {
        for (field, value) in [
            ("fill", &self.fill),
            ("stroke", &self.stroke),
            ("color", &self.color),
        ] {
            DynamicColor::from_str(value).map_err(|err| {
                format!("Invalid tombstone {field} color '{value}' in config: {err}")
            })?;
        }
        Ok(())
    }
}

impl fmt::Display for TombstoneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill:{},stroke:{},stroke-width:{},color:{},stroke-dasharray: {}",
            self.fill, self.stroke, self.stroke_width, self.color, self.stroke_dasharray
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tombstone_style() {
        assert_eq!(
            TombstoneStyle::default().to_string(),
            "fill:#ccc,stroke:#666,stroke-width:1px,color:#666,stroke-dasharray: 4"
        );
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: AppConfig = toml::from_str("").unwrap();

        assert_eq!(config.graph().direction(), Direction::RightToLeft);
        assert_eq!(config.style().tombstone(), &TombstoneStyle::default());
    }

    #[test]
    fn test_partial_style_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [graph]
            direction = "LR"

            [style.tombstone]
            fill = "#eee"
            "##,
        )
        .unwrap();

        assert_eq!(config.graph().direction(), Direction::LeftToRight);
        assert_eq!(
            config.style().tombstone().to_string(),
            "fill:#eee,stroke:#666,stroke-width:1px,color:#666,stroke-dasharray: 4"
        );
    }

    #[test]
    fn test_unknown_direction_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[graph]\ndirection = \"XY\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_color_fails_validation() {
        let config: AppConfig =
            toml::from_str("[style.tombstone]\nstroke = \"not-a-color\"").unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.contains("stroke"), "unexpected message: {err}");
        assert!(err.contains("not-a-color"), "unexpected message: {err}");
    }

    #[test]
    fn test_default_config_validates() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
