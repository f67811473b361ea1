use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style and behavior options of a line graph.
///
/// Every field carries a serde default so hosts can persist partial
/// documents and load them back without inventing their own format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineGraphConfig {
    pub max_visible_entries: usize,
    pub show_vertical_grid: bool,
    pub show_horizontal_grid: bool,
    pub show_top_labels: bool,
    pub show_bottom_labels: bool,
    pub label_color: Color,
    pub line_width: f64,
    pub point_radius: f64,
    pub tint_color: Color,
    pub label_font_size_px: f64,
}

impl Default for LineGraphConfig {
    fn default() -> Self {
        Self {
            max_visible_entries: 10,
            show_vertical_grid: true,
            show_horizontal_grid: true,
            show_top_labels: true,
            show_bottom_labels: true,
            label_color: Color::BLACK,
            line_width: 2.0,
            point_radius: 4.0,
            tint_color: Color::SYSTEM_BLUE,
            label_font_size_px: 13.0,
        }
    }
}

impl LineGraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps the rendered window to the most recent `entries` points.
    #[must_use]
    pub fn with_max_visible_entries(mut self, entries: usize) -> Self {
        self.max_visible_entries = entries;
        self
    }

    #[must_use]
    pub fn with_vertical_grid(mut self, show: bool) -> Self {
        self.show_vertical_grid = show;
        self
    }

    #[must_use]
    pub fn with_horizontal_grid(mut self, show: bool) -> Self {
        self.show_horizontal_grid = show;
        self
    }

    #[must_use]
    pub fn with_top_labels(mut self, show: bool) -> Self {
        self.show_top_labels = show;
        self
    }

    #[must_use]
    pub fn with_bottom_labels(mut self, show: bool) -> Self {
        self.show_bottom_labels = show;
        self
    }

    #[must_use]
    pub fn with_label_color(mut self, color: Color) -> Self {
        self.label_color = color;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    #[must_use]
    pub fn with_point_radius(mut self, radius: f64) -> Self {
        self.point_radius = radius;
        self
    }

    #[must_use]
    pub fn with_tint_color(mut self, color: Color) -> Self {
        self.tint_color = color;
        self
    }

    #[must_use]
    pub fn with_label_font_size_px(mut self, size: f64) -> Self {
        self.label_font_size_px = size;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.max_visible_entries == 0 {
            return Err(ChartError::InvalidConfig(
                "max visible entries must be > 0".to_owned(),
            ));
        }
        for (field, value) in [
            ("line_width", self.line_width),
            ("point_radius", self.point_radius),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "`{field}` must be finite and >= 0"
                )));
            }
        }
        if !self.label_font_size_px.is_finite() || self.label_font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "`label_font_size_px` must be finite and > 0".to_owned(),
            ));
        }
        for (field, color) in [
            ("label_color", self.label_color),
            ("tint_color", self.tint_color),
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("`{field}`: {err}")))?;
        }
        Ok(())
    }

    /// Parses and validates a JSON config document.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse line graph config json: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize line graph config: {e}"))
        })
    }
}
