//! Chart configuration object + fluent builder.

use image::Rgb;

use crate::core::{
    constants::{
        CANVAS_HEIGHT_IN, CANVAS_WIDTH_IN, DOTS_PER_INCH, LINE_COLOR, LINE_WIDTH_PT,
        MIN_CANVAS_HEIGHT, MIN_CANVAS_WIDTH, X_AXIS_LABEL, Y_AXIS_LABEL, Y_TICK_STEP,
    },
    error::ConfigError,
};

/// Immutable parameters handed to the renderer.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width_px: u32,
    pub height_px: u32,
    /// Stroke width in pixels, derived from points at the configured DPI.
    pub line_width_px: f32,
    pub line_color: Rgb<u8>,
    pub y_tick_step: u64,
}

impl ChartConfig {
    #[inline]
    pub fn builder(title: impl Into<String>) -> ChartConfigBuilder {
        ChartConfigBuilder::new(title.into())
    }
}

/// Fluent builder.  Defaults reproduce the fixed 8×4 in blue-line chart.
#[derive(Debug)]
pub struct ChartConfigBuilder {
    title: String,
    size_in: (u32, u32),
    line_width_pt: f32,
    y_tick_step: u64,
}

impl ChartConfigBuilder {
    pub(crate) fn new(title: String) -> Self {
        Self {
            title,
            size_in: (CANVAS_WIDTH_IN, CANVAS_HEIGHT_IN),
            line_width_pt: LINE_WIDTH_PT,
            y_tick_step: Y_TICK_STEP,
        }
    }

    #[inline]
    #[must_use]
    pub fn size_in(mut self, w: u32, h: u32) -> Self {
        self.size_in = (w, h);
        self
    }
    #[inline]
    #[must_use]
    pub fn line_width_pt(mut self, w: f32) -> Self {
        self.line_width_pt = w;
        self
    }
    #[inline]
    #[must_use]
    pub fn y_tick_step(mut self, step: u64) -> Self {
        self.y_tick_step = step;
        self
    }

    pub fn build(self) -> Result<ChartConfig, ConfigError> {
        let width_px = self.size_in.0.saturating_mul(DOTS_PER_INCH);
        let height_px = self.size_in.1.saturating_mul(DOTS_PER_INCH);
        if width_px < MIN_CANVAS_WIDTH || height_px < MIN_CANVAS_HEIGHT {
            return Err(ConfigError::CanvasTooSmall {
                want_w: MIN_CANVAS_WIDTH,
                want_h: MIN_CANVAS_HEIGHT,
                got_w: width_px,
                got_h: height_px,
            });
        }
        if self.y_tick_step == 0 {
            return Err(ConfigError::ZeroTickStep);
        }
        if !(self.line_width_pt.is_finite() && self.line_width_pt > 0.0) {
            return Err(ConfigError::InvalidLineWidth(self.line_width_pt));
        }
        #[allow(clippy::cast_precision_loss)]
        let line_width_px = self.line_width_pt * DOTS_PER_INCH as f32 / 72.0;
        Ok(ChartConfig {
            title: self.title,
            x_label: X_AXIS_LABEL.to_owned(),
            y_label: Y_AXIS_LABEL.to_owned(),
            width_px,
            height_px,
            line_width_px,
            line_color: Rgb(LINE_COLOR),
            y_tick_step: self.y_tick_step,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_chart_contract() {
        let cfg = ChartConfig::builder("t").build().unwrap();
        assert_eq!((cfg.width_px, cfg.height_px), (768, 384));
        assert_eq!(cfg.line_color, Rgb([0, 0, 255]));
        assert_eq!(cfg.y_tick_step, 50);
        assert!((cfg.line_width_px - 2.0 * 96.0 / 72.0).abs() < 1e-6);
        assert_eq!(cfg.x_label, "Symbol");
        assert_eq!(cfg.y_label, "Frequency");
    }

    #[test]
    fn thicker_line_scales_with_dpi() {
        let cfg = ChartConfig::builder("t").line_width_pt(3.0).build().unwrap();
        assert!((cfg.line_width_px - 4.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_tiny_canvas() {
        let err = ChartConfig::builder("t").size_in(1, 1).build().unwrap_err();
        assert!(matches!(err, ConfigError::CanvasTooSmall { got_w: 96, .. }));
    }

    #[test]
    fn rejects_zero_tick_step_and_bad_width() {
        assert!(matches!(
            ChartConfig::builder("t").y_tick_step(0).build(),
            Err(ConfigError::ZeroTickStep)
        ));
        assert!(matches!(
            ChartConfig::builder("t").line_width_pt(f32::NAN).build(),
            Err(ConfigError::InvalidLineWidth(_))
        ));
    }
}
