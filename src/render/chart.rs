//! Frequency-rank line chart rendered to an RGB raster and encoded as PNG.

use std::io::{Cursor, Write};

use image::{ImageFormat, RgbImage};

use crate::{
    core::{config::ChartConfig, error::GraphError, table::FrequencyTable},
    render::{
        axis::{LineSeries, PlotArea, XTick, YAxis, x_ticks},
        canvas::{Align, BLACK, Canvas, GLYPH, GRID},
    },
};

const PAD: u32 = 6;
const TITLE_SCALE: u32 = 2;
const TICK_LEN: u32 = 4;
/// Gap between a tick mark and its label
const LABEL_GAP: u32 = 2;
/// Vertical distance between the two lines of an x tick label
const LINE_STEP: u32 = GLYPH + 2;

/// Stateless renderer bound to one configuration.
pub struct LineChart {
    cfg: ChartConfig,
}

impl LineChart {
    #[must_use]
    pub fn new(cfg: ChartConfig) -> Self {
        Self { cfg }
    }

    /// Draw `table` ranked by descending count.  Fails before any drawing
    /// when the table is empty.
    pub fn render(&self, table: &FrequencyTable) -> Result<RgbImage, GraphError> {
        if table.is_empty() {
            return Err(GraphError::EmptyData);
        }
        let ranked = table.ranked();
        let series = LineSeries::from_ranked(&ranked)?;
        let y_axis = YAxis::fit(ranked[0].count, self.cfg.y_tick_step);
        let ticks = x_ticks(&ranked);
        let area = self.plot_area(&y_axis);
        let slots = ranked.len();

        let mut c = Canvas::new(self.cfg.width_px, self.cfg.height_px);

        // grid under everything else
        for &t in &y_axis.ticks {
            let y = area.y_px(tick_value(t), y_axis.max);
            c.rule((area.left, y), (area.right(), y), GRID);
        }
        for t in &ticks {
            let x = area.x_px(rank_value(t.index), slots);
            c.rule((x, area.top), (x, area.bottom()), GRID);
        }

        // axes
        c.rule((area.left, area.top), (area.left, area.bottom()), BLACK);
        c.rule((area.left, area.bottom()), (area.right(), area.bottom()), BLACK);

        let pts: Vec<(f32, f32)> = series
            .points
            .iter()
            .map(|&(x, y)| (area.x_px(x, slots), area.y_px(y, y_axis.max)))
            .collect();
        c.stroke(&pts, self.cfg.line_width_px, self.cfg.line_color);

        Self::draw_y_ticks(&mut c, &area, &y_axis);
        Self::draw_x_ticks(&mut c, &area, &ticks, slots);
        self.draw_chrome(&mut c, &area);

        Ok(c.into_image())
    }

    /// Render and write the PNG byte stream to `out`.
    pub fn write_png<W: Write>(
        &self,
        table: &FrequencyTable,
        mut out: W,
    ) -> Result<(), GraphError> {
        let img = self.render(table)?;
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }

    #[allow(clippy::cast_precision_loss)]
    fn plot_area(&self, y_axis: &YAxis) -> PlotArea {
        let y_label_w = y_axis
            .ticks
            .iter()
            .map(|t| Canvas::text_width(&t.to_string(), 1))
            .max()
            .unwrap_or(0);

        let left = PAD + GLYPH + PAD + y_label_w + LABEL_GAP + TICK_LEN;
        let top = PAD + GLYPH * TITLE_SCALE + PAD;
        let right = 2 * PAD;
        let bottom = TICK_LEN + LABEL_GAP + 2 * LINE_STEP + PAD + GLYPH + PAD;

        let width = self.cfg.width_px.saturating_sub(left + right).max(1);
        let height = self.cfg.height_px.saturating_sub(top + bottom).max(1);
        PlotArea {
            left: left as f32,
            top: top as f32,
            width: width as f32,
            height: height as f32,
        }
    }

    /// Labels are skipped where they would overlap the previous one; the
    /// grid line is still drawn for every tick.
    #[allow(clippy::cast_precision_loss)]
    fn draw_y_ticks(c: &mut Canvas, area: &PlotArea, y_axis: &YAxis) {
        let label_x = i64::from(round(area.left)) - i64::from(TICK_LEN + LABEL_GAP);
        let mut last_y: Option<i64> = None;
        for &t in &y_axis.ticks {
            let y = area.y_px(tick_value(t), y_axis.max);
            c.rule((area.left - TICK_LEN as f32, y), (area.left, y), BLACK);

            let top = i64::from(round(y)) - i64::from(GLYPH / 2);
            if last_y.is_some_and(|prev| prev - top < i64::from(LINE_STEP)) {
                continue;
            }
            c.text(&t.to_string(), label_x, top, 1, Align::Right, BLACK);
            last_y = Some(top);
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn draw_x_ticks(c: &mut Canvas, area: &PlotArea, ticks: &[XTick], slots: usize) {
        let first_line = i64::from(round(area.bottom())) + i64::from(TICK_LEN + LABEL_GAP);
        let xs: Vec<f32> = ticks
            .iter()
            .map(|t| area.x_px(rank_value(t.index), slots))
            .collect();
        let spans: Vec<(i64, i64)> = ticks
            .iter()
            .zip(&xs)
            .map(|(t, &x)| {
                let cx = i64::from(round(x));
                let half = label_half_width(&t.label);
                (cx - half, cx + half)
            })
            .collect();
        let keep = non_overlapping(&spans);

        for ((t, &x), keep) in ticks.iter().zip(&xs).zip(keep) {
            c.rule((x, area.bottom()), (x, area.bottom() + TICK_LEN as f32), BLACK);
            if !keep {
                continue;
            }
            let cx = i64::from(round(x));
            let mut y = first_line;
            for line in t.label.lines() {
                c.text(line, cx, y, 1, Align::Center, BLACK);
                y += i64::from(LINE_STEP);
            }
        }
    }

    fn draw_chrome(&self, c: &mut Canvas, area: &PlotArea) {
        let w = i64::from(c.width());
        let h = i64::from(c.height());
        c.text(
            &self.cfg.title,
            w / 2,
            i64::from(PAD),
            TITLE_SCALE,
            Align::Center,
            BLACK,
        );
        let plot_mid_x = i64::from(round(area.left + area.width / 2.0));
        c.text(
            &self.cfg.x_label,
            plot_mid_x,
            h - i64::from(PAD + GLYPH),
            1,
            Align::Center,
            BLACK,
        );
        let plot_mid_y = i64::from(round(area.top + area.height / 2.0));
        c.text_vertical(&self.cfg.y_label, i64::from(PAD), plot_mid_y, 1, BLACK);
    }
}

/// Half the pixel width of the widest line of a multi-line label.
fn label_half_width(label: &str) -> i64 {
    label
        .lines()
        .map(|l| i64::from(Canvas::text_width(l, 1)) / 2)
        .max()
        .unwrap_or(0)
}

/// For consecutive `(left, right)` label spans, whether each one clears the
/// last kept span by at least `LABEL_GAP`.
fn non_overlapping(spans: &[(i64, i64)]) -> Vec<bool> {
    let mut last_right: Option<i64> = None;
    spans
        .iter()
        .map(|&(left, right)| {
            let keep = last_right.is_none_or(|r| left >= r + i64::from(LABEL_GAP));
            if keep {
                last_right = Some(right);
            }
            keep
        })
        .collect()
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn tick_value(v: u64) -> f64 {
    v as f64
}

#[inline]
#[allow(clippy::cast_precision_loss)]
fn rank_value(i: usize) -> f64 {
    i as f64
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn round(v: f32) -> i32 {
    v.round() as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn chart() -> LineChart {
        LineChart::new(ChartConfig::builder("demo bigrams").build().unwrap())
    }

    fn table() -> FrequencyTable {
        [("!?", 3), ("?!", 3), ("##", 120)].into_iter().collect()
    }

    #[test]
    fn empty_table_fails_and_writes_nothing() {
        let mut out = Vec::new();
        let err = chart().write_png(&FrequencyTable::new(), &mut out).unwrap_err();
        assert!(matches!(err, GraphError::EmptyData));
        assert!(out.is_empty());
    }

    #[test]
    fn image_has_configured_size_and_blue_line() {
        let img = chart().render(&table()).unwrap();
        assert_eq!(img.dimensions(), (768, 384));
        assert!(img.pixels().any(|p| *p == Rgb([0, 0, 255])));
        assert!(img.pixels().any(|p| *p == GRID));
    }

    #[test]
    fn png_output_has_signature() {
        let mut out = Vec::new();
        chart().write_png(&table(), &mut out).unwrap();
        assert!(out.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]));
    }

    #[test]
    fn single_entry_renders() {
        let t: FrequencyTable = [("#", 1)].into_iter().collect();
        assert!(chart().render(&t).is_ok());
    }

    #[test]
    fn top_count_maps_to_axis_top() {
        let c = chart();
        let y = YAxis::fit(3, c.cfg.y_tick_step);
        let area = c.plot_area(&y);
        assert!((area.y_px(3.0, y.max) - area.top).abs() < 1e-3);
        assert!((area.y_px(0.0, y.max) - area.bottom()).abs() < 1e-3);
    }

    #[test]
    fn crowded_labels_are_skipped() {
        let keep = non_overlapping(&[(0, 10), (5, 15), (12, 20), (13, 30), (40, 50)]);
        assert_eq!(keep, [true, false, true, false, true]);
    }

    #[test]
    fn every_label_kept_when_spaced() {
        let keep = non_overlapping(&[(0, 10), (12, 20), (22, 30)]);
        assert!(keep.into_iter().all(|k| k));
        assert!(non_overlapping(&[]).is_empty());
    }

    #[test]
    fn many_keys_still_render() {
        let keys: Vec<String> = (0..600).map(|i| format!("{i}")).collect();
        let t: FrequencyTable = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.as_str(), 600 - i as u64))
            .collect();
        let img = chart().render(&t).unwrap();
        assert_eq!(img.dimensions(), (768, 384));
    }
}
