//! Pure layout: series points, tick positions, pixel mapping.

use crate::core::{error::GraphError, table::RankedEntry};

/// (rank, count) points of the frequency-rank curve.
#[derive(Clone, Debug, PartialEq)]
pub struct LineSeries {
    pub points: Vec<(f64, f64)>,
}

impl LineSeries {
    /// Pair up coordinates.  Both slices must have equal length and hold
    /// only finite values.
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Self, GraphError> {
        if xs.len() != ys.len() {
            return Err(GraphError::Render(format!(
                "{} x values but {} y values",
                xs.len(),
                ys.len()
            )));
        }
        let mut points = Vec::with_capacity(xs.len());
        for (i, (&x, &y)) in xs.iter().zip(ys).enumerate() {
            if !x.is_finite() || !y.is_finite() {
                return Err(GraphError::Render(format!("point {i} is not finite")));
            }
            points.push((x, y));
        }
        Ok(Self { points })
    }

    #[allow(clippy::cast_precision_loss)]
    pub fn from_ranked(ranked: &[RankedEntry]) -> Result<Self, GraphError> {
        let xs: Vec<f64> = (0..ranked.len()).map(|i| i as f64).collect();
        let ys: Vec<f64> = ranked.iter().map(|e| e.count as f64).collect();
        Self::new(&xs, &ys)
    }
}

/// Nominal tick: one per key, labelled `key\ncount`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XTick {
    pub index: usize,
    pub label: String,
}

#[must_use]
pub fn x_ticks(ranked: &[RankedEntry]) -> Vec<XTick> {
    ranked
        .iter()
        .enumerate()
        .map(|(index, e)| XTick {
            index,
            label: format!("{}\n{}", e.key, e.count),
        })
        .collect()
}

/// Y axis anchored at zero with evenly spaced ticks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct YAxis {
    pub min: u64,
    pub max: u64,
    pub ticks: Vec<u64>,
}

impl YAxis {
    /// Ticks every `step` from 0 up to and including `max_count`; the axis
    /// ends at `max_count` itself.
    #[must_use]
    pub fn fit(max_count: u64, step: u64) -> Self {
        let step = step.max(1);
        let ticks: Vec<u64> = std::iter::successors(Some(0u64), |t| t.checked_add(step))
            .take_while(|&t| t <= max_count)
            .collect();
        let last = ticks.last().copied().unwrap_or(0);
        Self {
            min: 0,
            max: max_count.max(last),
            ticks,
        }
    }
}

/// Pixel rectangle the series is drawn into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotArea {
    #[inline]
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Centre of slot `x` out of `slots` equal-width slots.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn x_px(&self, x: f64, slots: usize) -> f32 {
        let slot_w = self.width / slots.max(1) as f32;
        self.left + (x as f32 + 0.5) * slot_w
    }

    /// `y_max` maps to the top edge, zero to the bottom edge.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn y_px(&self, y: f64, y_max: u64) -> f32 {
        let frac = (y / y_max.max(1) as f64) as f32;
        self.bottom() - frac * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, count: u64) -> RankedEntry {
        RankedEntry {
            key: key.to_owned(),
            count,
        }
    }

    #[test]
    fn y_axis_starts_at_zero_with_step_ticks() {
        let y = YAxis::fit(120, 50);
        assert_eq!(y.min, 0);
        assert_eq!(y.ticks, [0, 50, 100]);
        assert_eq!(y.max, 120);
    }

    #[test]
    fn y_axis_includes_exact_multiple() {
        let y = YAxis::fit(100, 50);
        assert_eq!(y.ticks, [0, 50, 100]);
        assert_eq!(y.max, 100);
    }

    #[test]
    fn y_axis_small_counts_keep_full_height() {
        let y = YAxis::fit(3, 50);
        assert_eq!(y.ticks, [0]);
        assert_eq!(y.max, 3);
    }

    #[test]
    fn x_ticks_label_key_and_count() {
        let ticks = x_ticks(&[entry("##", 5), entry("!?", 3)]);
        assert_eq!(ticks[0].label, "##\n5");
        assert_eq!(ticks[1].index, 1);
        assert_eq!(ticks[1].label, "!?\n3");
    }

    #[test]
    fn series_is_rank_against_count() {
        let s = LineSeries::from_ranked(&[entry("a", 9), entry("b", 4)]).unwrap();
        assert_eq!(s.points, [(0.0, 9.0), (1.0, 4.0)]);
    }

    #[test]
    fn series_rejects_mismatched_and_non_finite() {
        assert!(matches!(
            LineSeries::new(&[0.0, 1.0], &[1.0]),
            Err(GraphError::Render(_))
        ));
        assert!(matches!(
            LineSeries::new(&[0.0], &[f64::NAN]),
            Err(GraphError::Render(_))
        ));
    }

    #[test]
    fn pixel_mapping() {
        let area = PlotArea {
            left: 10.0,
            top: 20.0,
            width: 100.0,
            height: 50.0,
        };
        assert!((area.x_px(0.0, 2) - 35.0).abs() < 1e-4);
        assert!((area.x_px(1.0, 2) - 85.0).abs() < 1e-4);
        assert!((area.y_px(0.0, 100) - 70.0).abs() < 1e-4);
        assert!((area.y_px(100.0, 100) - 20.0).abs() < 1e-4);
    }
}
