//! Geometry for the detail line chart (clicks and impressions over time).

use crate::{analytics::TimeSeriesData, date_range::format_axis_date, summary::format_number};

const Y_TICK_COUNT: usize = 5;
const MAX_X_LABELS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self { width: 800.0, height: 320.0, margin_top: 10.0, margin_right: 30.0, margin_bottom: 30.0, margin_left: 70.0 }
    }
}

impl ChartDimensions {
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin_left - self.margin_right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin_top - self.margin_bottom).max(0.0)
    }

    pub fn bottom(&self) -> f64 {
        self.margin_top + self.inner_height()
    }

    pub fn right(&self) -> f64 {
        self.margin_left + self.inner_width()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub dimensions: ChartDimensions,
    pub y_max: u64,
    pub clicks: Vec<ChartPoint>,
    pub impressions: Vec<ChartPoint>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
}

impl ChartLayout {
    /// Both series share one Y axis starting at zero.
    pub fn compute(series: &[TimeSeriesData], dimensions: ChartDimensions) -> Self {
        let max_value = series.iter().map(|p| p.clicks.max(p.impressions)).max().unwrap_or(0);
        let y_max = nice_ceiling(max_value);

        let x_at = |i: usize| -> f64 {
            if series.len() <= 1 {
                dimensions.margin_left + dimensions.inner_width() / 2.0
            } else {
                dimensions.margin_left + dimensions.inner_width() * i as f64 / (series.len() - 1) as f64
            }
        };
        let y_at = |v: u64| -> f64 { dimensions.margin_top + dimensions.inner_height() * (1.0 - v as f64 / y_max as f64) };

        let clicks = series.iter().enumerate().map(|(i, p)| ChartPoint { x: x_at(i), y: y_at(p.clicks) }).collect();
        let impressions = series.iter().enumerate().map(|(i, p)| ChartPoint { x: x_at(i), y: y_at(p.impressions) }).collect();

        let step = series.len().div_ceil(MAX_X_LABELS).max(1);
        let x_ticks = series
            .iter()
            .enumerate()
            .step_by(step)
            .map(|(i, p)| AxisTick { position: x_at(i), label: format_axis_date(&p.date) })
            .collect();

        let y_ticks = if series.is_empty() {
            Vec::new()
        } else {
            (0..Y_TICK_COUNT)
                .map(|i| {
                    let value = y_max * i as u64 / (Y_TICK_COUNT as u64 - 1);
                    AxisTick { position: y_at(value), label: format_number(value) }
                })
                .collect()
        };

        Self { dimensions, y_max, clicks, impressions, x_ticks, y_ticks }
    }

    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }

    /// Horizontal hover band `(left, width)` of every day: from the midpoint
    /// with the previous day to the midpoint with the next, clamped to the plot.
    pub fn hover_bands(&self) -> Vec<(f64, f64)> {
        let xs: Vec<f64> = self.clicks.iter().map(|p| p.x).collect();
        (0..xs.len())
            .map(|i| {
                let left = if i == 0 { self.dimensions.margin_left } else { (xs[i - 1] + xs[i]) / 2.0 };
                let right = if i + 1 == xs.len() { self.dimensions.right() } else { (xs[i] + xs[i + 1]) / 2.0 };
                (left, (right - left).max(0.0))
            })
            .collect()
    }
}

/// SVG `points` attribute.
pub fn polyline_points(points: &[ChartPoint]) -> String {
    points.iter().map(|p| format!("{:.1},{:.1}", p.x, p.y)).collect::<Vec<_>>().join(" ")
}

/// Smallest 1, 2 or 5 times a power of ten that is `>= value`; never zero.
pub fn nice_ceiling(value: u64) -> u64 {
    if value <= 1 {
        return 1;
    }
    let mut magnitude = 1_u64;
    while magnitude.saturating_mul(10) <= value {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| magnitude.saturating_mul(m))
        .find(|candidate| *candidate >= value)
        .unwrap_or(u64::MAX)
}
