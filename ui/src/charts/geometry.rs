//! Pure layout math for the SVG charts: bar rectangles, pie/doughnut arcs and
//! sparkline paths. Everything here is deterministic so the views stay thin.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Plot {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            left: 0.0,
            right: 0.0,
            top: 0.0,
            bottom: 0.0,
        }
    }

    pub fn padded(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
        self
    }

    pub fn inner_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline(&self) -> f64 {
        self.height - self.bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarRect {
    pub dataset: usize,
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub value: f64,
}

/// Upper bound of the value axis.
pub fn value_ceiling(series: &[&[f64]], stacked: bool, slots: usize) -> f64 {
    let max = if stacked {
        (0..slots)
            .map(|i| {
                series
                    .iter()
                    .filter_map(|s| s.get(i))
                    .filter(|v| v.is_finite() && **v > 0.0)
                    .sum::<f64>()
            })
            .fold(0.0, f64::max)
    } else {
        series
            .iter()
            .flat_map(|s| s.iter())
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    };
    if max <= 0.0 {
        1.0
    } else {
        max
    }
}

/// Lay out one rectangle per (dataset, label) pair.
///
/// Stacked series share a column and pile up from the baseline; otherwise the
/// column is split side by side. Negative and non-finite values draw nothing.
pub fn bar_layout(
    plot: &Plot,
    slots: usize,
    series: &[&[f64]],
    stacked: bool,
    thickness: Option<f64>,
) -> Vec<BarRect> {
    if slots == 0 || series.is_empty() {
        return Vec::new();
    }
    let ceiling = value_ceiling(series, stacked, slots);
    let slot_width = plot.inner_width() / slots as f64;
    let column = thickness
        .map(|t| t.min(slot_width * 0.9))
        .unwrap_or(slot_width * 0.6);
    let scale = plot.inner_height() / ceiling;

    let mut rects = Vec::new();
    for index in 0..slots {
        let center = plot.left + slot_width * (index as f64 + 0.5);
        let mut stack_top = plot.baseline();
        for (dataset, values) in series.iter().enumerate() {
            let value = values.get(index).copied().unwrap_or(0.0);
            if !value.is_finite() || value <= 0.0 {
                continue;
            }
            let height = value * scale;
            let rect = if stacked {
                stack_top -= height;
                BarRect {
                    dataset,
                    index,
                    x: center - column / 2.0,
                    y: stack_top,
                    width: column,
                    height,
                    value,
                }
            } else {
                let width = column / series.len() as f64;
                BarRect {
                    dataset,
                    index,
                    x: center - column / 2.0 + width * dataset as f64,
                    y: plot.baseline() - height,
                    width,
                    height,
                    value,
                }
            };
            rects.push(rect);
        }
    }
    rects
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArcSegment {
    pub index: usize,
    pub value: f64,
    /// Share of the total, `0.0..=1.0`.
    pub fraction: f64,
    pub path: String,
}

/// Slices for a pie (`cutout == 0`) or doughnut, clockwise from twelve o'clock.
pub fn arc_segments(values: &[f64], cx: f64, cy: f64, radius: f64, cutout: f64) -> Vec<ArcSegment> {
    let total: f64 = values
        .iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .sum();
    if total <= 0.0 {
        return Vec::new();
    }
    let inner = radius * cutout.clamp(0.0, 0.95);

    let mut start = -PI / 2.0;
    let mut segments = Vec::new();
    for (index, value) in values.iter().copied().enumerate() {
        if !value.is_finite() || value <= 0.0 {
            continue;
        }
        let fraction = value / total;
        // A full circle collapses to a zero-length arc in SVG.
        let sweep = (fraction * 2.0 * PI).min(2.0 * PI - 1e-4);
        let end = start + sweep;
        segments.push(ArcSegment {
            index,
            value,
            fraction,
            path: slice_path(cx, cy, radius, inner, start, end),
        });
        start += fraction * 2.0 * PI;
    }
    segments
}

fn slice_path(cx: f64, cy: f64, outer: f64, inner: f64, start: f64, end: f64) -> String {
    let large = if end - start > PI { 1 } else { 0 };
    let (ox0, oy0) = polar(cx, cy, outer, start);
    let (ox1, oy1) = polar(cx, cy, outer, end);
    if inner <= 0.0 {
        return format!(
            "M{cx:.2},{cy:.2} L{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} Z"
        );
    }
    let (ix1, iy1) = polar(cx, cy, inner, end);
    let (ix0, iy0) = polar(cx, cy, inner, start);
    format!(
        "M{ox0:.2},{oy0:.2} A{outer:.2},{outer:.2} 0 {large} 1 {ox1:.2},{oy1:.2} \
         L{ix1:.2},{iy1:.2} A{inner:.2},{inner:.2} 0 {large} 0 {ix0:.2},{iy0:.2} Z"
    )
}

fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Map a series onto the plot, scaled between its own min and max.
pub fn line_points(plot: &Plot, series: &[f64]) -> Vec<(f64, f64)> {
    let values: Vec<f64> = series
        .iter()
        .map(|v| if v.is_finite() { *v } else { 0.0 })
        .collect();
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    let step = if values.len() > 1 {
        plot.inner_width() / (values.len() - 1) as f64
    } else {
        0.0
    };

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = plot.left + step * i as f64;
            let y = if span > 0.0 {
                plot.baseline() - (v - min) / span * plot.inner_height()
            } else {
                plot.top + plot.inner_height() / 2.0
            };
            (x, y)
        })
        .collect()
}

/// Polyline through `points`, smoothed with cubic curves when `tension > 0`.
pub fn line_path(points: &[(f64, f64)], tension: f64) -> String {
    let Some(&(x0, y0)) = points.first() else {
        return String::new();
    };
    let mut d = format!("M{x0:.2},{y0:.2}");
    for i in 1..points.len() {
        let (x, y) = points[i];
        if tension <= 0.0 {
            d.push_str(&format!(" L{x:.2},{y:.2}"));
            continue;
        }
        let p0 = points[i.saturating_sub(2)];
        let p1 = points[i - 1];
        let p3 = points[(i + 1).min(points.len() - 1)];
        let k = tension / 2.0;
        let c1 = (p1.0 + (x - p0.0) * k, p1.1 + (y - p0.1) * k);
        let c2 = (x - (p3.0 - p1.0) * k, y - (p3.1 - p1.1) * k);
        d.push_str(&format!(
            " C{:.2},{:.2} {:.2},{:.2} {x:.2},{y:.2}",
            c1.0, c1.1, c2.0, c2.1
        ));
    }
    d
}

/// `line_path` closed down to the plot baseline, for filled sparklines.
pub fn area_path(plot: &Plot, points: &[(f64, f64)], tension: f64) -> String {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return String::new();
    };
    let base = plot.baseline();
    format!(
        "{} L{:.2},{base:.2} L{:.2},{base:.2} Z",
        line_path(points, tension),
        last.0,
        first.0
    )
}
