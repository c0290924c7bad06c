//! Percent change badges and sparkline series.

use super::snapshot::MetricReading;
use crate::core::format;

/// Change between the final two points, one decimal place. `None` below two
/// points; zero when the previous point is zero.
pub fn percent_change(history: &[f64]) -> Option<f64> {
    let [.., prev, last] = history else {
        return None;
    };
    if *prev == 0.0 {
        return Some(0.0);
    }
    // Halves round towards positive infinity.
    Some(((((last - prev) / prev) * 1000.0) + 0.5).floor() / 10.0)
}

/// Explicit change first, then one derived from history.
pub fn resolve_change(reading: &MetricReading) -> Option<f64> {
    reading
        .change
        .or_else(|| reading.history.as_deref().and_then(percent_change))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn class(self) -> &'static str {
        match self {
            Trend::Up => "trend-up",
            Trend::Down => "trend-down",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChangeBadge {
    pub text: String,
    pub trend: Trend,
}

pub fn change_badge(change: Option<f64>) -> Option<ChangeBadge> {
    let change = change.filter(|c| c.is_finite())?;
    Some(ChangeBadge {
        text: format::format_change(change),
        trend: if change >= 0.0 { Trend::Up } else { Trend::Down },
    })
}

/// The series a sparkline plots before padding: the history when it has
/// points, a short ramp up to a non-zero value, or a flat line.
pub fn sparkline_series(reading: &MetricReading) -> Vec<f64> {
    if let Some(history) = reading.history.as_ref().filter(|h| !h.is_empty()) {
        return history.clone();
    }
    match reading.value {
        Some(v) if v != 0.0 => vec![(v - 2.0).max(0.0), (v - 1.0).max(0.0), v],
        _ => vec![0.0, 0.0],
    }
}

/// Guarantee at least two points.
pub fn pad_series(series: Vec<f64>) -> Vec<f64> {
    match series.len() {
        0 => vec![0.0, 0.0],
        1 => vec![(series[0] - 1.0).max(0.0), series[0]],
        _ => series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_change_rounds_to_one_decimal() {
        assert_eq!(percent_change(&[100.0, 110.0]), Some(10.0));
        assert_eq!(percent_change(&[0.0, 5.0]), Some(0.0));
        assert_eq!(percent_change(&[3.0, 120.0, 100.0]), Some(-16.7));
        assert_eq!(percent_change(&[200.0, 199.99]), Some(0.0));
        assert_eq!(percent_change(&[7.0]), None);
        assert_eq!(percent_change(&[]), None);
    }

    #[test]
    fn explicit_change_beats_history() {
        let reading = MetricReading {
            value: Some(110.0),
            history: Some(vec![100.0, 110.0]),
            change: Some(-3.0),
        };
        assert_eq!(resolve_change(&reading), Some(-3.0));
        let derived = MetricReading { change: None, ..reading };
        assert_eq!(resolve_change(&derived), Some(10.0));
        assert_eq!(resolve_change(&MetricReading::default()), None);
    }

    #[test]
    fn badge_text_and_class() {
        let up = change_badge(Some(10.0)).unwrap();
        assert_eq!(up.text, "+10%");
        assert_eq!(up.trend.class(), "trend-up");

        let zero = change_badge(Some(0.0)).unwrap();
        assert_eq!(zero.text, "+0%");
        assert_eq!(zero.trend, Trend::Up);

        let down = change_badge(Some(-16.7)).unwrap();
        assert_eq!(down.text, "-16.7%");
        assert_eq!(down.trend.class(), "trend-down");

        assert_eq!(change_badge(None), None);
    }

    #[test]
    fn series_prefers_history_then_ramp() {
        let with_history = MetricReading {
            value: Some(9.0),
            history: Some(vec![4.0, 9.0]),
            change: None,
        };
        assert_eq!(sparkline_series(&with_history), vec![4.0, 9.0]);

        let ramp = MetricReading {
            value: Some(1.0),
            history: Some(Vec::new()),
            change: None,
        };
        assert_eq!(sparkline_series(&ramp), vec![0.0, 0.0, 1.0]);

        let zero = MetricReading {
            value: Some(0.0),
            ..MetricReading::default()
        };
        assert_eq!(sparkline_series(&zero), vec![0.0, 0.0]);
        assert_eq!(sparkline_series(&MetricReading::default()), vec![0.0, 0.0]);
    }

    #[test]
    fn padding_guarantees_two_points() {
        assert_eq!(pad_series(vec![7.0]), vec![6.0, 7.0]);
        assert_eq!(pad_series(vec![0.5]), vec![0.0, 0.5]);
        assert_eq!(pad_series(Vec::new()), vec![0.0, 0.0]);
        assert_eq!(pad_series(vec![1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    }
}
