//! Aggregates behind the KPI cards and the two activity charts.

use time::{macros::format_description, Date, Duration};

use super::filter::{self, FilterState};
use super::record::{ActivityRecord, ACTION_ADD, ACTION_DELETE};
use crate::charts::{ChartConfig, ChartKind, ChartOptions, Dataset};

pub const DAILY_BAR_COLOR: &str = "#4e73df";
pub const ACTION_PIE_PALETTE: [&str; 4] = ["#1cc88a", "#36b9cc", "#f6c23e", "#e74a3b"];
/// Placeholder shown when there is no top user.
pub const NO_TOP_USER: &str = "-";
const TRAILING_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityKpis {
    pub total: usize,
    pub top_user: String,
    pub adds_today: usize,
    pub deletes_today: usize,
}

impl ActivityKpis {
    pub fn compute(records: &[ActivityRecord], today: Date) -> Self {
        let today_with = |action: &str| {
            records
                .iter()
                .filter(|r| r.action == action && r.date_component() == Some(today))
                .count()
        };
        Self {
            total: records.len(),
            top_user: top_user(records).unwrap_or_else(|| NO_TOP_USER.to_string()),
            adds_today: today_with(ACTION_ADD),
            deletes_today: today_with(ACTION_DELETE),
        }
    }
}

/// Everything the viewer derives from one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    /// Matching records in input order; KPIs, charts and export read these.
    pub matched: Vec<ActivityRecord>,
    /// The same records sorted for the table.
    pub rows: Vec<ActivityRecord>,
    pub kpis: ActivityKpis,
}

impl ActivitySummary {
    pub fn derive(records: &[ActivityRecord], filter: &FilterState, today: Date) -> Self {
        let matched = filter::export_rows(records, filter);
        let kpis = ActivityKpis::compute(kpi_basis(&matched, records), today);
        let mut rows = matched.clone();
        filter::sort_newest_first(&mut rows);
        Self { matched, rows, kpis }
    }

    /// Records the KPI cards and charts summarise.
    pub fn basis<'a>(&'a self, all: &'a [ActivityRecord]) -> &'a [ActivityRecord] {
        kpi_basis(&self.matched, all)
    }
}

/// The set KPIs and charts summarise: the filtered rows, or every record when
/// the filter matched nothing.
pub fn kpi_basis<'a>(visible: &'a [ActivityRecord], all: &'a [ActivityRecord]) -> &'a [ActivityRecord] {
    if visible.is_empty() {
        all
    } else {
        visible
    }
}

/// Occurrence counts keyed by `key`, in first-seen order.
pub fn tally<'a>(
    records: &'a [ActivityRecord],
    key: impl Fn(&'a ActivityRecord) -> &'a str,
) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for record in records {
        let value = key(record);
        match counts.iter_mut().find(|(k, _)| k == value) {
            Some((_, n)) => *n += 1,
            None => counts.push((value.to_string(), 1)),
        }
    }
    counts
}

/// Most active user; ties go to whoever appears first.
pub fn top_user(records: &[ActivityRecord]) -> Option<String> {
    let mut best: Option<(String, usize)> = None;
    for (user, count) in tally(records, |r| r.user.as_str()) {
        if best.as_ref().map_or(true, |(_, top)| count > *top) {
            best = Some((user, count));
        }
    }
    best.map(|(user, _)| user)
}

/// Record counts for the seven days ending `today`, oldest first, labelled
/// `YYYY-MM-DD`.
pub fn daily_counts(records: &[ActivityRecord], today: Date) -> (Vec<String>, Vec<f64>) {
    let mut labels = Vec::with_capacity(TRAILING_DAYS as usize);
    let mut counts = Vec::with_capacity(TRAILING_DAYS as usize);
    for back in (0..TRAILING_DAYS).rev() {
        let Some(day) = today.checked_sub(Duration::days(back)) else {
            continue;
        };
        let count = records
            .iter()
            .filter(|r| r.date_component() == Some(day))
            .count();
        labels.push(
            day.format(format_description!("[year]-[month]-[day]"))
                .unwrap_or_default(),
        );
        counts.push(count as f64);
    }
    (labels, counts)
}

/// Records per action category, in first-seen order.
pub fn action_breakdown(records: &[ActivityRecord]) -> (Vec<String>, Vec<f64>) {
    tally(records, |r| r.action.as_str())
        .into_iter()
        .map(|(action, n)| (action, n as f64))
        .unzip()
}

pub fn daily_bar_config(series_label: &str, labels: Vec<String>, counts: Vec<f64>) -> ChartConfig {
    let dataset = Dataset::new(counts)
        .labelled(series_label)
        .colors([DAILY_BAR_COLOR]);
    ChartConfig::new(ChartKind::Bar, labels, vec![dataset]).with_options(ChartOptions {
        begin_at_zero: true,
        ..ChartOptions::default()
    })
}

pub fn action_pie_config(labels: Vec<String>, counts: Vec<f64>) -> ChartConfig {
    let dataset = Dataset::new(counts).colors(ACTION_PIE_PALETTE);
    ChartConfig::new(ChartKind::Pie, labels, vec![dataset])
}
