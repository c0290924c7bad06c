//! Where activity records come from: the JSON feed, or the rows the server
//! rendered into the host page's `data-activity-source` table.

use time::{macros::format_description, Date, OffsetDateTime, Time};

use super::record::{iso_string, ActivityRecord};
use crate::core::config::DashboardConfig;
use crate::core::fetch::{fetch_json, FetchError};
use crate::core::timing;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivitySource {
    /// JSON array of records at a resolved location.
    Remote(String),
    /// `<tr>` rows matched by a CSS selector on the host page.
    HostTable(String),
}

impl ActivitySource {
    pub async fn fetch(&self) -> Result<Vec<ActivityRecord>, FetchError> {
        match self {
            Self::Remote(location) => fetch_json(location).await,
            Self::HostTable(selector) => {
                let rows = scrape_rows(selector)?;
                Ok(records_from_rows(rows, timing::utc_now()))
            }
        }
    }

    pub fn describe(&self) -> &str {
        match self {
            Self::Remote(location) => location,
            Self::HostTable(selector) => selector,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOrigin {
    Remote,
    HostTable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadedActivity {
    pub records: Vec<ActivityRecord>,
    pub origin: LoadOrigin,
}

/// Load the activity feed, falling back to the host table. Never fails: a
/// missing table yields an empty record set.
pub async fn load_activity(config: &DashboardConfig) -> LoadedActivity {
    let remote = ActivitySource::Remote(config.resolve(&config.activity_url));
    match remote.fetch().await {
        Ok(records) => {
            tracing::debug!(count = records.len(), "activity feed loaded");
            return LoadedActivity {
                records,
                origin: LoadOrigin::Remote,
            };
        }
        Err(err) => {
            tracing::warn!(
                source = remote.describe(),
                "activity feed unavailable, reading host table: {err}"
            );
        }
    }

    let table = ActivitySource::HostTable(config.activity_table_rows.clone());
    let records = match table.fetch().await {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(source = table.describe(), "host table unreadable: {err}");
            Vec::new()
        }
    };
    LoadedActivity {
        records,
        origin: LoadOrigin::HostTable,
    }
}

/// Turn scraped cell texts into records. Rows with fewer than five cells are
/// skipped; extra cells are ignored.
pub fn records_from_rows(rows: Vec<Vec<String>>, now: OffsetDateTime) -> Vec<ActivityRecord> {
    rows.into_iter()
        .filter(|cells| cells.len() >= 5)
        .map(|cells| {
            let cell = |i: usize| cells[i].trim().to_string();
            ActivityRecord::new(
                cell(0),
                cell(1),
                cell(2),
                cell(3),
                normalize_timestamp(&cells[4], now),
            )
        })
        .collect()
}

/// `YYYY-MM-DD` with an optional `HH:MM` becomes an ISO instant in UTC.
/// Anything else is replaced by `now`.
pub fn normalize_timestamp(text: &str, now: OffsetDateTime) -> String {
    parse_table_time(text.trim())
        .map(iso_string)
        .unwrap_or_else(|| iso_string(now))
}

fn parse_table_time(text: &str) -> Option<OffsetDateTime> {
    let date = Date::parse(text.get(..10)?, format_description!("[year]-[month]-[day]")).ok()?;
    let rest = text[10..].trim_start();
    let clock = rest
        .get(..5)
        .and_then(|hm| Time::parse(hm, format_description!("[hour]:[minute]")).ok())
        .unwrap_or(Time::MIDNIGHT);
    Some(date.with_time(clock).assume_utc())
}

#[cfg(target_arch = "wasm32")]
fn scrape_rows(selector: &str) -> Result<Vec<Vec<String>>, FetchError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| FetchError::Unsupported("document".into()))?;
    let rows = document
        .query_selector_all(selector)
        .map_err(|_| FetchError::Unsupported(selector.to_string()))?;

    let mut out = Vec::with_capacity(rows.length() as usize);
    for i in 0..rows.length() {
        let Some(row) = rows.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
            continue;
        };
        let Ok(cells) = row.query_selector_all("td") else {
            continue;
        };
        let texts = (0..cells.length())
            .filter_map(|j| cells.item(j))
            .map(|cell| cell.text_content().unwrap_or_default())
            .collect();
        out.push(texts);
    }
    Ok(out)
}

#[cfg(not(target_arch = "wasm32"))]
fn scrape_rows(selector: &str) -> Result<Vec<Vec<String>>, FetchError> {
    Err(FetchError::Unsupported(format!("host table {selector}")))
}
