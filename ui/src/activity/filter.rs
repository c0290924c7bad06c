use std::cmp::Reverse;

use time::{macros::format_description, Date};

use super::record::ActivityRecord;

/// Current values of the five filter inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    /// Exact user, empty for all.
    pub user: String,
    /// Exact action category, empty for all.
    pub action: String,
    pub date_from: Option<Date>,
    pub date_to: Option<Date>,
}

impl FilterState {
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.user.is_empty()
            && self.action.is_empty()
            && self.date_from.is_none()
            && self.date_to.is_none()
    }
}

/// Value of an `<input type="date">`; blank or malformed input clears the bound.
pub fn parse_date_input(raw: &str) -> Option<Date> {
    Date::parse(raw.trim(), format_description!("[year]-[month]-[day]")).ok()
}

pub fn matches(record: &ActivityRecord, filter: &FilterState) -> bool {
    let query = filter.query.trim().to_lowercase();
    if !query.is_empty() {
        let hit = [&record.user, &record.description, &record.entity]
            .iter()
            .any(|field| field.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }
    if !filter.user.is_empty() && record.user != filter.user {
        return false;
    }
    if !filter.action.is_empty() && record.action != filter.action {
        return false;
    }
    if filter.date_from.is_none() && filter.date_to.is_none() {
        return true;
    }

    let Some(instant) = record.instant() else {
        return false;
    };
    if let Some(from) = filter.date_from {
        if instant < from.midnight().assume_utc() {
            return false;
        }
    }
    if let Some(to) = filter.date_to {
        if let Some(next) = to.next_day() {
            if instant >= next.midnight().assume_utc() {
                return false;
            }
        }
    }
    true
}

/// Records passing the filter, newest first. Ties keep their input order
/// and records without a readable timestamp sink to the bottom.
pub fn visible_rows(records: &[ActivityRecord], filter: &FilterState) -> Vec<ActivityRecord> {
    let mut rows = export_rows(records, filter);
    sort_newest_first(&mut rows);
    rows
}

pub fn sort_newest_first(rows: &mut [ActivityRecord]) {
    rows.sort_by_cached_key(|record| Reverse(record.instant()));
}

/// Records passing the filter in their input order.
pub fn export_rows(records: &[ActivityRecord], filter: &FilterState) -> Vec<ActivityRecord> {
    records
        .iter()
        .filter(|record| matches(record, filter))
        .cloned()
        .collect()
}

pub fn distinct_users(records: &[ActivityRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.user.as_str()))
}

pub fn distinct_actions(records: &[ActivityRecord]) -> Vec<String> {
    distinct(records.iter().map(|r| r.action.as_str()))
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values {
        if !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
