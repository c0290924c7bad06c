use serde::{Deserialize, Serialize};
use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, OffsetDateTime,
    PrimitiveDateTime, UtcOffset,
};

/// Action category counted by the "added today" KPI.
pub const ACTION_ADD: &str = "إضافة";
/// Action category counted by the "deleted today" KPI.
pub const ACTION_DELETE: &str = "حذف";

/// One entry of the admin activity log. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityRecord {
    #[serde(default)]
    pub user: String,
    /// Category such as [`ACTION_ADD`] or [`ACTION_DELETE`].
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub entity: String,
    #[serde(default)]
    pub description: String,
    /// ISO-8601 timestamp as delivered by the source.
    #[serde(default)]
    pub timestamp: String,
}

impl ActivityRecord {
    pub fn new(
        user: impl Into<String>,
        action: impl Into<String>,
        entity: impl Into<String>,
        description: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            user: user.into(),
            action: action.into(),
            entity: entity.into(),
            description: description.into(),
            timestamp: timestamp.into(),
        }
    }

    /// Parsed instant. Offset-less timestamps are read as UTC; a bare date is
    /// its UTC midnight. `None` when the text is not a timestamp at all.
    pub fn instant(&self) -> Option<OffsetDateTime> {
        parse_instant(&self.timestamp)
    }

    /// The calendar date written at the start of the timestamp (`YYYY-MM-DD`).
    pub fn date_component(&self) -> Option<Date> {
        let prefix = self.timestamp.trim().get(..10)?;
        Date::parse(prefix, format_description!("[year]-[month]-[day]")).ok()
    }
}

pub(crate) fn parse_instant(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(parsed) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(parsed);
    }
    let naive = format_description!("[year]-[month]-[day]T[hour]:[minute][optional [:[second]]]");
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, naive) {
        return Some(parsed.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|date| date.midnight().assume_utc())
}

/// Render an instant the way browsers print `Date#toISOString`:
/// `2024-03-05T14:30:00.000Z`.
pub fn iso_string(instant: OffsetDateTime) -> String {
    let utc = instant.to_offset(UtcOffset::UTC);
    utc.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .or_else(|_| utc.format(&Rfc3339))
    .unwrap_or_default()
}

/// Short label for the table's time column: `2024-03-05 · 14:30`.
pub fn display_time(record: &ActivityRecord) -> String {
    match record.instant() {
        Some(instant) => {
            let utc = instant.to_offset(UtcOffset::UTC);
            let date = utc.format(format_description!("[year]-[month]-[day]"));
            let clock = utc.format(format_description!("[hour]:[minute]"));
            match (date, clock) {
                (Ok(date), Ok(clock)) => format!("{date} · {clock}"),
                _ => record.timestamp.clone(),
            }
        }
        None => record.timestamp.clone(),
    }
}
