//! Tolerant reader over the report payload.
//!
//! The endpoints return a loose JSON object: flat metric keys
//! (`students`, `students_history`, `students_change`, ...) plus optional
//! `traffic` and `conversions` sections. Anything with the wrong shape reads
//! as absent instead of failing the whole payload.

use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKey {
    Students,
    Lessons,
    Stories,
    Words,
    Courses,
    Teachers,
    Notifications,
}

impl MetricKey {
    pub const ALL: [MetricKey; 7] = [
        MetricKey::Students,
        MetricKey::Lessons,
        MetricKey::Stories,
        MetricKey::Words,
        MetricKey::Courses,
        MetricKey::Teachers,
        MetricKey::Notifications,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MetricKey::Students => "students",
            MetricKey::Lessons => "lessons",
            MetricKey::Stories => "stories",
            MetricKey::Words => "words",
            MetricKey::Courses => "courses",
            MetricKey::Teachers => "teachers",
            MetricKey::Notifications => "notifications",
        }
    }

    /// Sparkline colour.
    pub fn color(self) -> &'static str {
        match self {
            MetricKey::Students => "#7C5DFA",
            MetricKey::Lessons => "#FF4C61",
            MetricKey::Stories => "#4BDE97",
            MetricKey::Words => "#487FFF",
            MetricKey::Courses => "#FACC15",
            MetricKey::Teachers => "#43A9D4",
            MetricKey::Notifications => "#6B7280",
        }
    }
}

/// What the payload says about one metric.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricReading {
    pub value: Option<f64>,
    /// `Some` only when the payload carried an array; non-numeric entries are dropped.
    pub history: Option<Vec<f64>>,
    /// Server-computed change, preferred over one derived from history.
    pub change: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrafficSection {
    pub labels: Option<Vec<String>>,
    pub values: Option<Vec<f64>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesEntry {
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background: Vec<String>,
    pub border_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionSection {
    pub labels: Option<Vec<String>>,
    pub datasets: Option<Vec<SeriesEntry>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSnapshot {
    fields: Map<String, Value>,
}

impl ReportSnapshot {
    /// A snapshot with no data; every reading is empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Non-object payloads read as empty.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::empty(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn reading(&self, key: MetricKey) -> MetricReading {
        let name = key.as_str();
        let history = self
            .fields
            .get(&format!("{name}_history"))
            .and_then(number_array)
            .or_else(|| {
                self.fields
                    .get(&format!("{name}History"))
                    .and_then(number_array)
            });
        MetricReading {
            value: self.fields.get(name).and_then(Value::as_f64),
            history,
            change: self
                .fields
                .get(&format!("{name}_change"))
                .and_then(Value::as_f64),
        }
    }

    pub fn traffic(&self) -> TrafficSection {
        let Some(section) = self.fields.get("traffic").and_then(Value::as_object) else {
            return TrafficSection::default();
        };
        TrafficSection {
            labels: section.get("labels").and_then(string_array),
            values: section.get("values").and_then(|v| {
                v.as_array()
                    .map(|items| items.iter().map(|i| i.as_f64().unwrap_or(0.0)).collect())
            }),
        }
    }

    pub fn conversions(&self) -> ConversionSection {
        let Some(section) = self.fields.get("conversions").and_then(Value::as_object) else {
            return ConversionSection::default();
        };
        ConversionSection {
            labels: section.get("labels").and_then(string_array),
            datasets: section
                .get("datasets")
                .and_then(Value::as_array)
                .map(|items| items.iter().filter_map(series_entry).collect()),
        }
    }
}

fn number_array(value: &Value) -> Option<Vec<f64>> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(Value::as_f64).collect())
}

fn string_array(value: &Value) -> Option<Vec<String>> {
    value.as_array().map(|items| {
        items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    })
}

fn series_entry(value: &Value) -> Option<SeriesEntry> {
    let object = value.as_object()?;
    let data = object
        .get("data")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(|i| i.as_f64().unwrap_or(0.0)).collect())
        .unwrap_or_default();
    let background = match object.get("backgroundColor") {
        Some(Value::String(color)) => vec![color.clone()],
        Some(Value::Array(colors)) => colors
            .iter()
            .filter_map(|c| c.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    };
    Some(SeriesEntry {
        label: object.get("label").and_then(Value::as_str).map(str::to_string),
        data,
        background,
        border_color: object
            .get("borderColor")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}
