//! CSV export of the filtered activity records.

use super::record::ActivityRecord;
use crate::t;

pub const EXPORT_FILENAME: &str = "admin-activity.csv";
pub const EXPORT_MIME: &str = "text/csv;charset=utf-8";

#[derive(Clone, Debug, PartialEq)]
pub enum ExportStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Localized header row: user, action, entity, description, time.
pub fn csv_headers() -> [String; 5] {
    [
        t!("activity-col-user"),
        t!("activity-col-action"),
        t!("activity-col-entity"),
        t!("activity-col-description"),
        t!("activity-col-time"),
    ]
}

/// Header line as-is, then one line per record with every field quoted.
pub fn build_csv(records: &[ActivityRecord], headers: &[String]) -> String {
    let mut csv = headers.join(",");
    csv.push('\n');
    for record in records {
        let line = [
            &record.user,
            &record.action,
            &record.entity,
            &record.description,
            &record.timestamp,
        ]
        .iter()
        .map(|field| quote(field))
        .collect::<Vec<_>>()
        .join(",");
        csv.push_str(&line);
        csv.push('\n');
    }
    csv
}

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Build and deliver the export. Returns the status line to show.
pub async fn export_activity(records: Vec<ActivityRecord>) -> Result<String, String> {
    let csv = build_csv(&records, &csv_headers());
    let delivery = download_bytes(EXPORT_FILENAME, EXPORT_MIME, csv.into_bytes()).await?;
    Ok(match delivery {
        Some(path) => t!("export-saved", path = path),
        None => t!("export-started"),
    })
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;

        let _ = mime;
        let dir = desktop_export_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        fs::write(&path, &bytes).map_err(|err| err.to_string())?;
        tracing::debug!(path = %path.display(), "activity export written");
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn desktop_export_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("org", "LearnAdmin", "LearnAdmin")
        .ok_or("Unable to determine export directory")?;
    Ok(dirs.data_dir().join("exports"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers() -> Vec<String> {
        ["المستخدم", "الحدث", "الكيان", "الوصف", "الزمن"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    #[test]
    fn quotes_every_field_and_doubles_quotes() {
        let records = vec![ActivityRecord::new(
            "سارة",
            "إضافة",
            "درس",
            r#"قال "مرحبا", ثم غادر"#,
            "2024-03-05T10:00:00.000Z",
        )];
        let csv = build_csv(&records, &headers());
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("المستخدم,الحدث,الكيان,الوصف,الزمن"));
        assert_eq!(
            lines.next(),
            Some(r#""سارة","إضافة","درس","قال ""مرحبا"", ثم غادر","2024-03-05T10:00:00.000Z""#)
        );
        assert!(csv.ends_with('\n'));
    }

    #[test]
    fn parsed_export_reproduces_records() {
        let records = vec![
            ActivityRecord::new("A \"quoted\"", "حذف", "قصة", "line\nbreak", "2024-03-05T10:00:00Z"),
            ActivityRecord::new("", "إضافة", "", "", ""),
        ];
        let csv = build_csv(&records, &headers());

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        assert_eq!(
            reader.headers().unwrap().iter().collect::<Vec<_>>(),
            vec!["المستخدم", "الحدث", "الكيان", "الوصف", "الزمن"]
        );
        let parsed: Vec<ActivityRecord> = reader
            .records()
            .map(|row| {
                let row = row.unwrap();
                ActivityRecord::new(&row[0], &row[1], &row[2], &row[3], &row[4])
            })
            .collect();
        assert_eq!(parsed, records);
    }

    #[test]
    fn empty_export_is_header_only() {
        assert_eq!(build_csv(&[], &headers()), "المستخدم,الحدث,الكيان,الوصف,الزمن\n");
    }

    #[test]
    fn localized_headers_match_source_text() {
        crate::i18n::init();
        assert_eq!(csv_headers().to_vec(), headers());
    }
}
