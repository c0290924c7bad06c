use serde_json::Value;

use super::snapshot::ReportSnapshot;
use crate::core::config::DashboardConfig;
use crate::core::fetch::{fetch_json, FetchError};

/// Try each configured report source in order; the first JSON body wins.
pub async fn fetch_report(config: &DashboardConfig) -> Result<ReportSnapshot, FetchError> {
    let mut last_error = FetchError::Unsupported("no report sources configured".to_string());
    for path in &config.report_urls {
        let location = config.resolve(path);
        match fetch_json::<Value>(&location).await {
            Ok(body) => {
                tracing::debug!(source = %location, "report payload loaded");
                return Ok(ReportSnapshot::from_value(body));
            }
            Err(err) => {
                tracing::debug!(source = %location, "report source failed: {err}");
                last_error = err;
            }
        }
    }
    Err(last_error)
}

/// The report, or the empty snapshot when no source answered. Every widget
/// built on the report renders its fallback dataset from the empty snapshot.
pub async fn load_report(config: &DashboardConfig, widget: &str) -> ReportSnapshot {
    match fetch_report(config).await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            tracing::warn!(widget, "report unavailable, using fallback data: {err}");
            ReportSnapshot::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::MetricKey;
    use std::fs;

    fn scratch_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("learnadmin-{tag}-{}", std::process::id()));
        fs::create_dir_all(dir.join("assets/data")).unwrap();
        dir
    }

    #[test]
    fn falls_through_to_static_file() {
        let dir = scratch_dir("report-static");
        fs::write(
            dir.join("assets/data/report-data.json"),
            r#"{"students": 12, "students_history": [10, 12]}"#,
        )
        .unwrap();
        let config = DashboardConfig::default().with_asset_root(dir.to_string_lossy());

        let snapshot = futures::executor::block_on(fetch_report(&config)).unwrap();
        assert_eq!(snapshot.reading(MetricKey::Students).value, Some(12.0));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn malformed_body_moves_to_next_source() {
        let dir = scratch_dir("report-malformed");
        fs::write(dir.join("assets/data/broken.json"), "{ not json").unwrap();
        fs::write(dir.join("assets/data/good.json"), r#"{"words": 3}"#).unwrap();
        let config = DashboardConfig {
            report_urls: vec!["assets/data/broken.json".into(), "assets/data/good.json".into()],
            ..DashboardConfig::default()
        }
        .with_asset_root(dir.to_string_lossy());

        let snapshot = futures::executor::block_on(fetch_report(&config)).unwrap();
        assert_eq!(snapshot.reading(MetricKey::Words).value, Some(3.0));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn total_failure_yields_empty_snapshot() {
        let config = DashboardConfig {
            report_urls: vec!["/nowhere/reports".into(), "/nowhere/report-data.json".into()],
            ..DashboardConfig::default()
        };
        assert!(futures::executor::block_on(fetch_report(&config)).is_err());
        let snapshot = futures::executor::block_on(load_report(&config, "test"));
        assert!(snapshot.is_empty());
    }
}
