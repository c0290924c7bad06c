//! End-to-end checks over the public widget data pipeline (no rendering).

use time::macros::date;
use ui::activity::export::build_csv;
use ui::activity::filter::{export_rows, visible_rows, FilterState};
use ui::activity::kpi::{self, ActivityKpis};
use ui::activity::ActivityRecord;
use ui::reports::datasets::{sparkline_chart, ConversionData, TrafficData};
use ui::reports::{MetricKey, ReportSnapshot};

fn headers() -> Vec<String> {
    ["المستخدم", "الحدث", "الكيان", "الوصف", "الزمن"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[test]
fn zero_records_render_zero_kpis() {
    let records: Vec<ActivityRecord> = Vec::new();
    let rows = visible_rows(&records, &FilterState::default());
    assert!(rows.is_empty());

    let kpis = ActivityKpis::compute(kpi::kpi_basis(&rows, &records), date!(2024-03-05));
    assert_eq!(kpis.total, 0);
    assert_eq!(kpis.top_user, "-");
    assert_eq!(kpis.adds_today, 0);
    assert_eq!(kpis.deletes_today, 0);

    let (labels, counts) = kpi::daily_counts(&records, date!(2024-03-05));
    assert_eq!(labels.len(), 7);
    assert!(counts.iter().all(|c| *c == 0.0));
    assert_eq!(build_csv(&rows, &headers()).lines().count(), 1);
}

#[test]
fn filtered_export_round_trips_in_input_order() {
    let records = vec![
        ActivityRecord::new("سارة", "إضافة", "درس", "درس \"الحروف\"", "2024-03-01T10:00:00Z"),
        ActivityRecord::new("أحمد", "حذف", "قصة", "قصة قديمة", "2024-03-04T10:00:00Z"),
        ActivityRecord::new("سارة", "حذف", "كلمة", "كلمة, مكررة", "2024-03-03T10:00:00Z"),
    ];
    let filter = FilterState {
        user: "سارة".into(),
        ..FilterState::default()
    };

    let exported = export_rows(&records, &filter);
    let csv = build_csv(&exported, &headers());
    let mut reader = csv::Reader::from_reader(csv.as_bytes());
    let parsed: Vec<ActivityRecord> = reader
        .records()
        .map(|row| {
            let row = row.unwrap();
            ActivityRecord::new(&row[0], &row[1], &row[2], &row[3], &row[4])
        })
        .collect();

    assert_eq!(parsed, vec![records[0].clone(), records[2].clone()]);

    let shown = visible_rows(&records, &filter);
    assert_eq!(shown[0].timestamp, "2024-03-03T10:00:00Z");
}

#[test]
fn empty_report_renders_every_fallback() {
    let snapshot = ReportSnapshot::empty();
    assert_eq!(TrafficData::resolve(&snapshot).values, vec![4305.0, 482.0, 859.0]);
    assert_eq!(ConversionData::resolve(&snapshot).series.len(), 2);
    for key in MetricKey::ALL {
        let chart = sparkline_chart(key, &snapshot.reading(key));
        assert_eq!(chart.datasets[0].data, vec![0.0, 0.0]);
    }
}
