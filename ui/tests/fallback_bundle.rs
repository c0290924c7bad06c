use std::collections::{BTreeSet, HashSet};

/// Fallback bundle sanity checks.
///
/// The Arabic bundle is the only locale, so instead of comparing locales we
/// check that it is well formed: unique keys, no empty messages, and the CSV
/// header messages spelled exactly as exported files expect them.
const AR: &str = include_str!("../i18n/ar/learnadmin-ui.ftl");

#[test]
fn fallback_bundle_has_unique_non_empty_messages() {
    let messages = extract_messages(AR);
    assert!(!messages.is_empty(), "Fallback (ar) contains no keys.");

    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    let mut empty = BTreeSet::new();
    for (key, value) in &messages {
        if !seen.insert(key.clone()) {
            dups.insert(key.clone());
        }
        if value.trim().is_empty() {
            empty.insert(key.clone());
        }
    }

    assert!(dups.is_empty(), "Duplicate keys in ar: {dups:?}");
    assert!(empty.is_empty(), "Empty messages in ar: {empty:?}");
}

#[test]
fn csv_header_messages_match_export_format() {
    let messages = extract_messages(AR);
    let header: Vec<&str> = [
        "activity-col-user",
        "activity-col-action",
        "activity-col-entity",
        "activity-col-description",
        "activity-col-time",
    ]
    .iter()
    .map(|key| {
        messages
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_else(|| panic!("missing {key}"))
    })
    .collect();
    assert_eq!(header.join(","), "المستخدم,الحدث,الكيان,الوصف,الزمن");
}

#[test]
fn empty_state_message_is_stable() {
    let messages = extract_messages(AR);
    assert!(messages
        .iter()
        .any(|(k, v)| k == "activity-no-results" && v == "لا توجد نتائج"));
}

/// `key = value` pairs, single-line messages only.
fn extract_messages(src: &str) -> Vec<(String, String)> {
    let mut out = Vec::new();
    for line in src.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with('.') {
            continue;
        }
        if let Some((left, right)) = line.split_once('=') {
            let key = left.trim();
            if !key.is_empty() && !key.contains(' ') && !key.starts_with('-') {
                out.push((key.to_string(), right.trim().to_string()));
            }
        }
    }
    out
}
