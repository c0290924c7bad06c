//! Every `t!` key used in the sources must exist in the fallback bundle, and
//! any extra locale must carry every fallback key.

use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "learnadmin-ui.ftl";

/// Fallback locale every other locale is checked against.
const FALLBACK_LOCALE: &str = "ar";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

/// Message IDs defined in a Fluent file. Comments, terms and attribute lines
/// are skipped.
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('='))
        .map(|(id, _)| id.trim())
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Literal first arguments of `t!("...")` across every `.rs` file under `root`.
fn referenced_keys(root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|e| e.path()));
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        for chunk in content.split("t!(\"").skip(1) {
            if let Some(end) = chunk.find('"') {
                let key = &chunk[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

fn extra_locales(i18n_root: &Path) -> Vec<String> {
    let mut dirs: Vec<String> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .filter(|e| e.path().is_dir())
                .filter_map(|e| e.file_name().to_str().map(str::to_string))
                .filter(|name| name != FALLBACK_LOCALE)
                .collect()
        })
        .unwrap_or_default();
    dirs.sort();
    dirs
}

#[test]
fn i18n_completeness() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let i18n_root = crate_root.join(I18N_DIR);

    let fallback_file = i18n_root.join(FALLBACK_LOCALE).join(FTL_FILENAME);
    let fallback_content =
        fs::read_to_string(&fallback_file).expect("Failed to read fallback FTL file");
    let fallback_keys = parse_ftl_keys(&fallback_content);
    assert!(
        !fallback_keys.is_empty(),
        "No message keys parsed from fallback FTL: {fallback_file:?}"
    );

    let referenced = referenced_keys(&crate_root.join("src"));
    let mut missing: Vec<_> = referenced
        .iter()
        .filter(|k| !fallback_keys.contains(*k))
        .cloned()
        .collect();
    missing.sort();
    assert!(
        missing.is_empty(),
        "Referenced translation keys missing in fallback ({}):\n{}",
        missing.len(),
        missing.join("\n")
    );

    let mut report = String::new();
    for locale in extra_locales(&i18n_root) {
        let content = fs::read_to_string(i18n_root.join(&locale).join(FTL_FILENAME))
            .unwrap_or_default();
        let keys = parse_ftl_keys(&content);
        let absent: Vec<_> = fallback_keys.difference(&keys).cloned().collect();
        if !absent.is_empty() {
            report.push_str(&format!("  {locale}: {}\n", absent.join(", ")));
        }
    }
    assert!(report.is_empty(), "Locales missing fallback keys:\n{report}");

    let unused: Vec<_> = fallback_keys
        .iter()
        .filter(|k| !referenced.contains(*k))
        .cloned()
        .collect();
    if !unused.is_empty() {
        eprintln!("[i18n] NOTE: fallback keys unused in sources: {}", unused.join(", "));
    }
}

#[test]
fn parser_skips_comments_and_terms() {
    let keys = parse_ftl_keys("# c\n-term = x\nnav-dashboard = لوحة\n  .attr = y\n");
    assert_eq!(keys.into_iter().collect::<Vec<_>>(), vec!["nav-dashboard"]);
}
