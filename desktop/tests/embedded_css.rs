#![cfg(test)]
//! Ensures the embedded desktop CSS (shared theme) remains present & non-trivial.
//!
//! The desktop build inlines `ui/assets/theme/main.css`; a truncated or moved
//! file would only show up as unstyled widgets at runtime.
//!
//! If you rename or relocate the theme, update both this test and the
//! `include_str!` constant in `desktop/src/main.rs`.

const EMBEDDED_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[test]
fn embedded_css_file_exists_and_is_not_empty() {
    assert!(
        !EMBEDDED_CSS.trim().is_empty(),
        "Embedded CSS file appears to be empty."
    );
}

#[test]
fn embedded_css_contains_expected_tokens() {
    let required = ["--color-bg", "--color-primary", "body {", ".button--primary"];
    for token in required {
        assert!(
            EMBEDDED_CSS.contains(token),
            "Expected token `{token}` missing from embedded CSS"
        );
    }
}

#[test]
fn sample_data_ships_with_desktop_assets() {
    let activity = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/admin-activity.json"
    ));
    let report = include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/assets/data/report-data.json"
    ));
    assert!(activity.trim_start().starts_with('['));
    assert!(report.trim_start().starts_with('{'));
}
