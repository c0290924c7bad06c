#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure the selectors the dashboard widgets render with remain present in the
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled embedded desktop build.

How it works:
- The theme is embedded with `include_str!` (mirrors `desktop/src/main.rs`).
- A curated set of selectors / tokens must be present.
- When you rename a selector, update the component markup and REQUIRED_SELECTORS.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__lead",
    // Buttons
    ".button {",
    ".button--primary",
    // KPI cards
    ".kpi-grid",
    ".kpi-card",
    ".kpi-card__label",
    ".kpi-card__value",
    ".fade-update",
    ".fade-update--again",
    // Chart primitives
    ".chart-card",
    ".chart-card__title",
    ".chart-canvas",
    ".chart-canvas--empty",
    ".chart-bars",
    ".chart-bars__grid-row",
    ".chart-bars__grid-col",
    ".chart-bars__bar",
    ".chart-bars__label",
    ".chart-arcs",
    ".chart-line",
    ".chart-legend__swatch",
    // Activity log
    ".activity-filters",
    ".activity-table",
    ".activity-table__empty",
    ".export-status--success",
    ".export-status--error",
    // Dashboard + sparklines
    ".traffic-legend",
    ".traffic-legend__value",
    ".report-card",
    ".report-value",
    ".trend-up",
    ".trend-down",
    ".sparkline",
    // Media query token (sanity check responsive block exists)
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn flash_animations_are_paired() {
    // Alternating keyframes restart the highlight on every top-user change.
    let has_first = THEME_CSS.contains("@keyframes kpi-flash {");
    let has_again = THEME_CSS.contains("@keyframes kpi-flash-again");
    assert!(
        has_first && has_again,
        "KPI flash keyframes missing (first: {has_first}, again: {has_again})"
    );
}
