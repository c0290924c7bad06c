//! Dashboard configuration
//!
//! Data locations for every widget. The web build lets the host page inject
//! the API base through a `<meta>` tag:
//!
//! ```html
//! <meta name="learnadmin:api-base" content="https://admin.example.org">
//! ```
//!
//! Server-rendered activity rows live in a table the widgets never render
//! themselves, marked with `data-activity-source`. A page that marks its rows
//! differently names them with `<meta name="learnadmin:activity-rows">`.
//!
//! The desktop launcher points `asset_root` at its bundled resource directory.

/// Activity log JSON, relative to the page (web) or asset root (desktop).
pub const ACTIVITY_URL: &str = "assets/data/admin-activity.json";
/// Primary report endpoint.
pub const REPORTS_API_PATH: &str = "/api/reports";
/// Static report snapshot used when the API is unavailable.
pub const REPORTS_STATIC_URL: &str = "assets/data/report-data.json";
/// Rows of the host page table used when the activity JSON cannot be loaded.
pub const ACTIVITY_TABLE_ROWS: &str = "table[data-activity-source] tbody tr";
/// Attribute marking the host-owned activity table.
pub const ACTIVITY_SOURCE_ATTR: &str = "data-activity-source";

const META_API_BASE: &str = "learnadmin:api-base";
const META_ACTIVITY_ROWS: &str = "learnadmin:activity-rows";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Prefix for absolute `/api/...` paths. `None` keeps them same-origin on web.
    pub api_base: Option<String>,
    pub activity_url: String,
    /// Report sources in fallback order.
    pub report_urls: Vec<String>,
    /// Selector for the pre-rendered activity rows on the host page.
    pub activity_table_rows: String,
    /// Directory that relative data paths resolve against on desktop
    /// (the one containing `assets/`).
    pub asset_root: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            activity_url: ACTIVITY_URL.to_string(),
            report_urls: vec![REPORTS_API_PATH.to_string(), REPORTS_STATIC_URL.to_string()],
            activity_table_rows: ACTIVITY_TABLE_ROWS.to_string(),
            asset_root: None,
        }
    }
}

impl DashboardConfig {
    /// Build the configuration for the current platform.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.api_base = read_meta(META_API_BASE);
        if let Some(selector) = read_meta(META_ACTIVITY_ROWS) {
            config.activity_table_rows = selector;
        }
        config
    }

    pub fn with_asset_root(mut self, root: impl Into<String>) -> Self {
        self.asset_root = Some(root.into());
        self
    }

    pub fn with_api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Resolve a configured data path to the location handed to the fetch layer.
    ///
    /// - `http(s)://` URLs pass through unchanged.
    /// - `/api/...` style paths are prefixed with `api_base` when one is set.
    /// - Relative paths are joined onto `asset_root` when one is set.
    pub fn resolve(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        if path.starts_with('/') {
            return match &self.api_base {
                Some(base) => format!("{}{}", base.trim_end_matches('/'), path),
                None => path.to_string(),
            };
        }
        match &self.asset_root {
            Some(root) => format!("{}/{}", root.trim_end_matches('/'), path),
            None => path.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_meta(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{name}\"]");
    let element = document.query_selector(&selector).ok()??;
    element
        .get_attribute("content")
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(not(target_arch = "wasm32"))]
fn read_meta(_name: &str) -> Option<String> {
    None
}
