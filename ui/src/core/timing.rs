//! Clock helpers: a monotonic millisecond counter for animations and UTC wall time.

use time::{Date, OffsetDateTime};

/// Milliseconds on a monotonic clock. Only differences are meaningful.
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use once_cell::sync::Lazy;
    use std::time::Instant;

    static ORIGIN: Lazy<Instant> = Lazy::new(Instant::now);
    ORIGIN.elapsed().as_secs_f64() * 1000.0
}

pub fn utc_now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}

/// Calendar day used for "today" KPIs and the trailing week chart.
pub fn today_utc() -> Date {
    utc_now().date()
}
