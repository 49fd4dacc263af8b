//! Time-of-day formatting for log entries.

#[cfg(all(test, not(feature = "csr")))]
#[path = "time_test.rs"]
mod time_test;

/// Format an epoch-milliseconds timestamp as a time-of-day string.
///
/// In the browser this defers to the platform locale via `Date`; the
/// native fallback renders `HH:MM:SS` in UTC, which keeps rendering
/// deterministic under tests.
pub fn locale_time(ts_ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ts_ms))
            .to_locale_time_string("default")
            .into()
    }
    #[cfg(not(feature = "csr"))]
    {
        if !ts_ms.is_finite() {
            return "00:00:00".to_owned();
        }
        #[allow(clippy::cast_possible_truncation)]
        let secs = (ts_ms / 1000.0) as i64;
        let day = secs.rem_euclid(86_400);
        format!("{:02}:{:02}:{:02}", day / 3600, (day % 3600) / 60, day % 60)
    }
}
