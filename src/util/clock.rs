//! Wall-clock access shared by chat and onboarding.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in whole milliseconds since the Unix epoch.
///
/// Uses `Date.now()` in the browser and the system clock elsewhere.
#[allow(clippy::cast_possible_truncation)]
pub fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// `HH:MM:SS` for an epoch-millisecond timestamp.
///
/// The browser formats in the visitor's local time zone; elsewhere the
/// result is UTC.
#[allow(clippy::cast_precision_loss)]
pub fn format_time(ms: i64) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms as f64));
        String::from(date.to_locale_time_string("en-GB"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let secs = ms.div_euclid(1000).rem_euclid(86_400);
        format!("{:02}:{:02}:{:02}", secs / 3600, secs / 60 % 60, secs % 60)
    }
}
