//! Wall-clock snapshots for content that renders local time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Local calendar time captured at one instant.
pub struct ClockSnapshot {
    /// Four-digit year.
    pub year: u32,
    /// Month in `1..=12`.
    pub month: u32,
    /// Day of month in `1..=31`.
    pub day: u32,
    /// Hour in `0..=23`.
    pub hour: u32,
    /// Minute in `0..=59`.
    pub minute: u32,
    /// Second in `0..=59`.
    pub second: u32,
}

impl ClockSnapshot {
    /// Captures the current local time. Non-browser builds report the unix epoch.
    pub fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self::from_js_date(&date);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::epoch()
        }
    }

    /// Captures local time for a unix-millisecond timestamp.
    pub fn at_unix_ms(unix_ms: u64) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(unix_ms as f64));
            return Self::from_js_date(&date);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let total_seconds = unix_ms / 1000;
            let mut snapshot = Self::epoch();
            snapshot.hour = ((total_seconds / 3600) % 24) as u32;
            snapshot.minute = ((total_seconds / 60) % 60) as u32;
            snapshot.second = (total_seconds % 60) as u32;
            snapshot
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn epoch() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn from_js_date(date: &js_sys::Date) -> Self {
        Self {
            year: date.get_full_year(),
            month: date.get_month() + 1,
            day: date.get_date(),
            hour: date.get_hours(),
            minute: date.get_minutes(),
            second: date.get_seconds(),
        }
    }

    /// Formats the time as `HH:MM:SS`.
    pub fn time_label(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Formats the date as `YYYY-MM-DD`.
    pub fn date_label(&self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Returns the current unix time in milliseconds. Non-browser builds report `0`.
pub fn now_unix_ms() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return js_sys::Date::now().max(0.0) as u64;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_zero_padded() {
        let snapshot = ClockSnapshot {
            year: 2024,
            month: 1,
            day: 5,
            hour: 7,
            minute: 3,
            second: 9,
        };
        assert_eq!(snapshot.time_label(), "07:03:09");
        assert_eq!(snapshot.date_label(), "2024-01-05");
    }

    #[test]
    fn unix_ms_maps_to_time_of_day() {
        let snapshot = ClockSnapshot::at_unix_ms((2 * 3600 + 5 * 60 + 30) * 1000);
        assert_eq!(snapshot.time_label(), "02:05:30");
    }
}
