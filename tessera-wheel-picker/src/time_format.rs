//! Time string parsing and formatting helpers.
//!
//! ## Usage
//!
//! Convert between `"HH:MM"` value strings, 12/24-hour clocks, and localized
//! digits.

/// Digits used when rendering numbers with Persian numerals.
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Half-day marker for 12-hour clocks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayPeriod {
    /// Ante meridiem.
    Am,
    /// Post meridiem.
    Pm,
}

impl DayPeriod {
    /// Returns the canonical uppercase marker used in value strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            DayPeriod::Am => "AM",
            DayPeriod::Pm => "PM",
        }
    }
}

/// Parses one time component as an unsigned integer.
///
/// Surrounding whitespace is ignored, but any other stray character makes the
/// whole component unparseable, so `" 05 "` is `5` while `"5x"` is `None`.
fn parse_number(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

/// # parse_time
///
/// Parses an `"HH:MM"` style value string into hour, minute, and optional
/// day period components.
///
/// When `is_12_hour` is set, or when the string itself carries an `AM`/`PM`
/// marker, the result is interpreted on a 12-hour clock: the hour is clamped
/// to `1..=12` and a period is always returned. Otherwise the components are
/// returned verbatim with no period.
///
/// Unparseable components fall back to defaults instead of failing: hour
/// `12` on a 12-hour clock, otherwise `0`; minute always `0`.
///
/// ## Examples
///
/// ```
/// use tessera_wheel_picker::time_format::{DayPeriod, parse_time};
///
/// assert_eq!(parse_time("14:05", false), (14, 5, None));
/// assert_eq!(parse_time("2:30 PM", true), (2, 30, Some(DayPeriod::Pm)));
/// ```
pub fn parse_time(value: &str, is_12_hour: bool) -> (u32, u32, Option<DayPeriod>) {
    if value.is_empty() {
        let period = is_12_hour.then_some(DayPeriod::Am);
        return (0, 0, period);
    }

    let upper = value.to_uppercase();
    let has_period = upper.contains("AM") || upper.contains("PM");

    if has_period || is_12_hour {
        let period = if upper.contains("PM") {
            DayPeriod::Pm
        } else {
            DayPeriod::Am
        };
        let cleaned = upper.replace("AM", "").replace("PM", "");
        let cleaned = cleaned.trim();
        let mut parts = cleaned.split(':');
        let hour = parts
            .next()
            .and_then(parse_number)
            .unwrap_or(12)
            .clamp(1, 12);
        let minute = parts.next().and_then(parse_number).unwrap_or(0);
        (hour, minute, Some(period))
    } else {
        let mut parts = value.split(':');
        let hour = parts.next().and_then(parse_number).unwrap_or(0);
        let minute = parts.next().and_then(parse_number).unwrap_or(0);
        (hour, minute, None)
    }
}

/// # format_time
///
/// Formats hour and minute as a zero-padded `"HH:MM"` value string, with the
/// day period marker appended when one is given.
///
/// ## Examples
///
/// ```
/// use tessera_wheel_picker::time_format::{DayPeriod, format_time};
///
/// assert_eq!(format_time(14, 5, None), "14:05");
/// assert_eq!(format_time(2, 30, Some(DayPeriod::Pm)), "02:30 PM");
/// ```
pub fn format_time(hour: u32, minute: u32, period: Option<DayPeriod>) -> String {
    match period {
        Some(period) => format!("{hour:02}:{minute:02} {}", period.as_str()),
        None => format!("{hour:02}:{minute:02}"),
    }
}

/// Converts a 24-hour clock hour into its 12-hour counterpart and period.
///
/// Midnight maps to `12 AM` and noon to `12 PM`.
pub fn to_12_hour(hour: u32) -> (u32, DayPeriod) {
    match hour {
        0 => (12, DayPeriod::Am),
        12 => (12, DayPeriod::Pm),
        hour if hour > 12 => (hour - 12, DayPeriod::Pm),
        hour => (hour, DayPeriod::Am),
    }
}

/// Converts a 12-hour clock hour and period into the 24-hour hour.
///
/// `12 AM` maps to `0` and `12 PM` stays `12`.
pub fn to_24_hour(hour: u32, period: DayPeriod) -> u32 {
    match period {
        DayPeriod::Am => {
            if hour == 12 {
                0
            } else {
                hour
            }
        }
        DayPeriod::Pm => {
            if hour == 12 {
                12
            } else {
                hour + 12
            }
        }
    }
}

/// # format_number
///
/// Formats a wheel item number as a zero-padded two-digit string, optionally
/// transliterated to Persian numerals for RTL locales.
///
/// ## Examples
///
/// ```
/// use tessera_wheel_picker::time_format::format_number;
///
/// assert_eq!(format_number(5, false), "05");
/// assert_eq!(format_number(5, true), "۰۵");
/// ```
pub fn format_number(value: u32, persian_numerals: bool) -> String {
    let padded = format!("{value:02}");
    if !persian_numerals {
        return padded;
    }
    padded
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => PERSIAN_DIGITS[digit as usize],
            None => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_24_hour_values() {
        assert_eq!(parse_time("14:05", false), (14, 5, None));
        assert_eq!(parse_time("00:00", false), (0, 0, None));
        assert_eq!(parse_time("23:59", false), (23, 59, None));
    }

    #[test]
    fn parses_12_hour_values() {
        assert_eq!(parse_time("2:30 PM", true), (2, 30, Some(DayPeriod::Pm)));
        assert_eq!(parse_time("12:00 AM", true), (12, 0, Some(DayPeriod::Am)));
        assert_eq!(parse_time("11:45 pm", true), (11, 45, Some(DayPeriod::Pm)));
    }

    #[test]
    fn period_marker_wins_over_24_hour_flag() {
        assert_eq!(parse_time("2:30 PM", false), (2, 30, Some(DayPeriod::Pm)));
    }

    #[test]
    fn missing_period_defaults_to_am_on_12_hour_clock() {
        assert_eq!(parse_time("9:15", true), (9, 15, Some(DayPeriod::Am)));
    }

    #[test]
    fn empty_value_uses_clock_defaults() {
        assert_eq!(parse_time("", false), (0, 0, None));
        assert_eq!(parse_time("", true), (0, 0, Some(DayPeriod::Am)));
    }

    #[test]
    fn unparseable_components_fall_back() {
        assert_eq!(parse_time("xx:yy", false), (0, 0, None));
        assert_eq!(parse_time("xx:yy", true), (12, 0, Some(DayPeriod::Am)));
        assert_eq!(parse_time("14", false), (14, 0, None));
    }

    #[test]
    fn partially_numeric_components_fall_back() {
        assert_eq!(parse_time("5x:30", false), (0, 30, None));
        assert_eq!(parse_time("5x:30 PM", true), (12, 30, Some(DayPeriod::Pm)));
        assert_eq!(parse_time("14:3o", false), (14, 0, None));
    }

    #[test]
    fn clamps_12_hour_hours() {
        assert_eq!(parse_time("0:30 AM", true), (1, 30, Some(DayPeriod::Am)));
        assert_eq!(parse_time("27:00 PM", true), (12, 0, Some(DayPeriod::Pm)));
    }

    #[test]
    fn formats_value_strings() {
        assert_eq!(format_time(14, 5, None), "14:05");
        assert_eq!(format_time(0, 0, None), "00:00");
        assert_eq!(format_time(2, 30, Some(DayPeriod::Pm)), "02:30 PM");
        assert_eq!(format_time(12, 0, Some(DayPeriod::Am)), "12:00 AM");
    }

    #[test]
    fn format_then_parse_round_trips() {
        for (hour, minute) in [(0, 0), (9, 5), (14, 5), (23, 59)] {
            let value = format_time(hour, minute, None);
            assert_eq!(parse_time(&value, false), (hour, minute, None));
        }
        for (hour, minute, period) in [(12, 0, DayPeriod::Am), (2, 30, DayPeriod::Pm)] {
            let value = format_time(hour, minute, Some(period));
            assert_eq!(parse_time(&value, true), (hour, minute, Some(period)));
        }
    }

    #[test]
    fn converts_between_clocks() {
        assert_eq!(to_12_hour(0), (12, DayPeriod::Am));
        assert_eq!(to_12_hour(5), (5, DayPeriod::Am));
        assert_eq!(to_12_hour(12), (12, DayPeriod::Pm));
        assert_eq!(to_12_hour(14), (2, DayPeriod::Pm));

        assert_eq!(to_24_hour(12, DayPeriod::Am), 0);
        assert_eq!(to_24_hour(2, DayPeriod::Pm), 14);
        assert_eq!(to_24_hour(12, DayPeriod::Pm), 12);
        assert_eq!(to_24_hour(9, DayPeriod::Am), 9);
    }

    #[test]
    fn clock_conversion_round_trips() {
        for hour in 0..24 {
            let (twelve, period) = to_12_hour(hour);
            assert_eq!(to_24_hour(twelve, period), hour);
        }
    }

    #[test]
    fn renders_persian_numerals() {
        assert_eq!(format_number(5, true), "۰۵");
        assert_eq!(format_number(5, false), "05");
        assert_eq!(format_number(59, true), "۵۹");
        assert_eq!(format_number(0, true), "۰۰");
    }
}
