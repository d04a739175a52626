//! Calendar math
//!
//! Conversion between epoch milliseconds and ISO-8601 text, plus the
//! date-string recognition used by the lax date classifier. The civil
//! calendar conversion follows the standard days-from-civil algorithm.

use std::sync::OnceLock;

use regex::Regex;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Days since the epoch for a civil date (proleptic Gregorian)
fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Civil date for days since the epoch
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if month <= 2 { y + 1 } else { y }, month, day)
}

const fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if year % 4 == 0 && (year % 100 != 0 || year % 400 == 0) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Format epoch milliseconds as an ISO-8601 UTC timestamp
pub fn format_iso8601(millis: i64) -> String {
    let days = millis.div_euclid(MILLIS_PER_DAY);
    let mut rem = millis.rem_euclid(MILLIS_PER_DAY);
    let (year, month, day) = civil_from_days(days);

    let ms = rem % 1000;
    rem /= 1000;
    let sec = rem % 60;
    rem /= 60;
    let min = rem % 60;
    let hour = rem / 60;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}.{:03}Z",
        year, month, day, hour, min, sec, ms
    )
}

fn iso_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2})(?::(\d{2})(?:\.(\d{1,3}))?)?Z?)?$",
        )
        .unwrap()
    })
}

fn slash_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // MM/DD/YYYY
    RE.get_or_init(|| Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})$").unwrap())
}

/// Parse a date string to epoch milliseconds
///
/// Accepts ISO-8601 dates (with optional time component) and MM/DD/YYYY.
/// Component ranges are validated; anything else is None.
pub fn parse_date_string(s: &str) -> Option<i64> {
    let s = s.trim();

    let (year, month, day, hour, min, sec, ms) = if let Some(caps) = iso_date_re().captures(s) {
        let get = |i: usize| caps.get(i).map(|m| m.as_str().parse::<i64>().unwrap_or(0));
        (
            get(1)?,
            get(2)? as u32,
            get(3)? as u32,
            get(4).unwrap_or(0),
            get(5).unwrap_or(0),
            get(6).unwrap_or(0),
            get(7).unwrap_or(0),
        )
    } else if let Some(caps) = slash_date_re().captures(s) {
        let get = |i: usize| caps[i].parse::<i64>().unwrap_or(0);
        (get(3), get(1) as u32, get(2) as u32, 0, 0, 0, 0)
    } else {
        return None;
    };

    if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
        return None;
    }
    if hour > 23 || min > 59 || sec > 59 {
        return None;
    }

    let days = days_from_civil(year, month, day);
    Some(days * MILLIS_PER_DAY + ((hour * 60 + min) * 60 + sec) * 1000 + ms)
}
