//! ISO-8601 date parsing for due dates.
//!
//! Accepted date forms: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, `YYYYMMDD`,
//! `YYYY-DDD` (ordinal), `YYYY-Www[-D]` (ISO week) and a bare century
//! (`CC` or `±CCCC`, the first day of that century), optionally followed by
//! `T` or a space and a time of day with an optional zone. The time must be
//! valid but never moves the calendar date.

use chrono::{Duration, NaiveDate, Weekday};

pub const NORMALIZED_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    if !input.is_ascii() {
        return None;
    }

    let (date_part, time_part) = split_date_time(input)?;

    let date = parse_date_part(date_part)?;
    match time_part {
        Some(time) if !time.is_empty() && !is_valid_time(time) => None,
        _ => Some(date),
    }
}

pub fn is_valid_date(input: &str) -> bool {
    parse_iso_date(input).is_some()
}

/// Renders a valid date as `yyyy-MM-dd`.
pub fn normalize_date(input: &str) -> Option<String> {
    parse_iso_date(input).map(|date| date.format(NORMALIZED_DATE_FORMAT).to_string())
}

fn split_date_time(input: &str) -> Option<(&str, Option<&str>)> {
    let mut parts = input.split(['T', ' ']);
    let date_part = parts.next()?;
    let time_part = parts.next();

    if parts.next().is_some() {
        return None;
    }

    Some((date_part, time_part))
}

fn parse_date_part(s: &str) -> Option<NaiveDate> {
    let (year, rest) = split_year(s)?;
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    if rest.is_empty() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    if let Some(week_part) = rest.strip_prefix('W') {
        return parse_week_date(year, week_part);
    }

    if rest.len() == 3 && all_digits(rest) {
        return NaiveDate::from_yo_opt(year, rest.parse().ok()?);
    }

    let (month, day) = match rest.len() {
        2 => (rest, None),
        4 => (&rest[..2], Some(&rest[2..])),
        5 if rest.as_bytes()[2] == b'-' => (&rest[..2], Some(&rest[3..])),
        _ => return None,
    };

    if !all_digits(month) || !day.map_or(true, all_digits) {
        return None;
    }

    let day = match day {
        Some(day) => day.parse().ok()?,
        None => 1,
    };

    NaiveDate::from_ymd_opt(year, month.parse().ok()?, day)
}

fn split_year(s: &str) -> Option<(i32, &str)> {
    if let Some(year) = century_year(s) {
        return Some((year, ""));
    }

    let bytes = s.as_bytes();

    match bytes.first()? {
        b'+' | b'-' => {
            // Expanded year, six digits after the sign.
            let digits = s.get(1..7)?;
            if !all_digits(digits) {
                return None;
            }
            let year: i32 = digits.parse().ok()?;
            let year = if bytes[0] == b'-' { -year } else { year };
            Some((year, &s[7..]))
        }
        _ => {
            let digits = s.get(..4)?;
            if !all_digits(digits) {
                return None;
            }
            Some((digits.parse().ok()?, &s[4..]))
        }
    }
}

/// `CC` or `±CCCC` standing alone names the first year of that century.
fn century_year(s: &str) -> Option<i32> {
    let century: i32 = match s.as_bytes().first()? {
        b'+' | b'-' if s.len() == 5 && all_digits(&s[1..]) => s.parse().ok()?,
        _ if s.len() == 2 && all_digits(s) => s.parse().ok()?,
        _ => return None,
    };

    century.checked_mul(100)
}

fn parse_week_date(year: i32, s: &str) -> Option<NaiveDate> {
    let (week, day) = match s.len() {
        2 => (s, None),
        3 => (&s[..2], Some(&s[2..])),
        4 if s.as_bytes()[2] == b'-' => (&s[..2], Some(&s[3..])),
        _ => return None,
    };

    if !all_digits(week) || !day.map_or(true, all_digits) {
        return None;
    }

    let week: i64 = week.parse().ok()?;
    let day: i64 = match day {
        Some(day) => day.parse::<i64>().ok()? - 1,
        None => 0,
    };

    if !(1..=53).contains(&week) || !(0..=6).contains(&day) {
        return None;
    }

    // Week 53 of a 52-week year rolls into the following year.
    let first_monday = NaiveDate::from_isoywd_opt(year, 1, Weekday::Mon)?;
    first_monday.checked_add_signed(Duration::days((week - 1) * 7 + day))
}

fn is_valid_time(s: &str) -> bool {
    let (clock, zone) = match s.find(['Z', '+', '-']) {
        Some(index) => (&s[..index], Some(&s[index..])),
        None => (s, None),
    };

    if let Some(zone) = zone {
        if !is_valid_zone(zone) {
            return false;
        }
    }

    let mut rest = clock;
    let mut units = Vec::with_capacity(3);
    while !rest.is_empty() && units.len() < 3 {
        if !units.is_empty() {
            rest = rest.strip_prefix(':').unwrap_or(rest);
        }
        match take_time_unit(rest) {
            Some((value, remaining)) => {
                units.push(value);
                rest = remaining;
            }
            None => return false,
        }
    }

    if !rest.is_empty() || units.is_empty() {
        return false;
    }

    let hours = units[0];
    let minutes = units.get(1).copied().unwrap_or(0.0);
    let seconds = units.get(2).copied().unwrap_or(0.0);

    if hours == 24.0 {
        return minutes == 0.0 && seconds == 0.0;
    }

    (0.0..25.0).contains(&hours)
        && (0.0..60.0).contains(&minutes)
        && (0.0..60.0).contains(&seconds)
}

/// Two digits, optionally followed by a `.` or `,` fraction.
fn take_time_unit(s: &str) -> Option<(f64, &str)> {
    let whole = s.get(..2)?;
    if !all_digits(whole) {
        return None;
    }

    let rest = &s[2..];
    match rest.strip_prefix(['.', ',']) {
        Some(fraction) => {
            let digits = fraction.len()
                - fraction
                    .trim_start_matches(|c: char| c.is_ascii_digit())
                    .len();
            let value: f64 = format!("{}.{}0", whole, &fraction[..digits]).parse().ok()?;
            Some((value, &fraction[digits..]))
        }
        None => Some((whole.parse().ok()?, rest)),
    }
}

fn is_valid_zone(zone: &str) -> bool {
    if zone == "Z" {
        return true;
    }

    let offset = &zone[1..];
    let (hours, minutes) = match offset.len() {
        2 => (offset, None),
        4 => (&offset[..2], Some(&offset[2..])),
        5 if offset.as_bytes()[2] == b':' => (&offset[..2], Some(&offset[3..])),
        _ => return false,
    };

    if !all_digits(hours) {
        return false;
    }

    match minutes {
        Some(minutes) if all_digits(minutes) => {
            minutes.parse::<u32>().map_or(false, |m| m <= 59)
        }
        Some(_) => false,
        None => true,
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
