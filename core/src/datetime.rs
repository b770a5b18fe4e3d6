// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{Display, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc, offset::LocalResult};

/// Date format used on cards unless configured otherwise, e.g. `Thu, May 1 2025 18:30`.
pub const DEFAULT_DATE_FORMAT: &str = "%a, %b %-d %Y %H:%M";

/// Formats accepted for a typed local date-time. The first one is what a
/// `datetime-local` input produces.
const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses a local date-time as typed by the user. A bare date means midnight.
pub fn parse_local_datetime(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Converts a wall-clock time in `tz` to an absolute instant, handles local time ambiguities:
/// - `Single(dt)` returns directly;
/// - `Ambiguous(a, b)` takes the earlier one;
/// - `None` (local time does not exist, e.g., due to DST transition): falls back to UTC
///   combination.
pub fn local_to_utc<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Utc> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(a, b) => {
            tracing::warn!(%naive, "ambiguous local time, picking earliest");
            let (a, b) = (a.with_timezone(&Utc), b.with_timezone(&Utc));
            if a <= b { a } else { b }
        }
        LocalResult::None => {
            tracing::warn!(%naive, "local time does not exist, falling back to UTC");
            Utc.from_utc_datetime(&naive)
        }
    }
}

/// Whether `format` is a usable strftime pattern.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// Formats an instant as wall-clock time in `tz`. An unusable pattern falls
/// back to [`DEFAULT_DATE_FORMAT`].
pub fn format_in<Tz>(dt: &DateTime<Utc>, tz: &Tz, format: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let format = if is_valid_format(format) {
        format
    } else {
        tracing::debug!(format, "invalid date format, using default");
        DEFAULT_DATE_FORMAT
    };

    let mut out = String::new();
    if write!(out, "{}", dt.with_timezone(tz).format(format)).is_err() {
        // e.g. %Z-style items the offset type cannot render
        out.clear();
        let _ = write!(out, "{}", dt.with_timezone(tz).format(DEFAULT_DATE_FORMAT));
    }
    out
}
