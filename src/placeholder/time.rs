//! Date and time placeholders.
//!
//! Every field is emitted twice, once under [`keys::TIME_LOCAL_BASE`] and once
//! under [`keys::TIME_UTC_BASE`], both derived from the same instant so that
//! neighbouring fields are mutually consistent.

use std::fmt::{self, Write};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Datelike, FixedOffset, Local, TimeZone, Timelike, Utc};

use super::keys::{self, time_key};
use super::value::PlaceholderSetBuilder;

/// Default pattern for the `custom` time field
pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The request instant as seen in the host's local zone.
#[derive(Debug, Clone, PartialEq)]
pub struct Now {
    pub local: DateTime<FixedOffset>,
    /// Abbreviation reported for `timezone_name`
    pub zone_name: String,
}

impl Now {
    pub fn utc(&self) -> DateTime<Utc> {
        self.local.with_timezone(&Utc)
    }
}

/// Source of the request instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> Now;
}

/// Wall clock in the process' local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Now {
        let local = Local::now().fixed_offset();
        let zone_name = numeric_zone_name(local.offset());
        Now { local, zone_name }
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock {
    now: Now,
}

impl FixedClock {
    pub fn new(local: DateTime<FixedOffset>, zone_name: impl Into<String>) -> Self {
        Self {
            now: Now {
                local,
                zone_name: zone_name.into(),
            },
        }
    }

    /// Fixed clock whose zone name is derived from the offset
    pub fn from_offset(local: DateTime<FixedOffset>) -> Self {
        let zone_name = numeric_zone_name(local.offset());
        Self::new(local, zone_name)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Now {
        self.now.clone()
    }
}

/// Zone name for an offset with no known abbreviation: `UTC`, `+05`, `-0330`.
///
/// chrono's `Local` does not expose tz database abbreviations.
pub fn numeric_zone_name(offset: &FixedOffset) -> String {
    let secs = offset.local_minus_utc();
    if secs == 0 {
        return "UTC".to_string();
    }
    let sign = if secs < 0 { '-' } else { '+' };
    let secs = secs.unsigned_abs();
    let (hours, minutes) = (secs / 3600, (secs % 3600) / 60);
    if minutes == 0 {
        format!("{}{:02}", sign, hours)
    } else {
        format!("{}{:02}{:02}", sign, hours, minutes)
    }
}

/// Returns the pattern back when chrono cannot parse one of its specifiers.
pub fn find_invalid_format_item(format: &str) -> Option<String> {
    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        Some(format.to_string())
    } else {
        None
    }
}

/// Render `t` with a strftime pattern.
///
/// Returns `None` when chrono refuses the pattern; configuration validation
/// rejects such patterns at startup, so this only happens for unvalidated
/// providers.
pub fn render_custom<Tz>(t: &DateTime<Tz>, format: &str) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let mut out = String::new();
    write!(out, "{}", t.format(format)).ok()?;
    Some(out)
}

pub(crate) fn set_time_placeholders<Tz>(
    out: &mut PlaceholderSetBuilder,
    base: &str,
    t: &DateTime<Tz>,
    zone_name: &str,
    format: &str,
) where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let numeric = [
        ("month", t.month()),
        ("day", t.day()),
        ("hour", t.hour()),
        ("minute", t.minute()),
        ("second", t.second()),
    ];
    for (field, value) in numeric {
        out.set(time_key(base, field), value);
        out.set(
            time_key(base, &format!("{}_padded", field)),
            format!("{:02}", value),
        );
    }

    out.set(
        time_key(base, "timezone_offset"),
        t.format("%z").to_string(),
    );
    out.set(time_key(base, "timezone_name"), zone_name);

    let iso = t.iso_week();
    out.set(time_key(base, "iso_week"), iso.week());
    out.set(time_key(base, "iso_year"), iso.year());

    let custom = render_custom(t, format).unwrap_or_else(|| {
        tracing::warn!(format = %format, "Custom time format could not be rendered");
        String::new()
    });
    out.set(time_key(base, "custom"), custom);
}

/// Set local and UTC time placeholders for one instant.
pub(crate) fn set_all_time_placeholders(
    out: &mut PlaceholderSetBuilder,
    now: &Now,
    format: &str,
) {
    set_time_placeholders(out, keys::TIME_LOCAL_BASE, &now.local, &now.zone_name, format);
    set_time_placeholders(out, keys::TIME_UTC_BASE, &now.utc(), "UTC", format);
}
