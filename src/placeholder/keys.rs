//! Placeholder key namespace.
//!
//! Downstream configuration references these keys literally, so they must
//! never change.

pub const VERSION_SIMPLE: &str = "extra.caddy.version.simple";
pub const VERSION_FULL: &str = "extra.caddy.version.full";

pub const RAND_FLOAT: &str = "extra.rand.float";
pub const RAND_INT: &str = "extra.rand.int";

pub const LOADAVG_1: &str = "extra.loadavg.1";
pub const LOADAVG_5: &str = "extra.loadavg.5";
pub const LOADAVG_15: &str = "extra.loadavg.15";

pub const HOSTINFO_UPTIME: &str = "extra.hostinfo.uptime";

pub const RUNTIME_FLAVOR: &str = "extra.tokio.runtime.flavor";
pub const RUNTIME_WORKERS: &str = "extra.tokio.runtime.workers";
pub const RUNTIME_ALIVE_TASKS: &str = "extra.tokio.runtime.alive_tasks";

/// Base path for local time fields
pub const TIME_LOCAL_BASE: &str = "extra.time.now";
/// Base path for UTC time fields
pub const TIME_UTC_BASE: &str = "extra.time.now.utc";

/// Fields emitted under each time base
pub const TIME_FIELDS: [&str; 15] = [
    "month",
    "month_padded",
    "day",
    "day_padded",
    "hour",
    "hour_padded",
    "minute",
    "minute_padded",
    "second",
    "second_padded",
    "timezone_offset",
    "timezone_name",
    "iso_week",
    "iso_year",
    "custom",
];

/// Join a time base and a field into a full key
pub fn time_key(base: &str, field: &str) -> String {
    format!("{}.{}", base, field)
}
