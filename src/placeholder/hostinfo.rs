//! Host metric placeholders: load averages and uptime.

use std::time::Duration;

use super::keys;
use super::value::PlaceholderSetBuilder;
use crate::metrics::HostMetricFailures;

/// Substituted for the uptime value when it cannot be read
pub const UPTIME_ERROR: &str = "error retrieving uptime";

/// Load averages over the last 1, 5 and 15 minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadAverage {
    pub one: f64,
    pub five: f64,
    pub fifteen: f64,
}

/// Read-only view of the host operating system.
///
/// Each lookup may fail independently; failures are reported as `None`.
pub trait HostMetrics: Send + Sync {
    fn load_average(&self) -> Option<LoadAverage>;
    fn uptime(&self) -> Option<Duration>;
}

/// Host metrics read from the operating system.
///
/// Load averages come from `getloadavg(3)`. On Linux uptime comes from
/// `sysinfo(2)`; elsewhere it comes from the `sysinfo` crate. Each lookup
/// answers `None` when the underlying call fails rather than reporting zeros.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHostMetrics;

impl HostMetrics for SystemHostMetrics {
    fn load_average(&self) -> Option<LoadAverage> {
        let (count, samples) = read_loadavg();
        let load = load_from_samples(count, samples);
        if load.is_none() {
            tracing::debug!(count, error = %std::io::Error::last_os_error(), "getloadavg failed");
        }
        load
    }

    fn uptime(&self) -> Option<Duration> {
        read_uptime()
    }
}

#[cfg(any(target_os = "linux", target_os = "macos", target_os = "freebsd"))]
#[allow(unsafe_code)]
fn read_loadavg() -> (i32, [f64; 3]) {
    let mut samples = [0f64; 3];
    // Safety: `samples` is a valid buffer of exactly three doubles and
    // getloadavg writes at most `nelem` entries into it.
    let count = unsafe { libc::getloadavg(samples.as_mut_ptr(), 3) };
    (count, samples)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "freebsd")))]
fn read_loadavg() -> (i32, [f64; 3]) {
    (-1, [0.0; 3])
}

#[cfg(target_os = "linux")]
#[allow(unsafe_code)]
fn read_uptime() -> Option<Duration> {
    // Safety: `libc::sysinfo` is a plain C struct for which all-zero bytes
    // are a valid value; the kernel fills it in place.
    let mut info: libc::sysinfo = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::sysinfo(&mut info) };
    if ret != 0 {
        tracing::debug!(error = %std::io::Error::last_os_error(), "sysinfo failed");
    }
    uptime_from_sysinfo(ret, i64::from(info.uptime))
}

#[cfg(not(target_os = "linux"))]
fn read_uptime() -> Option<Duration> {
    // sysinfo reports 0 when it cannot read the boot time
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        return None;
    }
    match sysinfo::System::uptime() {
        0 => None,
        secs => Some(Duration::from_secs(secs)),
    }
}

/// Map the result of `getloadavg(3)`: anything short of three finite,
/// non-negative samples is a failed lookup.
fn load_from_samples(count: i32, samples: [f64; 3]) -> Option<LoadAverage> {
    if count < 3 || samples.iter().any(|v| !v.is_finite() || *v < 0.0) {
        return None;
    }
    let [one, five, fifteen] = samples;
    Some(LoadAverage { one, five, fifteen })
}

/// Map the result of `sysinfo(2)`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn uptime_from_sysinfo(ret: i32, uptime_secs: i64) -> Option<Duration> {
    if ret != 0 {
        return None;
    }
    u64::try_from(uptime_secs).ok().map(Duration::from_secs)
}

/// Host metrics with preset answers.
#[derive(Debug, Clone, Default)]
pub struct StaticHostMetrics {
    pub load: Option<LoadAverage>,
    pub uptime: Option<Duration>,
}

impl StaticHostMetrics {
    /// Every lookup fails
    pub fn unavailable() -> Self {
        Self::default()
    }
}

impl HostMetrics for StaticHostMetrics {
    fn load_average(&self) -> Option<LoadAverage> {
        self.load
    }

    fn uptime(&self) -> Option<Duration> {
        self.uptime
    }
}

/// Format a duration the way `72h3m7s` reads: leading zero units are dropped,
/// sub-second precision is truncated.
pub fn format_uptime(uptime: Duration) -> String {
    let total = uptime.as_secs();
    let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
    if hours > 0 {
        format!("{}h{}m{}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m{}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

pub(crate) fn set_loadavg_placeholders(out: &mut PlaceholderSetBuilder, host: &dyn HostMetrics) {
    match host.load_average() {
        Some(load) => {
            out.set(keys::LOADAVG_1, load.one);
            out.set(keys::LOADAVG_5, load.five);
            out.set(keys::LOADAVG_15, load.fifteen);
        }
        None => {
            tracing::debug!("Load average unavailable, omitting loadavg placeholders");
            HostMetricFailures::record("loadavg");
        }
    }
}

pub(crate) fn set_hostinfo_placeholders(out: &mut PlaceholderSetBuilder, host: &dyn HostMetrics) {
    match host.uptime() {
        Some(uptime) => out.set(keys::HOSTINFO_UPTIME, format_uptime(uptime)),
        None => {
            tracing::debug!("Uptime unavailable");
            HostMetricFailures::record("uptime");
            out.set(keys::HOSTINFO_UPTIME, UPTIME_ERROR);
        }
    }
}
