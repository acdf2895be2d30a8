//! Runtime placeholders injected into every request.
//!
//! | Placeholder | Description |
//! |-------------|-------------|
//! | `extra.caddy.version.simple` | Simple version of the host server |
//! | `extra.caddy.version.full` | Full version of the host server |
//! | `extra.rand.float` | Random float in `[0, 1)` |
//! | `extra.rand.int` | Random integer in the configured range (default `0..=100`) |
//! | `extra.loadavg.1` / `.5` / `.15` | System load averages (absent when unavailable) |
//! | `extra.hostinfo.uptime` | System uptime, e.g. `72h3m7s` |
//! | `extra.tokio.runtime.flavor` / `.workers` / `.alive_tasks` | Serving tokio runtime (absent outside a runtime) |
//! | `extra.time.now.<field>` | Local time components |
//! | `extra.time.now.utc.<field>` | UTC time components |
//!
//! `<field>` is one of [`keys::TIME_FIELDS`].

pub mod hostinfo;
pub mod keys;
mod provider;
pub mod random;
pub mod runtime;
pub mod time;
mod value;
pub mod version;

pub use hostinfo::{HostMetrics, LoadAverage, StaticHostMetrics, SystemHostMetrics, UPTIME_ERROR};
pub use provider::PlaceholderProvider;
pub use runtime::RuntimeStats;
pub use time::{Clock, FixedClock, Now, SystemClock, DEFAULT_TIME_FORMAT};
pub use value::{PlaceholderSet, PlaceholderValue};
pub use version::HostVersion;
