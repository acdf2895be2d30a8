//! Host server version strings.

use super::keys;
use super::value::PlaceholderSetBuilder;

/// Version information of the host server, exposed verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostVersion {
    pub simple: String,
    pub full: String,
}

impl HostVersion {
    pub fn new(simple: impl Into<String>, full: impl Into<String>) -> Self {
        Self {
            simple: simple.into(),
            full: full.into(),
        }
    }

    /// Version of this build, e.g. `v0.3.0` and `v0.3.0 extra-placeholders (linux/x86_64)`
    pub fn from_build() -> Self {
        let simple = format!("v{}", env!("CARGO_PKG_VERSION"));
        let full = format!(
            "{} {} ({}/{})",
            simple,
            env!("CARGO_PKG_NAME"),
            std::env::consts::OS,
            std::env::consts::ARCH
        );
        Self { simple, full }
    }
}

impl Default for HostVersion {
    fn default() -> Self {
        Self::from_build()
    }
}

pub(crate) fn set_version_placeholders(out: &mut PlaceholderSetBuilder, version: &HostVersion) {
    out.set(keys::VERSION_SIMPLE, version.simple.as_str());
    out.set(keys::VERSION_FULL, version.full.as_str());
}
