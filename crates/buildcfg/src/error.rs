//! Error types for build configuration.

use crate::platform::{Arch, Platform};
use thiserror::Error;

/// Errors raised while configuring a build.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host operating system is not one the build system supports.
    #[error("unsupported host operating system: {0}")]
    UnsupportedHost(String),

    /// An architecture value did not parse to a supported word width.
    #[error("invalid architecture {0:?} (expected \"32\" or \"64\")")]
    InvalidArch(String),

    /// The platform's build table cannot target the requested architecture.
    #[error("{arch} architecture not supported on {platform}")]
    UnsupportedArch { arch: Arch, platform: Platform },
}
