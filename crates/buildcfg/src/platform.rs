//! Host platform and target architecture classification.
//!
//! Build descriptions pass both values explicitly so option assembly and
//! name resolution stay testable for every platform from a single host.

use crate::error::Error;
use serde::Deserialize;
use std::fmt;

/// Target CPU word width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Arch {
    /// 32-bit build
    #[serde(rename = "32")]
    Bits32,
    /// 64-bit build
    #[serde(rename = "64")]
    Bits64,
}

impl Arch {
    /// Suffix carried by Windows library names.
    pub fn suffix(self) -> &'static str {
        match self {
            Arch::Bits32 => "_32",
            Arch::Bits64 => "_64",
        }
    }

    /// Word width in bits.
    pub fn bits(self) -> u32 {
        match self {
            Arch::Bits32 => 32,
            Arch::Bits64 => 64,
        }
    }
}

impl TryFrom<&str> for Arch {
    type Error = Error;

    /// Accepts exactly `"32"` and `"64"`. Anything else is rejected rather
    /// than falling through to a 64-bit build.
    fn try_from(s: &str) -> Result<Self, Error> {
        match s.trim() {
            "32" => Ok(Arch::Bits32),
            "64" => Ok(Arch::Bits64),
            other => Err(Error::InvalidArch(other.to_string())),
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arch::Bits32 => write!(f, "32-bit"),
            Arch::Bits64 => write!(f, "64-bit"),
        }
    }
}

/// Supported build platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// macOS (Darwin)
    MacOs,
    /// Linux
    Linux,
    /// Windows (MSVC toolchain)
    Windows,
}

impl Platform {
    /// Classify the host this process runs on.
    pub fn host() -> Result<Self, Error> {
        if cfg!(target_os = "macos") {
            Ok(Platform::MacOs)
        } else if cfg!(target_os = "linux") {
            Ok(Platform::Linux)
        } else if cfg!(target_os = "windows") {
            Ok(Platform::Windows)
        } else {
            Err(Error::UnsupportedHost(std::env::consts::OS.to_string()))
        }
    }

    /// Native shared library extension, without the dot.
    pub fn shared_lib_ext(self) -> &'static str {
        match self {
            Platform::MacOs => "dylib",
            Platform::Linux => "so",
            Platform::Windows => "dll",
        }
    }

    /// Repository directory holding the vendored pre-built shared
    /// libraries for this platform, relative to the build root.
    pub fn vendored_dll_dir(self) -> &'static str {
        match self {
            Platform::MacOs => "extern/mac/dll",
            Platform::Linux => "extern/linux/dll",
            Platform::Windows => "extern/win/dll",
        }
    }
}

impl TryFrom<&str> for Platform {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Error> {
        match s {
            "macos" | "darwin" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            "windows" => Ok(Platform::Windows),
            other => Err(Error::UnsupportedHost(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
        }
    }
}
