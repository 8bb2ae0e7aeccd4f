//! Toolchain root configuration.
//!
//! Defaults reproduce the locations the build descriptions have always
//! used. A `buildcfg.toml` next to the build root overrides them per
//! machine; absent sections and fields fall back to the defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "buildcfg.toml";

/// Toolchain roots for all platform tables.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ToolchainPaths {
    #[serde(default)]
    pub windows: WindowsToolchain,
    #[serde(default)]
    pub macos: MacToolchain,
    #[serde(default)]
    pub armhf: ArmhfToolchain,
}

/// MSVC toolchain roots.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WindowsToolchain {
    #[serde(default = "default_vs_path")]
    pub vs_path: PathBuf,
    #[serde(default = "default_winsdk_path")]
    pub winsdk_path: PathBuf,
    #[serde(default = "default_boost_win")]
    pub boost_path: PathBuf,
}

impl Default for WindowsToolchain {
    fn default() -> Self {
        WindowsToolchain {
            vs_path: default_vs_path(),
            winsdk_path: default_winsdk_path(),
            boost_path: default_boost_win(),
        }
    }
}

/// macOS toolchain roots.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MacToolchain {
    #[serde(default = "default_boost_mac")]
    pub boost_path: PathBuf,
}

impl Default for MacToolchain {
    fn default() -> Self {
        MacToolchain {
            boost_path: default_boost_mac(),
        }
    }
}

/// Linaro cross-toolchain roots for the ARM-hf build.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ArmhfToolchain {
    #[serde(default = "default_armhf_gcc")]
    pub gcc_path: PathBuf,
    #[serde(default = "default_armhf_sysroot")]
    pub sysroot: PathBuf,
    #[serde(default = "default_armhf_boost")]
    pub boost_path: PathBuf,
}

impl Default for ArmhfToolchain {
    fn default() -> Self {
        ArmhfToolchain {
            gcc_path: default_armhf_gcc(),
            sysroot: default_armhf_sysroot(),
            boost_path: default_armhf_boost(),
        }
    }
}

fn default_vs_path() -> PathBuf {
    PathBuf::from("C:/Program Files (x86)/Microsoft Visual Studio 10.0")
}

fn default_winsdk_path() -> PathBuf {
    PathBuf::from("C:/Program Files (x86)/Microsoft SDKs/Windows/v7.0A")
}

fn default_boost_win() -> PathBuf {
    PathBuf::from("C:/boost_1_53_0")
}

fn default_boost_mac() -> PathBuf {
    PathBuf::from("/usr/local/Cellar/boost/1.63.0")
}

fn home() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn default_armhf_gcc() -> PathBuf {
    home().join("opt/gcc-linaro-6.4.1-2018.05-x86_64_arm-linux-gnueabihf")
}

fn default_armhf_sysroot() -> PathBuf {
    home().join("opt/sysroot-glibc-linaro-2.23-2018.05-arm-linux-gnueabihf")
}

fn default_armhf_boost() -> PathBuf {
    home().join("lib/armhf/boost_1_53_0")
}

impl ToolchainPaths {
    /// Load overrides from `buildcfg.toml` in the working directory, or
    /// use the defaults if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load overrides from an explicit path, defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read {}", path.display()))?;

        let paths: ToolchainPaths =
            toml::from_str(&content).context(format!("Failed to parse {}", path.display()))?;

        log::debug!("toolchain overrides loaded from {}", path.display());
        Ok(paths)
    }
}
