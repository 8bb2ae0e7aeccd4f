//! Per-platform compiler and linker setup tables.
//!
//! Structure:
//! - `linux` / `macos` / `windows` - native build tables
//! - `armhf` - Linux ARM-hf cross build table
//!
//! Each table appends its target defines, search paths and flags to the
//! build environment. The native tables are selected through
//! [`for_host`]; the cross table is only ever invoked explicitly by a
//! build description that asks for it.

pub mod armhf;
pub mod linux;
pub mod macos;
pub mod windows;

use crate::env::BuildEnv;
use crate::error::Error;
use crate::platform::Platform;
use crate::toolchain::ToolchainPaths;

/// Apply the native build table for `platform`.
pub fn for_host(
    platform: Platform,
    env: &mut BuildEnv,
    paths: &ToolchainPaths,
) -> Result<(), Error> {
    log::info!("configuring {} build, {}", platform, env.arch());
    match platform {
        Platform::Linux => linux::apply(env),
        Platform::MacOs => macos::apply(env, paths),
        Platform::Windows => windows::apply(env, paths),
    }
}
