//! Build configuration support for the C5 libraries.
//!
//! Invoked by the build-description files to set up per-platform compiler
//! and linker options and to resolve library names.
//!
//! Structure:
//! - `platform` - host platform and target architecture classification
//! - `env` - the mutable build environment the tables write into
//! - `options` - per-platform compiler/linker setup tables
//! - `libname` - static and shared library naming conventions
//! - `toolchain` - toolchain roots, overridable via `buildcfg.toml`

pub mod env;
pub mod error;
pub mod libname;
pub mod options;
pub mod platform;
pub mod toolchain;

pub use env::BuildEnv;
pub use error::Error;
pub use libname::LibNames;
pub use platform::{Arch, Platform};
pub use toolchain::ToolchainPaths;
