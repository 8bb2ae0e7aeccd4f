//! Static and shared library naming conventions.
//!
//! Shared libraries carry the `C5` product prefix so ABI-incompatible
//! major versions can coexist on one system without filename collision.

use crate::env::BuildEnv;
use crate::platform::{Arch, Platform};
use std::path::PathBuf;

/// Resolves platform-correct library names for one `(platform, arch)`
/// pair. Pure; calling any method twice with the same input yields the
/// same output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibNames {
    platform: Platform,
    arch: Arch,
}

impl LibNames {
    pub fn new(platform: Platform, arch: Arch) -> Self {
        Self { platform, arch }
    }

    /// Resolver for the architecture `env` targets.
    pub fn from_env(platform: Platform, env: &BuildEnv) -> Self {
        Self::new(platform, env.arch())
    }

    /// Static library name handed to the build tool. On macOS and Linux
    /// the tool adds its own prefix and suffix, so the base name passes
    /// through unchanged; Windows encodes the word width.
    pub fn static_lib(&self, base: &str) -> String {
        match self.platform {
            Platform::MacOs | Platform::Linux => base.to_string(),
            Platform::Windows => format!("{base}{}", self.arch.suffix()),
        }
    }

    /// Shared library name before the platform extension is applied.
    pub fn shared_lib_base(&self, base: &str) -> String {
        match self.platform {
            Platform::MacOs | Platform::Linux => format!("libC5{base}"),
            Platform::Windows => format!("C5{base}-md{}", self.arch.suffix()),
        }
    }

    /// Shared library file name with the native extension.
    pub fn shared_lib_file(&self, base: &str) -> String {
        format!(
            "{}.{}",
            self.shared_lib_base(base),
            self.platform.shared_lib_ext()
        )
    }

    /// Expected location of the vendored pre-built shared library.
    /// Relative to the build root marker, not the working directory.
    pub fn vendored_shared_lib(&self, base: &str) -> PathBuf {
        PathBuf::from(self.platform.vendored_dll_dir()).join(self.shared_lib_file(base))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(platform: Platform, arch: Arch) -> LibNames {
        LibNames::new(platform, arch)
    }

    #[test]
    fn test_static_lib_unchanged_on_unix() {
        for platform in [Platform::MacOs, Platform::Linux] {
            for arch in [Arch::Bits32, Arch::Bits64] {
                assert_eq!(names(platform, arch).static_lib("can"), "can");
            }
        }
    }

    #[test]
    fn test_mac_shared_lib_file() {
        let n = names(Platform::MacOs, Arch::Bits64);
        assert_eq!(n.shared_lib_base("can"), "libC5can");
        assert_eq!(n.shared_lib_file("can"), "libC5can.dylib");
    }

    #[test]
    fn test_linux_shared_lib_file() {
        let n = names(Platform::Linux, Arch::Bits64);
        assert_eq!(n.shared_lib_file("can"), "libC5can.so");
    }

    #[test]
    fn test_windows_32bit_names() {
        let n = names(Platform::Windows, Arch::Bits32);
        assert_eq!(n.static_lib("foo"), "foo_32");
        assert_eq!(n.shared_lib_base("foo"), "C5foo-md_32");
        assert_eq!(n.shared_lib_file("foo"), "C5foo-md_32.dll");
    }

    #[test]
    fn test_windows_64bit_names() {
        let n = names(Platform::Windows, Arch::Bits64);
        assert_eq!(n.static_lib("foo"), "foo_64");
        assert_eq!(n.shared_lib_base("foo"), "C5foo-md_64");
        assert_eq!(n.shared_lib_file("foo"), "C5foo-md_64.dll");
    }

    #[test]
    fn test_vendored_path_is_dir_plus_file() {
        for platform in [Platform::MacOs, Platform::Linux, Platform::Windows] {
            let n = names(platform, Arch::Bits64);
            let expected =
                PathBuf::from(platform.vendored_dll_dir()).join(n.shared_lib_file("foo"));
            assert_eq!(n.vendored_shared_lib("foo"), expected);
        }
    }

    #[test]
    fn test_vendored_path_linux() {
        let n = names(Platform::Linux, Arch::Bits64);
        assert_eq!(
            n.vendored_shared_lib("can"),
            PathBuf::from("extern/linux/dll/libC5can.so")
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let n = names(Platform::Windows, Arch::Bits32);
        assert_eq!(n.shared_lib_file("can"), n.shared_lib_file("can"));
        assert_eq!(n.vendored_shared_lib("can"), n.vendored_shared_lib("can"));
    }

    #[test]
    fn test_from_env_uses_env_arch() {
        let env = BuildEnv::new(Arch::Bits32);
        let n = LibNames::from_env(Platform::Windows, &env);
        assert_eq!(n.static_lib("foo"), "foo_32");
    }
}
