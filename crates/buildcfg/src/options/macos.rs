//! Native macOS build options.

use crate::env::BuildEnv;
use crate::error::Error;
use crate::platform::{Arch, Platform};
use crate::toolchain::ToolchainPaths;

/// MacPorts tools ahead of the stock search path.
const TOOL_PATHS: &[&str] = &["/opt/local/bin", "/usr/local/lib", "/usr/local/include"];

const JAVA_VM_HEADERS: &str = "/System/Library/Frameworks/JavaVM.framework/Versions/A/Headers";

pub fn apply(env: &mut BuildEnv, paths: &ToolchainPaths) -> Result<(), Error> {
    env.add_define("C5_TARGET_UNIX");
    env.add_define("C5_TARGET_MAC");

    if env.arch() == Arch::Bits32 {
        return Err(Error::UnsupportedArch {
            arch: Arch::Bits32,
            platform: Platform::MacOs,
        });
    }

    env.prepend_tool_paths(TOOL_PATHS.iter().copied());

    env.add_include_path(JAVA_VM_HEADERS);
    env.add_include_path(paths.macos.boost_path.join("include"));

    env.add_lib_path(paths.macos.boost_path.join("lib"));

    env.add_cc_flag("-Wno-deprecated-declarations");

    log::debug!("macos build options applied");
    Ok(())
}
