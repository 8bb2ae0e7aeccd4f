//! Native Linux build options.

use crate::env::BuildEnv;
use crate::error::Error;
use crate::platform::{Arch, Platform};

/// System locations checked ahead of the inherited search path.
const TOOL_PATHS: &[&str] = &["/usr/bin", "/usr/local/lib", "/usr/local/include"];

pub fn apply(env: &mut BuildEnv) -> Result<(), Error> {
    env.add_define("C5_TARGET_UNIX");
    env.add_define("C5_TARGET_LINUX");

    if env.arch() == Arch::Bits32 {
        return Err(Error::UnsupportedArch {
            arch: Arch::Bits32,
            platform: Platform::Linux,
        });
    }

    env.prepend_tool_paths(TOOL_PATHS.iter().copied());

    env.add_include_path("/usr/local/include");
    env.add_include_path("/usr/include/boost");

    env.add_lib_path("/usr/local/lib");
    env.add_lib_path("/usr/lib/x86_64-linux-gnu");

    log::debug!("linux build options applied");
    Ok(())
}
