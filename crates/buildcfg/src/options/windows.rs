//! Native Windows (MSVC) build options.

use crate::env::BuildEnv;
use crate::error::Error;
use crate::platform::Arch;
use crate::toolchain::ToolchainPaths;

pub fn apply(env: &mut BuildEnv, paths: &ToolchainPaths) -> Result<(), Error> {
    let win = &paths.windows;

    env.add_define("C5_TARGET_WIN");

    env.add_include_path(win.vs_path.join("VC/include"));
    env.add_include_path(win.boost_path.clone());

    // Both word widths are valid targets here; they differ only in which
    // toolchain and library directories get used.
    match env.arch() {
        Arch::Bits32 => {
            env.add_lib_path(win.vs_path.join("VC/lib"));
            env.add_lib_path(win.winsdk_path.join("Lib"));
            env.add_lib_path(win.boost_path.join("lib/win32"));

            env.prepend_tool_paths([win.vs_path.join("Common7/IDE"), win.vs_path.join("VC/bin")]);
        }
        Arch::Bits64 => {
            env.add_lib_path(win.vs_path.join("VC/lib/amd64"));
            env.add_lib_path(win.winsdk_path.join("Lib/amd64"));
            env.add_lib_path(win.boost_path.join("lib/x64"));

            env.prepend_tool_paths([
                win.vs_path.join("Common7/IDE"),
                win.vs_path.join("VC/bin/x86_amd64"),
            ]);
        }
    }

    // temp directory for the MSVC tools
    if let Ok(tmp) = std::env::var("TMP") {
        env.set_var("TMP", tmp);
    }

    // /EHs exception model, dynamic CRT, Windows XP API level
    env.add_cxx_flag("/EHs");
    env.add_cxx_flag("/MD");
    env.add_cxx_flag("/D_WIN32_WINNT=0x0501");

    log::debug!("windows build options applied, {}", env.arch());
    Ok(())
}
