//! Linux ARM-hf cross build options.
//!
//! Targets the Linaro hard-float toolchain. Word width is not consulted:
//! the cross target is always armhf, and its library names follow the
//! Linux convention.

use crate::env::BuildEnv;
use crate::error::Error;
use crate::toolchain::ToolchainPaths;

const XC_PREFIX: &str = "arm-linux-gnueabihf-";

pub fn apply(env: &mut BuildEnv, paths: &ToolchainPaths) -> Result<(), Error> {
    let xc = &paths.armhf;

    env.add_define("C5_TARGET_UNIX");
    env.add_define("C5_TARGET_LINUX");
    env.add_define("C5_TARGET_CROSS=armhf");

    env.set_cc(format!("{XC_PREFIX}gcc"));
    env.set_cxx(format!("{XC_PREFIX}gcc"));
    env.set_ar(format!("{XC_PREFIX}ar"));
    env.set_ranlib(format!("{XC_PREFIX}ranlib"));

    env.set_var("XGCC_PATH", xc.gcc_path.display().to_string());
    env.set_var("XSYS_ROOT", xc.sysroot.display().to_string());

    env.prepend_tool_paths([xc.gcc_path.join("bin")]);

    env.add_include_path(xc.boost_path.join("include"));
    env.add_lib_path(xc.boost_path.join("lib"));

    env.add_cxx_flag("-g");
    env.add_cxx_flag("-std=c++11");
    env.add_c_flag("-g");

    env.add_link_flag("-lstdc++");
    env.add_link_flag("-shared-libgcc");

    log::debug!("armhf cross build options applied");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Arch;

    #[test]
    fn test_cross_toolchain_programs() {
        let mut env = BuildEnv::new(Arch::Bits32);
        apply(&mut env, &ToolchainPaths::default()).unwrap();

        assert_eq!(env.cc(), Some("arm-linux-gnueabihf-gcc"));
        assert_eq!(env.cxx(), Some("arm-linux-gnueabihf-gcc"));
        assert_eq!(env.ar(), Some("arm-linux-gnueabihf-ar"));
        assert_eq!(env.ranlib(), Some("arm-linux-gnueabihf-ranlib"));
    }

    #[test]
    fn test_cross_define_and_vars() {
        let paths = ToolchainPaths::default();
        let mut env = BuildEnv::new(Arch::Bits32);
        apply(&mut env, &paths).unwrap();

        assert_eq!(
            env.defines(),
            ["C5_TARGET_UNIX", "C5_TARGET_LINUX", "C5_TARGET_CROSS=armhf"]
        );
        assert_eq!(
            env.var("XGCC_PATH"),
            Some(paths.armhf.gcc_path.display().to_string().as_str())
        );
        assert_eq!(
            env.var("XSYS_ROOT"),
            Some(paths.armhf.sysroot.display().to_string().as_str())
        );
    }

    #[test]
    fn test_cross_bin_dir_leads_tool_path() {
        let paths = ToolchainPaths::default();
        let mut env = BuildEnv::new(Arch::Bits32);
        apply(&mut env, &paths).unwrap();
        assert_eq!(env.tool_paths(), [paths.armhf.gcc_path.join("bin")]);
    }

    #[test]
    fn test_flags() {
        let mut env = BuildEnv::new(Arch::Bits32);
        apply(&mut env, &ToolchainPaths::default()).unwrap();

        assert_eq!(env.cxx_flags(), ["-g", "-std=c++11"]);
        assert_eq!(env.c_flags(), ["-g"]);
        assert_eq!(env.link_flags(), ["-lstdc++", "-shared-libgcc"]);
    }

    #[test]
    fn test_boost_paths() {
        let paths = ToolchainPaths::default();
        let mut env = BuildEnv::new(Arch::Bits32);
        apply(&mut env, &paths).unwrap();

        assert!(env.has_include_path(paths.armhf.boost_path.join("include")));
        assert_eq!(env.lib_paths(), [paths.armhf.boost_path.join("lib")]);
    }
}
