//! The mutable build environment the platform tables write into.

use crate::platform::Arch;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Per-invocation build environment.
///
/// Flag and search-path lists keep insertion order. Tool paths are kept
/// highest priority first: a prepended batch lands ahead of everything
/// already present, in the order it was given.
#[derive(Debug, Clone)]
pub struct BuildEnv {
    arch: Arch,
    cc: Option<String>,
    cxx: Option<String>,
    ar: Option<String>,
    ranlib: Option<String>,
    defines: Vec<String>,
    cc_flags: Vec<String>,
    c_flags: Vec<String>,
    cxx_flags: Vec<String>,
    link_flags: Vec<String>,
    include_paths: Vec<PathBuf>,
    lib_paths: Vec<PathBuf>,
    tool_paths: Vec<PathBuf>,
    vars: BTreeMap<String, String>,
}

impl BuildEnv {
    /// Fresh environment targeting `arch`.
    pub fn new(arch: Arch) -> Self {
        Self {
            arch,
            cc: None,
            cxx: None,
            ar: None,
            ranlib: None,
            defines: Vec::new(),
            cc_flags: Vec::new(),
            c_flags: Vec::new(),
            cxx_flags: Vec::new(),
            link_flags: Vec::new(),
            include_paths: Vec::new(),
            lib_paths: Vec::new(),
            tool_paths: Vec::new(),
            vars: BTreeMap::new(),
        }
    }

    /// Target architecture.
    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// Override the C compiler.
    pub fn set_cc(&mut self, cc: impl Into<String>) {
        self.cc = Some(cc.into());
    }

    /// Override the C++ compiler.
    pub fn set_cxx(&mut self, cxx: impl Into<String>) {
        self.cxx = Some(cxx.into());
    }

    /// Override the archiver.
    pub fn set_ar(&mut self, ar: impl Into<String>) {
        self.ar = Some(ar.into());
    }

    /// Override the archive indexer.
    pub fn set_ranlib(&mut self, ranlib: impl Into<String>) {
        self.ranlib = Some(ranlib.into());
    }

    pub fn cc(&self) -> Option<&str> {
        self.cc.as_deref()
    }

    pub fn cxx(&self) -> Option<&str> {
        self.cxx.as_deref()
    }

    pub fn ar(&self) -> Option<&str> {
        self.ar.as_deref()
    }

    pub fn ranlib(&self) -> Option<&str> {
        self.ranlib.as_deref()
    }

    /// Add a preprocessor define (`NAME` or `NAME=VALUE`).
    pub fn add_define(&mut self, define: impl Into<String>) {
        self.defines.push(define.into());
    }

    /// Add a flag passed to both the C and C++ compilers.
    pub fn add_cc_flag(&mut self, flag: impl Into<String>) {
        self.cc_flags.push(flag.into());
    }

    /// Add a C-only compiler flag.
    pub fn add_c_flag(&mut self, flag: impl Into<String>) {
        self.c_flags.push(flag.into());
    }

    /// Add a C++-only compiler flag.
    pub fn add_cxx_flag(&mut self, flag: impl Into<String>) {
        self.cxx_flags.push(flag.into());
    }

    /// Add a linker flag.
    pub fn add_link_flag(&mut self, flag: impl Into<String>) {
        self.link_flags.push(flag.into());
    }

    /// Append a header search path.
    pub fn add_include_path(&mut self, path: impl Into<PathBuf>) {
        self.include_paths.push(path.into());
    }

    /// Append a library search path.
    pub fn add_lib_path(&mut self, path: impl Into<PathBuf>) {
        self.lib_paths.push(path.into());
    }

    /// Put a batch of tool directories at the front of the search order,
    /// keeping the batch's own order.
    pub fn prepend_tool_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let batch: Vec<PathBuf> = paths.into_iter().map(Into::into).collect();
        self.tool_paths.splice(0..0, batch);
    }

    /// Set a named build variable (`XGCC_PATH`, `TMP`, ...).
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Look up a named build variable.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn defines(&self) -> &[String] {
        &self.defines
    }

    pub fn cc_flags(&self) -> &[String] {
        &self.cc_flags
    }

    pub fn c_flags(&self) -> &[String] {
        &self.c_flags
    }

    pub fn cxx_flags(&self) -> &[String] {
        &self.cxx_flags
    }

    pub fn link_flags(&self) -> &[String] {
        &self.link_flags
    }

    pub fn include_paths(&self) -> &[PathBuf] {
        &self.include_paths
    }

    pub fn lib_paths(&self) -> &[PathBuf] {
        &self.lib_paths
    }

    pub fn tool_paths(&self) -> &[PathBuf] {
        &self.tool_paths
    }

    /// True if `path` is already on the include search path.
    pub fn has_include_path(&self, path: impl AsRef<Path>) -> bool {
        self.include_paths.iter().any(|p| p == path.as_ref())
    }
}
