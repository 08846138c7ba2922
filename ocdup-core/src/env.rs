// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Build-environment abstraction.
//!
//! The dispatcher never touches the host build system directly; everything
//! it needs comes through [`BuildEnv`], so it can be driven by a real
//! PlatformIO installation in production and by stubs in tests.

use std::path::PathBuf;

use anyhow::Result;

/// The lookups and facilities the upload dispatcher consumes from the host
/// build system.
pub trait BuildEnv {
    /// Directory of an installed tool package, or `None` if the package is
    /// not installed.
    fn package_dir(&self, name: &str) -> Option<PathBuf>;

    /// Project root directory.
    fn project_dir(&self) -> PathBuf;

    /// Build output directory.
    fn build_dir(&self) -> PathBuf;

    /// Run a command given as an argument vector (`argv[0]` is the program)
    /// and return its exit status unchanged.
    fn execute(&mut self, argv: &[String]) -> Result<i32>;
}

/// Host operating system, as far as the dispatcher cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    /// macOS. DriverKit blocks unprivileged MPSSE access to the FTDI
    /// adapter, so uploads on this platform go through sudo.
    Macos,
    Windows,
    Other,
}

impl Platform {
    /// Platform the program is running on.
    pub fn host() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a [`Platform`]. Accepts both Rust's `macos`
    /// and the conventional `darwin` spelling for the Darwin platform.
    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" | "darwin" => Platform::Macos,
            "windows" => Platform::Windows,
            _ => Platform::Other,
        }
    }

    /// Whether uploads need privilege escalation on this platform.
    pub fn needs_sudo(self) -> bool {
        self == Platform::Macos
    }
}
