// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! PlatformIO-backed build environment: package lookup and process
//! execution.

use std::path::PathBuf;
use std::process::Command;

use anyhow::{bail, Context, Result};
use directories::BaseDirs;
use log::debug;

use ocdup_core::BuildEnv;

/// Environment variable overriding the PlatformIO core directory.
const CORE_DIR_ENV: &str = "PLATFORMIO_CORE_DIR";

/// Build environment backed by a PlatformIO installation on the host.
pub struct PioEnv {
    project_dir: PathBuf,
    build_dir: PathBuf,
    tool_dir: Option<PathBuf>,
    core_dir: Option<PathBuf>,
}

impl PioEnv {
    pub fn new(project_dir: PathBuf, build_dir: PathBuf, tool_dir: Option<PathBuf>) -> Self {
        PioEnv {
            project_dir,
            build_dir,
            tool_dir,
            core_dir: core_dir(),
        }
    }
}

/// PlatformIO core directory: `$PLATFORMIO_CORE_DIR` if set, otherwise
/// `~/.platformio`.
fn core_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CORE_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    BaseDirs::new().map(|dirs| dirs.home_dir().join(".platformio"))
}

impl BuildEnv for PioEnv {
    fn package_dir(&self, name: &str) -> Option<PathBuf> {
        if let Some(dir) = &self.tool_dir {
            return Some(dir.clone());
        }

        let dir = self.core_dir.as_ref()?.join("packages").join(name);
        if dir.is_dir() {
            Some(dir)
        } else {
            debug!("package {} not found at {}", name, dir.display());
            None
        }
    }

    fn project_dir(&self) -> PathBuf {
        self.project_dir.clone()
    }

    fn build_dir(&self) -> PathBuf {
        self.build_dir.clone()
    }

    fn execute(&mut self, argv: &[String]) -> Result<i32> {
        let (program, args) = argv.split_first().context("empty upload command")?;

        let status = Command::new(program)
            .args(args)
            .status()
            .with_context(|| format!("failed to run {}", program))?;

        match status.code() {
            Some(code) => Ok(code),
            // Killed by a signal: there is no exit code to propagate.
            None => bail!("{} terminated by signal", program),
        }
    }
}
