// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! OpenOCD invocation pipeline: resolve paths, build the command, adapt it
//! to the host platform, execute.

use std::path::PathBuf;

use anyhow::Result;
use log::info;

use crate::env::{BuildEnv, Platform};

/// PlatformIO package that ships the OpenOCD distribution.
pub const OPENOCD_PACKAGE: &str = "tool-openocd";

/// Board interface config, relative to the project root.
pub const INTERFACE_CFG: &str = "boards/ft4232h-mcu-jtag.cfg";

/// Firmware image name inside the build directory. The ELF (rather than a
/// raw .bin) is what gets flashed because it carries the load addresses
/// OpenOCD needs to program non-contiguous flash regions.
pub const FIRMWARE_IMAGE: &str = "firmware.elf";

/// Escalation command used on macOS.
const SUDO: &str = "sudo";

/// Resolved filesystem locations for one upload invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPaths {
    /// OpenOCD executable.
    pub tool: PathBuf,
    /// OpenOCD auxiliary scripts directory (`-s`).
    pub scripts: PathBuf,
    /// FT4232H interface + target config (`-f`).
    pub interface_cfg: PathBuf,
    /// Firmware ELF to program.
    pub firmware: PathBuf,
}

/// Resolve all paths for an upload from the build environment.
///
/// No existence checks are made: a missing OpenOCD package degenerates to a
/// relative `bin/openocd` path and surfaces as the process failing to
/// start, and OpenOCD's own diagnostics cover a missing config or firmware
/// file.
pub fn resolve_paths(env: &dyn BuildEnv) -> UploadPaths {
    let package = env.package_dir(OPENOCD_PACKAGE).unwrap_or_default();
    UploadPaths {
        tool: package.join("bin").join("openocd"),
        scripts: package.join("openocd").join("scripts"),
        interface_cfg: env.project_dir().join(INTERFACE_CFG),
        firmware: env.build_dir().join(FIRMWARE_IMAGE),
    }
}

/// OpenOCD `-c` directive that programs, verifies and resets the target,
/// then exits. The braces are OpenOCD's own word grouping and keep a
/// firmware path containing spaces as a single Tcl word.
fn program_directive(paths: &UploadPaths) -> String {
    format!(
        "program {{{}}} verify reset; shutdown",
        paths.firmware.display()
    )
}

/// Assemble the OpenOCD argument vector in invocation order.
pub fn build_command(paths: &UploadPaths) -> Vec<String> {
    vec![
        paths.tool.display().to_string(),
        "-s".to_string(),
        paths.scripts.display().to_string(),
        "-f".to_string(),
        paths.interface_cfg.display().to_string(),
        "-c".to_string(),
        program_directive(paths),
    ]
}

/// Prepend the escalation command when the host platform needs it.
pub fn adapt_for_platform(mut argv: Vec<String>, platform: Platform) -> Vec<String> {
    if platform.needs_sudo() {
        argv.insert(0, SUDO.to_string());
        info!("Note: Using sudo for FTDI access on macOS (you may be prompted for password)");
    }
    argv
}

/// Join an argument vector into a copy-pasteable command line, wrapping any
/// token containing a space in double quotes.
pub fn shell_join(argv: &[String]) -> String {
    argv.iter()
        .map(|arg| {
            if arg.contains(' ') {
                format!("\"{}\"", arg)
            } else {
                arg.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run one upload: resolve, assemble, adapt, execute.
///
/// Returns OpenOCD's exit status without interpretation. No retries and no
/// recovery: the caller decides what a non-zero status means for the
/// overall build step, and OpenOCD's own stderr carries the diagnostics.
pub fn upload(env: &mut dyn BuildEnv, platform: Platform) -> Result<i32> {
    let paths = resolve_paths(env);
    let argv = adapt_for_platform(build_command(&paths), platform);

    info!("Upload command:");
    info!("{}", shell_join(&argv));

    env.execute(&argv)
}
