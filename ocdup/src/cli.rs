// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Command-line interface definitions.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::{Level, LevelFilter};

use ocdup_core::{upload, Platform};

use crate::pio::PioEnv;

/// Command-line arguments.
#[derive(Parser)]
#[command(name = "ocdup")]
#[command(about = "Flash firmware over FT4232H JTAG using OpenOCD")]
pub struct Cli {
    /// Project root directory (PlatformIO $PROJECT_DIR)
    #[arg(long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Build output directory containing firmware.elf (PlatformIO $BUILD_DIR)
    #[arg(long)]
    pub build_dir: PathBuf,

    /// OpenOCD package directory (overrides the PlatformIO package lookup)
    #[arg(long)]
    pub tool_dir: Option<PathBuf>,

    /// Override host platform detection (linux, macos, windows)
    #[arg(long)]
    pub platform: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Configure the logger. Info-level records go to stdout as bare text so
/// the operator-facing diagnostic lines read like plain prints.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(|buf, record| {
            if record.level() == Level::Info {
                writeln!(buf, "{}", record.args())
            } else {
                writeln!(buf, "{}: {}", record.level(), record.args())
            }
        })
        .init();
}

/// Execute the upload and return OpenOCD's exit status.
pub fn run(cli: Cli) -> Result<i32> {
    let platform = match &cli.platform {
        Some(os) => Platform::from_os(os),
        None => Platform::host(),
    };

    let mut env = PioEnv::new(cli.project_dir, cli.build_dir, cli.tool_dir);
    upload(&mut env, platform)
}
