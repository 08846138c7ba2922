// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Upload dispatcher for flashing firmware over an FT4232H JTAG adapter.
//!
//! Given a build environment, this crate resolves the OpenOCD binary, its
//! scripts directory, the board interface config and the firmware image,
//! assembles the OpenOCD command line and runs it. All JTAG and flashing
//! logic lives in OpenOCD itself; this crate only orchestrates the
//! invocation and hands back OpenOCD's exit status.

pub mod dispatch;
pub mod env;

pub use dispatch::{
    adapt_for_platform, build_command, resolve_paths, shell_join, upload, UploadPaths,
};
pub use env::{BuildEnv, Platform};
