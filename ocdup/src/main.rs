// SPDX-License-Identifier: MIT
// Copyright (c) 2026 ADNT Sarl <info@adnt.io>

//! Firmware upload dispatcher for FT4232H JTAG debugging via OpenOCD.
//!
//! Meant to be wired into PlatformIO as a custom upload command:
//!
//!   upload_protocol = custom
//!   upload_command = ocdup --project-dir $PROJECT_DIR --build-dir $BUILD_DIR

mod cli;
mod pio;

use clap::Parser;

fn main() {
    let args = cli::Cli::parse();
    cli::init_logger(args.verbose);

    match cli::run(args) {
        // OpenOCD's status becomes the upload step's status, unchanged.
        Ok(status) => std::process::exit(status),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
