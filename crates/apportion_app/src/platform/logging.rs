//! Logger initialization for the `apportion` binary.
//!
//! File output goes to `./apportion.log` in the current working directory.

use std::path::PathBuf;

use apportion_logging::{LogDestination, DEFAULT_LOG_FILE};
use clap::ValueEnum;
use log::LevelFilter;

/// Log destination selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    Off,
    Terminal,
    File,
    Both,
}

pub fn initialize(target: LogTarget, verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let destination = match target {
        LogTarget::Off => return,
        LogTarget::Terminal => LogDestination::Terminal,
        LogTarget::File => LogDestination::default_file(),
        LogTarget::Both => LogDestination::Both(PathBuf::from(DEFAULT_LOG_FILE)),
    };

    apportion_logging::initialize(destination, level);
}
