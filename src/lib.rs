//! Windows Icon Spacing - Library
//!
//! A command-line utility that adjusts desktop icon spacing on Windows 11
//! by writing the `IconSpacing` and `IconVerticalSpacing` values of the
//! current user's window-metrics registry key.
//!
//! ## Flow
//!
//! - Gate on the installed OS build number (Windows 11 or later)
//! - Parse `--distance` and `--update` from the command line
//! - Ask for confirmation unless `--update` was given
//! - Write both spacing values and report the result
//!
//! The spacing presets, option parsing, error taxonomy and confirmation
//! prompt are portable; only `app` and `platform` touch the Win32 API.

#[cfg(windows)]
pub mod app;
pub mod cli;
pub mod confirm;
pub mod error;
#[cfg(windows)]
pub mod platform;
pub mod spacing;

pub use cli::Options;
pub use error::{AppError, ExitCode, RegistryError};
pub use spacing::Preset;
