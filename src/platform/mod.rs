//! Platform-specific module for Windows utilities.
//!
//! Everything under here talks to the Win32 registry API and only compiles
//! on Windows.

pub mod registry;

pub use registry::{apply_icon_spacing, current_build_number, is_windows_eleven};
