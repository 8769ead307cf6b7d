//! Desktop icon spacing presets.
//!
//! Defines the spacing presets this tool can apply and their mapping to the
//! raw values understood by the desktop window-metrics subsystem.

use std::fmt;

/// Desktop icon spacing preset selected on the command line.
///
/// Each preset maps to a fixed value written to both spacing entries of the
/// window-metrics key; more negative means more space between icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Wide,
    Medium,
    Narrow,
}

impl Preset {
    /// Map a `--distance` argument to a preset.
    ///
    /// Only the first character matters, case-insensitively: `w`, `m` or `n`.
    /// Anything else (including an empty string) selects no preset.
    pub fn from_input(input: &str) -> Option<Self> {
        match input.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('w') => Some(Preset::Wide),
            Some('m') => Some(Preset::Medium),
            Some('n') => Some(Preset::Narrow),
            _ => None,
        }
    }

    /// Raw string value written to the registry for this preset.
    pub const fn registry_value(self) -> &'static str {
        match self {
            Preset::Wide => "-2056",
            Preset::Medium => "-1592",
            Preset::Narrow => "-1128",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Wide => "wide",
            Preset::Medium => "medium",
            Preset::Narrow => "narrow",
        };
        f.write_str(name)
    }
}
