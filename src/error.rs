//! Error types and process exit codes.
//!
//! Every failure here is terminal: nothing is retried, and each kind maps to
//! a distinct process exit code that callers and scripts rely on.

use std::io;

use thiserror::Error;

/// Registry access error types.
///
/// Carries the raw Win32 error code as a number so the type stays usable on
/// every platform.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to open registry key {path}: error code {code}")]
    OpenKey { path: String, code: u32 },

    #[error("failed to read registry value {name}: error code {code}")]
    ReadValue { name: String, code: u32 },

    #[error("failed to write registry value {name}: error code {code}")]
    WriteValue { name: String, code: u32 },

    #[error("registry value {name} has an unexpected type or contents")]
    InvalidValue { name: String },
}

/// Terminal application failures, one per exit code.
///
/// The Display strings are exactly what the user sees on standard output.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("This utility is for Windows 11 or greater.")]
    UnsupportedWindows,

    #[error("Error getting Windows version number: {0}")]
    VersionQuery(#[source] RegistryError),

    #[error("Invalid distance option received.")]
    InvalidDistance,

    #[error("Couldn't get response from user: {0}")]
    ConfirmationRead(#[source] io::Error),

    #[error("User declined update. No changes have been made to your system.")]
    Declined,

    #[error("Couldn't update registry: {0}")]
    RegistryWrite(#[source] RegistryError),
}

/// Process exit codes. The numeric values are a compatibility contract.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success = 0,
    Declined = 1,
    UnsupportedWindows = -11,
    VersionQuery = -12,
    InvalidDistance = -13,
    RegistryWrite = -14,
    ConfirmationRead = -15,
}

impl From<&AppError> for ExitCode {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::UnsupportedWindows => ExitCode::UnsupportedWindows,
            AppError::VersionQuery(_) => ExitCode::VersionQuery,
            AppError::InvalidDistance => ExitCode::InvalidDistance,
            AppError::ConfirmationRead(_) => ExitCode::ConfirmationRead,
            AppError::Declined => ExitCode::Declined,
            AppError::RegistryWrite(_) => ExitCode::RegistryWrite,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(err: AppError) -> i32 {
        ExitCode::from(&err) as i32
    }

    #[test]
    fn exit_codes_are_stable() {
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(code(AppError::Declined), 1);
        assert_eq!(code(AppError::UnsupportedWindows), -11);
        assert_eq!(
            code(AppError::VersionQuery(RegistryError::InvalidValue {
                name: "CurrentBuildNumber".to_string(),
            })),
            -12
        );
        assert_eq!(code(AppError::InvalidDistance), -13);
        assert_eq!(
            code(AppError::RegistryWrite(RegistryError::WriteValue {
                name: "IconSpacing".to_string(),
                code: 5,
            })),
            -14
        );
        assert_eq!(
            code(AppError::ConfirmationRead(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "eof",
            ))),
            -15
        );
    }

    #[test]
    fn messages_match_the_cli_contract() {
        assert_eq!(
            AppError::UnsupportedWindows.to_string(),
            "This utility is for Windows 11 or greater."
        );
        assert_eq!(
            AppError::InvalidDistance.to_string(),
            "Invalid distance option received."
        );
        assert_eq!(
            AppError::Declined.to_string(),
            "User declined update. No changes have been made to your system."
        );

        let version = AppError::VersionQuery(RegistryError::OpenKey {
            path: r"SOFTWARE\Microsoft\Windows NT\CurrentVersion".to_string(),
            code: 2,
        })
        .to_string();
        assert!(
            version.starts_with("Error getting Windows version number: "),
            "{}",
            version
        );

        let response =
            AppError::ConfirmationRead(io::Error::new(io::ErrorKind::UnexpectedEof, "eof"))
                .to_string();
        assert!(
            response.starts_with("Couldn't get response from user: "),
            "{}",
            response
        );
    }

    #[test]
    fn write_errors_carry_the_value_name_and_code() {
        let err = AppError::RegistryWrite(RegistryError::WriteValue {
            name: "IconVerticalSpacing".to_string(),
            code: 5,
        });
        let text = err.to_string();
        assert!(text.starts_with("Couldn't update registry"), "{}", text);
        assert!(text.contains("IconVerticalSpacing"), "{}", text);
        assert!(text.contains("error code 5"), "{}", text);
    }
}
