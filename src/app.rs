//! Application flow.
//!
//! The program is strictly sequential: version gate, option parsing,
//! confirmation, registry writes. Each step either advances or returns an
//! [`AppError`] carrying its own exit code.

use crate::cli::Options;
use crate::confirm;
use crate::error::AppError;
use crate::platform;

/// Run the whole flow once, top to bottom.
pub fn run() -> Result<(), AppError> {
    println!("Windows 11 desktop icon spacing utility");

    let is_win11 = platform::is_windows_eleven().map_err(AppError::VersionQuery)?;
    if !is_win11 {
        return Err(AppError::UnsupportedWindows);
    }

    let options = Options::from_cli();
    tracing::debug!(?options, "parsed command line");
    let Some(preset) = options.distance else {
        return Err(AppError::InvalidDistance);
    };
    tracing::debug!(%preset, "selected spacing preset");

    match confirm::user_affirmed(options.update) {
        Ok(true) => {}
        Ok(false) => return Err(AppError::Declined),
        Err(err) => return Err(AppError::ConfirmationRead(err)),
    }

    println!("Updating registry...");
    platform::apply_icon_spacing(preset).map_err(AppError::RegistryWrite)?;

    println!("Done!");
    println!("You may need to reboot for changes to take effect.");
    Ok(())
}
