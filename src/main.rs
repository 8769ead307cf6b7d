//! Command-line entry point.
//!
//! Maps the outcome of the application flow to the process exit code.
//! Diagnostics go through `tracing` and stay silent unless `RUST_LOG`
//! enables them.

#[cfg(windows)]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(windows)]
fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "icon_spacing=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let code = match icon_spacing::app::run() {
        Ok(()) => icon_spacing::ExitCode::Success,
        Err(err) => {
            println!("{err}");
            icon_spacing::ExitCode::from(&err)
        }
    };
    std::process::exit(code as i32);
}

// Non-Windows stub builds cleanly and informs the user.
#[cfg(not(windows))]
fn main() {
    println!("icon-spacing is Windows-only. Build on Windows to run.");
}
