//! Interactive confirmation prompt.
//!
//! Registry changes are gated behind a single-keystroke confirmation unless
//! the caller opted into unattended operation.

use std::io::{self, Read, Write};

/// Ask the user to confirm the registry change.
///
/// Returns immediately with `Ok(true)` when `assume_yes` is set, performing
/// no I/O at all. Otherwise prints a warning and blocks until one byte
/// arrives on standard input; only `y` or `Y` confirms. A read failure is
/// reported as an error, distinct from a clean decline.
pub fn user_affirmed(assume_yes: bool) -> io::Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    println!("Proceeding will make changes to your registry.");
    println!("Are you sure? (enter `y` or `Y` to confirm, any other key to cancel)");
    print!("> ");
    let _ = io::stdout().flush();

    read_decision(&mut io::stdin().lock())
}

/// Read exactly one byte and interpret it as a yes/no answer.
fn read_decision(input: &mut impl Read) -> io::Result<bool> {
    let mut byte = [0u8; 1];
    input.read_exact(&mut byte)?;
    Ok(matches!(byte[0], b'y' | b'Y'))
}
