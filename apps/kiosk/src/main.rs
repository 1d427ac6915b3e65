//! # Summer Kiosk Entry Point
//!
//! ```text
//! frontend ──stdin (JSON lines)──► summer-kiosk ──stdout (JSON lines)──► frontend
//!                                       │
//!                                       └──stderr──► logs
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    match summer_kiosk_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Kiosk stopped");
            ExitCode::FAILURE
        }
    }
}
