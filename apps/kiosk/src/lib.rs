//! # Summer Kiosk Library
//!
//! Backend of the ordering screen. Reads one JSON command per line on stdin
//! and writes one JSON response per line on stdout; logs go to stderr.
//!
//! ## Module Organization
//! ```text
//! summer_kiosk_lib/
//! ├── lib.rs          ◄─── You are here (startup & command loop)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart store behind a Mutex
//! │   ├── catalog.rs  ◄─── Menu catalog loading
//! │   ├── config.rs   ◄─── Configuration
//! │   └── toasts.rs   ◄─── Toast queue (the cart's notifier)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Request/response envelope, dispatch
//! │   ├── menu.rs     ◄─── Menu cards and category navigation
//! │   ├── cart.rs     ◄─── Cart manipulation
//! │   └── config.rs   ◄─── Config and header
//! └── error.rs        ◄─── KioskError / ApiError
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::io::{BufRead, Write};

use summer_core::Severity;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::commands::{Request, Response};
use crate::error::{ApiError, KioskError};
use crate::state::{CartState, CatalogState, ConfigState, ToastQueue};

/// All kiosk state, wired together.
#[derive(Debug, Clone)]
pub struct Kiosk {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub cart: CartState,
    pub toasts: ToastQueue,
}

impl Kiosk {
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        let toasts = ToastQueue::new(config.toast_duration_ms);
        Kiosk {
            cart: CartState::new(toasts.clone()),
            config,
            catalog,
            toasts,
        }
    }

    /// Handles one raw command line.
    ///
    /// Failed commands also raise an error toast.
    pub fn handle_line(&self, line: &str) -> Response {
        let result = serde_json::from_str::<Request>(line)
            .map_err(|e| ApiError::validation(format!("Invalid command: {}", e)))
            .and_then(|request| commands::dispatch(self, request));

        if let Err(e) = &result {
            warn!(code = ?e.code, message = %e.message, "Command failed");
            self.toasts.push(&e.message, Severity::Error);
        }

        Response::new(result, self.toasts.drain())
    }

    /// Runs the command loop until `input` ends.
    pub fn serve<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<(), KioskError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = self.handle_line(&line);
            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}

/// Runs the kiosk on stdin/stdout.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging   tracing-subscriber, RUST_LOG, stderr          │
/// │  2. Load Config          defaults + SUMMER_* environment               │
/// │  3. Load Catalog         SUMMER_MENU_PATH or bundled sample menu       │
/// │  4. Serve                one JSON command per stdin line               │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), KioskError> {
    init_tracing();

    info!("Starting Summer Milktea kiosk");

    let config = ConfigState::from_env();
    info!(shop = %config.shop_name, menu = ?config.menu_path, "Configuration loaded");

    let catalog = CatalogState::load(&config)?;
    let kiosk = Kiosk::new(config, catalog);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    kiosk.serve(stdin.lock(), stdout.lock())?;

    info!("Input closed, shutting down");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=summer_core=trace` - Narrow to one crate
/// - Default: INFO, DEBUG for the kiosk
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,summer_kiosk=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
