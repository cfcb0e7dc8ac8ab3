//! Record Desk - Main Entry Point

use record_desk::app::application::run_app;
use record_desk::helpers::init_tracing;

fn main() {
    // Held until exit so buffered file logs are flushed
    let _log_guard = init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Record Desk");

    run_app();
}
