//! # Numero Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (file, `NUMERO_*`, flags)
//! 4. Dispatch the command (interactive form by default)

use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    // The actual setup is in lib.rs for better testability
    numero_cli::run()
}
