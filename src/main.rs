//! Mystery Mansion
//!
//! Console entry point. Walk the mansion from stdin, read the verdict on
//! stdout.

use mystery_mansion::{run_session, SessionConfig};
use std::io::{self, stdin, stdout};

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the game text
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = mystery_mansion::VERSION, "Mystery Mansion starting");

    run_session(stdin().lock(), stdout().lock(), SessionConfig::default())?;

    Ok(())
}
