use std::io;

use ppm_grayscale::{cli, logger};

use tracing::info;

/// Returning the error lets the runtime print its context chain once and
/// exit with a non-zero status.
fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting ppm_grayscale...");

    let stdin = io::stdin();
    let stdout = io::stdout();

    cli::run(&mut stdin.lock(), &mut stdout.lock())
}
