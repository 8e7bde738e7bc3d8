//! Workscope — read-only workspace introspection for AI assistants.
//!
//! Thin binary entry point. All logic lives in the `workscope-core`
//! and `workscope-server` crates.

use workscope_server::{Server, ServerConfig};

fn main() -> anyhow::Result<()> {
    // Initialise structured logging. Stdout carries the protocol, so logs go
    // to stderr.
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("Workscope starting");

    let config = ServerConfig::from_env();
    let server = Server::new(config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    server
        .serve(stdin.lock(), stdout.lock())
        .map_err(|e| anyhow::anyhow!("stdio transport error: {e}"))?;

    Ok(())
}
