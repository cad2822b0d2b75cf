//! # DA Pointer Registry Runtime
//!
//! Reads JSON-lines commands from stdin, or from the file named by the first
//! argument, and writes one JSON response per line to stdout.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (logs on stderr, Prometheus registry)
//! 2. Load configuration from the environment and validate it
//! 3. Wire the subsystems
//! 4. Serve commands until end of input

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::fs::File;
use tokio::io::{self, AsyncBufReadExt, AsyncRead, AsyncWriteExt, BufReader};
use tracing::{info, warn};

use registry_runtime::{handle_line, DaRegistry, RegistryConfig, RegistryContainer};
use registry_telemetry::{init_telemetry, TelemetryConfig};
use shared_bus::EventFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("failed to initialize telemetry")?;

    let config = RegistryConfig::from_env().context("failed to load configuration")?;
    let container = RegistryContainer::new(config).context("invalid configuration")?;
    let registry = DaRegistry::from_container(Arc::new(container));
    info!(
        separator = %shared_types::to_hex(&registry.domain_separator()),
        "DA pointer registry ready"
    );

    match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path)
                .await
                .with_context(|| format!("failed to open command file {path}"))?;
            serve(&registry, file).await
        }
        None => serve(&registry, io::stdin()).await,
    }
}

async fn serve<R: AsyncRead + Unpin>(registry: &DaRegistry, input: R) -> Result<()> {
    let mut events = registry.subscribe(EventFilter::all());
    let mut lines = BufReader::new(input).lines();
    let mut stdout = io::stdout();
    let mut served = 0u64;

    while let Some(line) = lines.next_line().await.context("failed to read command")? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let response = handle_line(registry, &mut events, line).await;
        if let Some(error) = &response.error {
            warn!(kind = %error.kind, message = %error.message, "Command failed");
        }

        let mut encoded = serde_json::to_vec(&response).context("failed to encode response")?;
        encoded.push(b'\n');
        stdout
            .write_all(&encoded)
            .await
            .context("failed to write response")?;
        served += 1;
    }

    stdout.flush().await.context("failed to flush stdout")?;
    info!(commands = served, "Input exhausted, shutting down");
    Ok(())
}
