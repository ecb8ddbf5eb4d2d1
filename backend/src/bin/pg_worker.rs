//! Helper binary invoked by `pg_embedded_setup_unpriv` when tests run as root.
//!
//! Usage: `pg-worker <setup|start|stop> <payload.json>`. The payload is a
//! serialised [`pg_embedded_setup_unpriv::worker::WorkerPayload`] carrying the
//! PostgreSQL settings and the environment the operation needs.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Report, Result};
use pg_embedded_setup_unpriv::worker::{PlainSecret, WorkerPayload};
use postgresql_embedded::PostgreSQL;
use tokio::runtime::Builder;

/// Lifecycle step to run against the embedded cluster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Operation {
    Setup,
    Start,
    Stop,
}

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pg-worker", about = "Run one embedded PostgreSQL lifecycle step")]
struct Args {
    /// Operation to perform.
    #[arg(value_enum)]
    operation: Operation,
    /// Path to the JSON worker payload.
    config: PathBuf,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let payload = load_payload(&args.config)?;
    execute(args.operation, payload)
}

fn load_payload(path: &Path) -> Result<WorkerPayload> {
    let raw = fs::read(path)
        .with_context(|| format!("failed to read worker config at {}", path.display()))?;
    serde_json::from_slice(&raw)
        .with_context(|| format!("failed to parse worker config at {}", path.display()))
}

fn execute(operation: Operation, payload: WorkerPayload) -> Result<()> {
    let settings = payload
        .settings
        .into_settings()
        .map_err(|err| Report::new(err).wrap_err("failed to rebuild postgres settings"))?;
    apply_environment(payload.environment);

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build pg-worker runtime")?;

    let mut postgres = PostgreSQL::new(settings);
    runtime
        .block_on(async move {
            match operation {
                Operation::Setup => postgres.setup().await,
                Operation::Start => postgres.start().await,
                Operation::Stop => postgres.stop().await,
            }
        })
        .with_context(|| format!("postgresql_embedded {operation:?} failed"))
}

fn apply_environment(vars: Vec<(String, Option<PlainSecret>)>) {
    for (key, value) in vars {
        // SAFETY: runs before the runtime is built, while the process is
        // still single-threaded.
        match value {
            Some(val) => unsafe { env::set_var(&key, val.expose()) },
            None => unsafe { env::remove_var(&key) },
        }
    }
}
