// SPDX-License-Identifier: MIT OR Apache-2.0
//! `OrdoPlay` sync replay tool.
//!
//! Loads a RON replay script, runs one synchronization pass per recorded
//! change set against an in-memory entity, and prints the final entity as
//! RON on stdout.
//!
//! Usage: `ordoplay_sync_replay <script.ron>`

mod replay;
mod script;

use replay::ReplayError;
use script::{ReplayScript, ScriptError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        eprintln!("Usage: ordoplay_sync_replay <script.ron>");
        std::process::exit(2);
    };

    if let Err(e) = run(&path) {
        tracing::error!("Replay failed: {e}");
        std::process::exit(1);
    }
}

/// Errors surfaced by the tool
#[derive(Debug, Error)]
enum RunError {
    /// Script could not be loaded
    #[error(transparent)]
    Script(#[from] ScriptError),

    /// A pass failed
    #[error(transparent)]
    Replay(#[from] ReplayError),

    /// Final entity could not be written as RON
    #[error("Failed to serialize entity: {0}")]
    Output(#[from] ron::Error),
}

fn run(path: &Path) -> Result<(), RunError> {
    tracing::info!("Loading replay script {:?}", path);
    let script = ReplayScript::load(path)?;
    let report = replay::replay(&script)?;

    let output = ron::ser::to_string_pretty(&report.entity, ron::ser::PrettyConfig::default())?;
    println!("{output}");
    Ok(())
}
