use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use builder::config::Config;
use builder::storage::FileStore;
use builder::ResumeSession;

/// Headless host: restores the saved resume, logs its derived signals and writes it
/// back (which also applies any legacy backfill to the stored copy).
fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume builder v{}", env!("CARGO_PKG_VERSION"));

    let store = Arc::new(FileStore::new(&config.storage_dir));
    info!("Using storage at {}", store.dir().display());

    let session = ResumeSession::load(store);
    let document = session.document();
    let order: Vec<&str> = document.section_order.iter().map(|s| s.as_str()).collect();
    info!(
        name = %document.name,
        template = ?document.template,
        "Section order: {}",
        order.join(", ")
    );

    let report = session.ats_report();
    for factor in &report.factors {
        info!(
            status = ?factor.status,
            "{}: {}/{}",
            factor.name,
            factor.score,
            factor.max_score
        );
    }
    info!(
        total = report.total,
        band = report.band().label(),
        "ATS score. {}",
        report.hint
    );

    let preview = session.preview();
    info!(sections = preview.sections.len(), "Preview resolved");

    session.save()?;
    info!("Resume saved");

    Ok(())
}
