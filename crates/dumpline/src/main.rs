//! DumpLine - Main Entry Point

use std::io::Write;

use dumpline::{DumpConfig, dump_line};
use dumpline_text::{FontDatabase, ShapingAnalyzer};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging; stdout is reserved for the report
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting DumpLine v{}", dumpline::VERSION);

    let config = DumpConfig::default();
    let fonts = FontDatabase::with_system_fonts();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let summary = dump_line(&ShapingAnalyzer::new(), &fonts, &config, &mut out)?;
    out.flush()?;

    tracing::info!("Printed {} runs with {} glyphs", summary.runs, summary.glyphs);
    Ok(())
}
