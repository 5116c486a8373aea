// System status display: DB location and size, record counts, latest analysis.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::db::Database;
use crate::output::terminal;

/// Display system status to the terminal.
///
/// Returns early (without opening anything) when the database file doesn't exist.
pub async fn show(config: &Config, open: impl FnOnce() -> Result<Arc<dyn Database>>) -> Result<()> {
    let db_path = config.db_path.as_str();
    if !Path::new(db_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `quarry init` to set up the database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_path, file_size);

    let db = open()?;
    let stats = db.analysis_stats().await?;
    terminal::display_stats(&stats);

    println!(
        "LLM: {} at {}{}",
        config.llm_model,
        config.openai_base_url,
        if config.require_llm().is_ok() {
            ""
        } else {
            " (OPENAI_API_KEY not set)"
        }
    );
    println!("Keywords per analysis: {}", config.keyword_top_n);

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
