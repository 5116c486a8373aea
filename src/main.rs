use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use quarry::analysis::{validate_texts, AnalysisService};
use quarry::config::Config;
use quarry::db::models::SearchFilter;
use quarry::keywords::{KeywordExtractor, StopwordSet};
use quarry::output::terminal;

/// Quarry: LLM knowledge extraction with local keyword ranking.
///
/// Summarizes texts with an LLM (title, topics, sentiment), ranks their most
/// frequent nouns locally, and stores everything for search.
#[derive(Parser)]
#[command(name = "quarry", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the database
    Init,

    /// Run the HTTP API
    Serve {
        /// Port to listen on (default: QUARRY_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: QUARRY_HOST or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Analyze one or more texts (up to 10) and store the results
    Analyze {
        /// Texts to analyze, each at least 10 characters
        #[arg(required = true, num_args = 1..)]
        texts: Vec<String>,
    },

    /// Extract keywords locally, without calling the LLM or storing anything
    Keywords {
        text: String,

        /// How many keywords to return (default: QUARRY_KEYWORD_TOP_N or 3)
        #[arg(long)]
        top_n: Option<usize>,
    },

    /// List stored analyses, optionally filtered
    List {
        #[arg(long)]
        topic: Option<String>,

        #[arg(long)]
        keyword: Option<String>,

        /// positive | neutral | negative
        #[arg(long)]
        sentiment: Option<String>,
    },

    /// Show system status (DB stats, LLM settings)
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quarry=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing Quarry database...");
            let config = Config::load()?;
            let db = quarry::db::initialize_sqlite(&config.db_path)?;
            let table_count = db.table_count().await?;
            println!("Database initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\nQuarry is ready. Set OPENAI_API_KEY in your .env file, then run:");
            println!("  quarry serve");
        }

        Commands::Serve { port, bind } => {
            let mut config = Config::load()?;
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.host = bind;
            }

            let db = quarry::db::initialize_sqlite(&config.db_path)?;
            let service = AnalysisService::from_config(&config, db)?;
            quarry::web::run_server(config, service).await?;
        }

        Commands::Analyze { texts } => {
            let texts = validate_texts(&texts)?;
            let config = Config::load()?;
            let db = quarry::db::open_sqlite(&config.db_path)?;
            let service = AnalysisService::from_config(&config, db)?;

            let pb = if texts.len() > 1 {
                let pb = ProgressBar::new(texts.len() as u64);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template("  Analyzing [{bar:30}] {pos}/{len} ({eta})")?,
                );
                Some(pb)
            } else {
                None
            };

            let mut stored = Vec::new();
            let mut failed = 0usize;
            for (index, text) in texts.iter().enumerate() {
                match service.analyze_text(text).await {
                    Ok(analysis) => stored.push(analysis),
                    Err(e) => {
                        failed += 1;
                        warn!(index, error = %e, "Analysis failed for text, skipping");
                    }
                }
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }
            if let Some(pb) = pb {
                pb.finish_and_clear();
            }

            for analysis in &stored {
                terminal::display_analysis_detail(analysis);
            }

            println!();
            if failed == 0 {
                println!("{}", format!("Stored {} analyses.", stored.len()).green());
            } else {
                println!(
                    "{}",
                    format!("Stored {} analyses, {} failed.", stored.len(), failed).yellow()
                );
            }
        }

        Commands::Keywords { text, top_n } => {
            let config = Config::load()?;
            let stopwords = StopwordSet::english_with_extras(config.extra_stopwords.iter());
            let extractor = KeywordExtractor::new().with_stopwords(stopwords);
            let keywords = extractor.extract_keywords(&text, top_n.unwrap_or(config.keyword_top_n))?;
            terminal::display_keywords(&keywords);
        }

        Commands::List {
            topic,
            keyword,
            sentiment,
        } => {
            let config = Config::load()?;
            let db = quarry::db::open_sqlite(&config.db_path)?;
            let filter = SearchFilter {
                topic,
                keyword,
                sentiment,
            };
            let analyses = if filter.is_empty() {
                db.list_analyses().await?
            } else {
                db.search_analyses(&filter).await?
            };
            terminal::display_analysis_list(&analyses);
        }

        Commands::Status => {
            let config = Config::load()?;
            quarry::status::show(&config, || quarry::db::open_sqlite(&config.db_path)).await?;
        }
    }

    Ok(())
}
