// Colored terminal output for analyses and keyword results.
//
// main.rs delegates all CLI display here.

use colored::Colorize;

use crate::db::models::{Analysis, AnalysisStats};
use crate::llm::Sentiment;

/// Display stored analyses as a compact table, newest first.
pub fn display_analysis_list(analyses: &[Analysis]) {
    if analyses.is_empty() {
        println!("No analyses found. Run `quarry analyze \"<text>\"` to create one.");
        return;
    }

    println!(
        "\n{}",
        format!("=== Analyses ({}) ===", analyses.len()).bold()
    );
    println!();

    println!(
        "  {:<36}  {:<24}  {:<8}  {:>4}  {}",
        "ID".dimmed(),
        "Created".dimmed(),
        "Tone".dimmed(),
        "Conf".dimmed(),
        "Title / summary".dimmed(),
    );
    println!("  {}", "-".repeat(100).dimmed());

    for analysis in analyses {
        let label = analysis.title.as_deref().unwrap_or(&analysis.summary);
        println!(
            "  {:<36}  {:<24}  {:<8}  {:>4.1}  {}",
            analysis.id,
            analysis.created_at,
            colorize_sentiment(analysis.sentiment),
            analysis.confidence_score,
            super::truncate_chars(label, 40),
        );
    }
    println!();
}

/// Display one analysis with all of its fields.
pub fn display_analysis_detail(analysis: &Analysis) {
    let heading = analysis.title.as_deref().unwrap_or("Untitled");
    println!("\n{}", format!("=== {heading} ===").bold());
    println!("  {} {}", "id:".dimmed(), analysis.id);
    println!("  {} {}", "created:".dimmed(), analysis.created_at);
    println!(
        "  {} {}  (confidence {:.1})",
        "sentiment:".dimmed(),
        colorize_sentiment(analysis.sentiment),
        analysis.confidence_score
    );
    println!("  {} {}", "topics:".dimmed(), analysis.topics.join(", ").cyan());
    println!(
        "  {} {}",
        "keywords:".dimmed(),
        analysis.keywords.join(", ").bold()
    );
    println!("\n  {}", analysis.summary);
    println!(
        "\n  {}",
        super::truncate_chars(&analysis.original_text, 160).dimmed()
    );
}

/// Display locally extracted keywords, ranked.
pub fn display_keywords(keywords: &[String]) {
    if keywords.is_empty() {
        println!("No keywords found.");
        return;
    }
    for (i, keyword) in keywords.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, keyword.bold());
    }
}

/// Display the sentiment breakdown from `quarry status`.
pub fn display_stats(stats: &AnalysisStats) {
    println!("Analyses stored: {}", stats.total);
    for (label, count) in &stats.by_sentiment {
        let colored_label = match Sentiment::parse(label) {
            Some(sentiment) => colorize_sentiment(sentiment),
            None => label.dimmed(),
        };
        println!("  {:<10} {}", colored_label, count);
    }
    match &stats.latest_created_at {
        Some(ts) => println!("Latest analysis: {ts}"),
        None => println!("Latest analysis: none yet"),
    }
}

fn colorize_sentiment(sentiment: Sentiment) -> colored::ColoredString {
    match sentiment {
        Sentiment::Positive => sentiment.as_str().green(),
        Sentiment::Neutral => sentiment.as_str().normal(),
        Sentiment::Negative => sentiment.as_str().red(),
    }
}
