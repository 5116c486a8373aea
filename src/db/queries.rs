// Database queries: CRUD operations for the analyses table.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.
//
// Soft-deleted rows (deleted_at set) are invisible to every read here.

use anyhow::Result;
use rusqlite::types::Type;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use uuid::Uuid;

use super::models::{Analysis, AnalysisStats, SearchFilter};
use crate::llm::Sentiment;

const SELECT_COLUMNS: &str = "SELECT id, original_text, summary, title, topics, sentiment,
        keywords, confidence_score, created_at, updated_at
     FROM analyses";

// Same-millisecond inserts fall back to insertion order
const NEWEST_FIRST: &str = "ORDER BY created_at DESC, rowid DESC";

/// Store a new analysis record.
pub fn insert_analysis(conn: &Connection, analysis: &Analysis) -> Result<()> {
    let topics = serde_json::to_string(&analysis.topics)?;
    let keywords = serde_json::to_string(&analysis.keywords)?;
    conn.execute(
        "INSERT INTO analyses (id, original_text, summary, title, topics, sentiment,
                               keywords, confidence_score, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            analysis.id.to_string(),
            analysis.original_text,
            analysis.summary,
            analysis.title,
            topics,
            analysis.sentiment.as_str(),
            keywords,
            analysis.confidence_score,
            analysis.created_at,
            analysis.updated_at,
        ],
    )?;
    Ok(())
}

/// Fetch one analysis by id.
pub fn get_analysis(conn: &Connection, id: &Uuid) -> Result<Option<Analysis>> {
    let sql = format!("{SELECT_COLUMNS} WHERE id = ?1 AND deleted_at IS NULL");
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt
        .query_row(params![id.to_string()], row_to_analysis)
        .optional()?;
    Ok(result)
}

/// All analyses, newest first.
pub fn list_analyses(conn: &Connection) -> Result<Vec<Analysis>> {
    search_analyses(conn, &SearchFilter::default())
}

/// Analyses matching every condition in the filter, newest first.
///
/// Topic and keyword are membership tests against the stored JSON arrays.
pub fn search_analyses(conn: &Connection, filter: &SearchFilter) -> Result<Vec<Analysis>> {
    let mut conditions = vec!["deleted_at IS NULL".to_string()];
    let mut values: Vec<&str> = Vec::new();

    if let Some(topic) = &filter.topic {
        values.push(topic);
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(analyses.topics) WHERE json_each.value = ?{})",
            values.len()
        ));
    }
    if let Some(keyword) = &filter.keyword {
        values.push(keyword);
        conditions.push(format!(
            "EXISTS (SELECT 1 FROM json_each(analyses.keywords) WHERE json_each.value = ?{})",
            values.len()
        ));
    }
    if let Some(sentiment) = &filter.sentiment {
        values.push(sentiment);
        conditions.push(format!("sentiment = ?{}", values.len()));
    }

    let sql = format!(
        "{SELECT_COLUMNS} WHERE {} {NEWEST_FIRST}",
        conditions.join(" AND ")
    );
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values), row_to_analysis)?;

    let mut analyses = Vec::new();
    for row in rows {
        analyses.push(row?);
    }
    Ok(analyses)
}

/// Totals for the status display.
pub fn analysis_stats(conn: &Connection) -> Result<AnalysisStats> {
    let total: i64 = conn.query_row(
        "SELECT COUNT(*) FROM analyses WHERE deleted_at IS NULL",
        [],
        |row| row.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT sentiment, COUNT(*) AS n FROM analyses
         WHERE deleted_at IS NULL
         GROUP BY sentiment
         ORDER BY n DESC, sentiment ASC",
    )?;
    let by_sentiment = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<rusqlite::Result<Vec<(String, i64)>>>()?;

    let latest_created_at: Option<String> = conn.query_row(
        "SELECT MAX(created_at) FROM analyses WHERE deleted_at IS NULL",
        [],
        |row| row.get(0),
    )?;

    Ok(AnalysisStats {
        total,
        by_sentiment,
        latest_created_at,
    })
}

fn row_to_analysis(row: &Row<'_>) -> rusqlite::Result<Analysis> {
    let id: String = row.get(0)?;
    let id = Uuid::parse_str(&id)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(0, Type::Text, Box::new(e)))?;

    let sentiment: String = row.get(5)?;
    Ok(Analysis {
        id,
        original_text: row.get(1)?,
        summary: row.get(2)?,
        title: row.get(3)?,
        topics: json_list(row, 4)?,
        // Rows are only written through insert_analysis, so this is always a known label
        sentiment: Sentiment::parse(&sentiment).unwrap_or(Sentiment::Neutral),
        keywords: json_list(row, 6)?,
        confidence_score: row.get::<_, Option<f64>>(7)?.unwrap_or(0.0),
        created_at: row.get(8)?,
        updated_at: row.get(9)?,
    })
}

/// Decode a nullable JSON array column. NULL reads as an empty list.
fn json_list(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<String>> {
    let raw: Option<String> = row.get(idx)?;
    match raw {
        Some(json) => serde_json::from_str(&json)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e))),
        None => Ok(Vec::new()),
    }
}
