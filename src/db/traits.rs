// Database trait: backend-agnostic async interface for all DB operations.
//
// Implementor: SqliteDatabase (wraps rusqlite). Methods are async so the
// web handlers and the analysis service can hold an `Arc<dyn Database>`
// without caring how the backend schedules its work.
//
// The trait mirrors the queries.rs function signatures.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use super::models::{Analysis, AnalysisStats, SearchFilter};

#[async_trait]
pub trait Database: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Analyses ---

    async fn insert_analysis(&self, analysis: &Analysis) -> Result<()>;

    /// Fetch a live (not soft-deleted) analysis by id.
    async fn get_analysis(&self, id: &Uuid) -> Result<Option<Analysis>>;

    /// All live analyses, newest first.
    async fn list_analyses(&self) -> Result<Vec<Analysis>>;

    /// Live analyses matching every supplied filter condition, newest first.
    async fn search_analyses(&self, filter: &SearchFilter) -> Result<Vec<Analysis>>;

    async fn analysis_stats(&self) -> Result<AnalysisStats>;
}
