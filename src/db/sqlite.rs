// SqliteDatabase: rusqlite backend implementing the Database trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Sync.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across an .await.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;
use uuid::Uuid;

use super::models::{Analysis, AnalysisStats, SearchFilter};
use super::traits::Database;

pub struct SqliteDatabase {
    conn: Mutex<Connection>,
}

impl SqliteDatabase {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Database for SqliteDatabase {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn insert_analysis(&self, analysis: &Analysis) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::insert_analysis(&conn, analysis)
    }

    async fn get_analysis(&self, id: &Uuid) -> Result<Option<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::get_analysis(&conn, id)
    }

    async fn list_analyses(&self) -> Result<Vec<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::list_analyses(&conn)
    }

    async fn search_analyses(&self, filter: &SearchFilter) -> Result<Vec<Analysis>> {
        let conn = self.conn.lock().await;
        super::queries::search_analyses(&conn, filter)
    }

    async fn analysis_stats(&self) -> Result<AnalysisStats> {
        let conn = self.conn.lock().await;
        super::queries::analysis_stats(&conn)
    }
}
