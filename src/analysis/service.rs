// AnalysisService: LLM analysis + local keywords + persistence, per text.

use std::sync::Arc;

use anyhow::Result;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::Config;
use crate::db::models::{Analysis, SearchFilter};
use crate::db::{now_timestamp, Database};
use crate::keywords::{KeywordExtractor, StopwordSet, DEFAULT_TOP_N};
use crate::llm::{LlmError, OpenAiAnalyzer, TextAnalyzer};
use crate::output::truncate_chars;

/// Why a single text couldn't be analyzed and stored.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("LLM service failed: {0}")]
    Llm(#[from] LlmError),

    #[error("Keyword extraction failed: {0:#}")]
    Keywords(anyhow::Error),

    #[error("Failed to save analysis: {0:#}")]
    Persistence(anyhow::Error),
}

pub struct AnalysisService {
    analyzer: Arc<dyn TextAnalyzer>,
    extractor: KeywordExtractor,
    db: Arc<dyn Database>,
    keyword_top_n: usize,
}

impl AnalysisService {
    pub fn new(
        analyzer: Arc<dyn TextAnalyzer>,
        extractor: KeywordExtractor,
        db: Arc<dyn Database>,
    ) -> Self {
        Self {
            analyzer,
            extractor,
            db,
            keyword_top_n: DEFAULT_TOP_N,
        }
    }

    /// Wire up the OpenAI analyzer and the configured stopwords.
    pub fn from_config(config: &Config, db: Arc<dyn Database>) -> Result<Self> {
        config.require_llm()?;
        let analyzer = OpenAiAnalyzer::from_config(config)?;
        let stopwords = StopwordSet::english_with_extras(config.extra_stopwords.iter());
        let extractor = KeywordExtractor::new().with_stopwords(stopwords);
        Ok(Self::new(Arc::new(analyzer), extractor, db).with_keyword_top_n(config.keyword_top_n))
    }

    pub fn with_keyword_top_n(mut self, top_n: usize) -> Self {
        self.keyword_top_n = top_n;
        self
    }

    /// Analyze one text and store the result as a new record.
    pub async fn analyze_text(&self, text: &str) -> Result<Analysis, AnalysisError> {
        let llm = self.analyzer.analyze(text).await?;

        let keywords = self
            .extractor
            .extract_keywords(text, self.keyword_top_n)
            .map_err(AnalysisError::Keywords)?;

        let analysis = Analysis {
            id: Uuid::new_v4(),
            original_text: text.to_string(),
            summary: llm.summary,
            title: llm.title,
            topics: llm.topics,
            sentiment: llm.sentiment,
            keywords,
            confidence_score: llm.confidence_score,
            created_at: now_timestamp(),
            updated_at: None,
        };

        self.db
            .insert_analysis(&analysis)
            .await
            .map_err(AnalysisError::Persistence)?;

        info!(
            id = %analysis.id,
            sentiment = %analysis.sentiment,
            keywords = ?analysis.keywords,
            "Stored analysis"
        );

        Ok(analysis)
    }

    /// Analyze texts one after another, skipping the ones that fail.
    ///
    /// Returns the stored records in input order. Failures are logged, not
    /// returned, so an empty result is possible.
    pub async fn analyze_texts(&self, texts: &[String]) -> Vec<Analysis> {
        let mut analyses = Vec::with_capacity(texts.len());

        for (index, text) in texts.iter().enumerate() {
            match self.analyze_text(text).await {
                Ok(analysis) => analyses.push(analysis),
                Err(e) => {
                    warn!(
                        index,
                        error = %e,
                        text_preview = %truncate_chars(text, 50),
                        "Analysis failed for text, skipping"
                    );
                }
            }
        }

        analyses
    }

    /// Records matching the filter, newest first. Blank filter values are ignored.
    pub async fn search(&self, filter: SearchFilter) -> Result<Vec<Analysis>> {
        let filter = SearchFilter {
            topic: non_blank(filter.topic),
            keyword: non_blank(filter.keyword),
            sentiment: non_blank(filter.sentiment),
        };
        self.db.search_analyses(&filter).await
    }

    /// Every record, newest first.
    pub async fn list_all(&self) -> Result<Vec<Analysis>> {
        self.db.list_analyses().await
    }

    pub async fn get(&self, id: &Uuid) -> Result<Option<Analysis>> {
        self.db.get_analysis(id).await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
