// Quarry: LLM-backed knowledge extraction with local keyword ranking
//
// This is the library root. Each module corresponds to a major subsystem
// of the analysis pipeline.

pub mod analysis;
pub mod config;
pub mod db;
pub mod keywords;
pub mod llm;
pub mod output;
pub mod status;
pub mod web;
