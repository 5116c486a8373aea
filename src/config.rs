use std::env;
use std::str::FromStr;

use anyhow::Result;

use crate::keywords::DEFAULT_TOP_N;
use crate::llm::openai::{DEFAULT_BASE_URL, DEFAULT_MODEL};

const DEFAULT_DB_PATH: &str = "./quarry.db";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_LLM_TIMEOUT_SECS: u64 = 30;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Clone)]
pub struct Config {
    pub db_path: String,
    /// Bearer token for the chat-completions API. Only `serve` and `analyze` need it.
    pub openai_api_key: String,
    /// Base URL of an OpenAI-compatible API, without the /chat/completions suffix
    pub openai_base_url: String,
    pub llm_model: String,
    pub llm_timeout_secs: u64,
    /// Client-side request pacing; None means unlimited
    pub llm_requests_per_second: Option<f64>,
    pub host: String,
    pub port: u16,
    /// How many keywords are stored with each analysis
    pub keyword_top_n: usize,
    /// Added to the built-in English stopword list
    pub extra_stopwords: Vec<String>,
    /// CORS origins; a single "*" allows any
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            openai_api_key: String::new(),
            openai_base_url: DEFAULT_BASE_URL.to_string(),
            llm_model: DEFAULT_MODEL.to_string(),
            llm_timeout_secs: DEFAULT_LLM_TIMEOUT_SECS,
            llm_requests_per_second: None,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            keyword_top_n: DEFAULT_TOP_N,
            extra_stopwords: Vec::new(),
            allowed_origins: vec!["*".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default except the API key, which is checked
    /// separately by `require_llm` so `init`, `keywords` and `status`
    /// work without one.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build a config from any variable source. `load` passes the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let llm_requests_per_second = match get("QUARRY_LLM_RPS") {
            Some(raw) => Some(parse_value::<f64>("QUARRY_LLM_RPS", &raw)?),
            None => None,
        };

        Ok(Self {
            db_path: get("QUARRY_DB_PATH").unwrap_or(defaults.db_path),
            openai_api_key: lookup("OPENAI_API_KEY").unwrap_or_default(),
            openai_base_url: get("OPENAI_BASE_URL").unwrap_or(defaults.openai_base_url),
            llm_model: get("QUARRY_LLM_MODEL").unwrap_or(defaults.llm_model),
            llm_timeout_secs: get("QUARRY_LLM_TIMEOUT_SECS")
                .map(|raw| parse_value("QUARRY_LLM_TIMEOUT_SECS", &raw))
                .transpose()?
                .unwrap_or(defaults.llm_timeout_secs),
            llm_requests_per_second,
            host: get("QUARRY_HOST").unwrap_or(defaults.host),
            port: get("QUARRY_PORT")
                .map(|raw| parse_value("QUARRY_PORT", &raw))
                .transpose()?
                .unwrap_or(defaults.port),
            keyword_top_n: get("QUARRY_KEYWORD_TOP_N")
                .map(|raw| parse_value("QUARRY_KEYWORD_TOP_N", &raw))
                .transpose()?
                .unwrap_or(defaults.keyword_top_n),
            extra_stopwords: get("QUARRY_EXTRA_STOPWORDS")
                .map(|raw| split_list(&raw))
                .unwrap_or(defaults.extra_stopwords),
            allowed_origins: get("QUARRY_ALLOWED_ORIGINS")
                .map(|raw| split_list(&raw))
                .filter(|origins| !origins.is_empty())
                .unwrap_or(defaults.allowed_origins),
        })
    }

    /// Check that the LLM API key is configured.
    /// Call this before any operation that sends text to the LLM.
    pub fn require_llm(&self) -> Result<()> {
        if self.openai_api_key.trim().is_empty() {
            anyhow::bail!(
                "OPENAI_API_KEY not set. Add it to your .env file.\n\
                 Set OPENAI_BASE_URL too if you use a compatible server other than OpenAI."
            );
        }
        Ok(())
    }

    /// True when CORS should allow every origin.
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }
}

fn parse_value<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid value for {name} ({raw:?}): {e}"))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.db_path, "./quarry.db");
        assert_eq!(config.openai_base_url, "https://api.openai.com/v1");
        assert_eq!(config.llm_model, "gpt-3.5-turbo");
        assert_eq!(config.llm_timeout_secs, 30);
        assert_eq!(config.llm_requests_per_second, None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8000);
        assert_eq!(config.keyword_top_n, 3);
        assert!(config.extra_stopwords.is_empty());
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("QUARRY_DB_PATH", "/tmp/q.db"),
            ("QUARRY_PORT", "9001"),
            ("QUARRY_LLM_RPS", "0.5"),
            ("QUARRY_KEYWORD_TOP_N", "5"),
            ("QUARRY_EXTRA_STOPWORDS", "recipe, Dish ,,"),
            ("QUARRY_ALLOWED_ORIGINS", "http://localhost:3000,https://app.example.com"),
        ])
        .unwrap();
        assert_eq!(config.db_path, "/tmp/q.db");
        assert_eq!(config.port, 9001);
        assert_eq!(config.llm_requests_per_second, Some(0.5));
        assert_eq!(config.keyword_top_n, 5);
        assert_eq!(config.extra_stopwords, vec!["recipe", "Dish"]);
        assert_eq!(config.allowed_origins.len(), 2);
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_blank_values_use_defaults() {
        let config = config_from(&[("QUARRY_PORT", "  "), ("QUARRY_ALLOWED_ORIGINS", " , ")]).unwrap();
        assert_eq!(config.port, 8000);
        assert!(config.allows_any_origin());
    }

    #[test]
    fn test_malformed_number_is_an_error() {
        let err = config_from(&[("QUARRY_PORT", "eighty")]).err().unwrap();
        assert!(err.to_string().contains("QUARRY_PORT"));
        assert!(config_from(&[("QUARRY_KEYWORD_TOP_N", "-1")]).is_err());
    }

    #[test]
    fn test_require_llm() {
        assert!(config_from(&[]).unwrap().require_llm().is_err());
        let config = config_from(&[("OPENAI_API_KEY", "sk-test")]).unwrap();
        assert!(config.require_llm().is_ok());
    }
}
