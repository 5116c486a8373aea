// Client-side pacing for LLM API calls.
//
// Hosted chat-completions APIs enforce per-key request quotas. When a limit
// is configured (QUARRY_LLM_RPS), requests are spaced at least 1/rps seconds
// apart so a burst of batch submissions doesn't trip HTTP 429s.

use std::sync::Arc;
use tokio::sync::Mutex;
use tokio::time::{Duration, Instant};

/// Enforces a minimum interval between consecutive requests.
#[derive(Clone)]
pub struct RateLimiter {
    inner: Arc<Mutex<RateLimiterInner>>,
}

struct RateLimiterInner {
    interval: Duration,
    /// When the previous request was let through
    last_request: Option<Instant>,
}

impl RateLimiter {
    /// Allow at most `requests_per_second` requests per second.
    ///
    /// Returns `None` for non-positive or non-finite rates, meaning "no limit".
    pub fn new(requests_per_second: f64) -> Option<Self> {
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            return None;
        }
        let interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Some(Self {
            inner: Arc::new(Mutex::new(RateLimiterInner {
                interval,
                last_request: None,
            })),
        })
    }

    pub async fn interval(&self) -> Duration {
        self.inner.lock().await.interval
    }

    /// Wait until the next request is allowed.
    ///
    /// Each caller reserves the slot one interval after the previous
    /// reservation, so overlapping callers are released in turn.
    pub async fn acquire(&self) {
        let mut inner = self.inner.lock().await;
        let now = Instant::now();
        let interval = inner.interval;
        let next = inner
            .last_request
            .map_or(now, |last| (last + interval).max(now));
        inner.last_request = Some(next);
        drop(inner);

        tokio::time::sleep_until(next).await;
    }
}
