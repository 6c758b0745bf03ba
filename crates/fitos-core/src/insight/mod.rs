//! Daily coaching insight.
//!
//! An external [`InsightGenerator`] turns the profile plus yesterday's stats
//! into a four-field briefing. Generation is best effort: any failure yields
//! [`fallback_insight`], and credential failures additionally ask the
//! generator to drop its stored key. The cached insight is only valid on the
//! day stamped in it.

pub mod credentials;
mod gemini;

pub use gemini::GeminiInsightGenerator;

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::error::Result;
use crate::progression::{Progression, UserProfile};
use crate::stats::{DailyStats, StatsLedger};
use crate::storage::{keys, load_record, save_record, Store};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyInsight {
    pub date: String,
    /// One-line motivation.
    pub vibe: String,
    pub workout_tip: String,
    pub diet_hack: String,
    pub life_style_tip: String,
}

/// Fixed briefing used when generation fails.
pub fn fallback_insight(date: impl Into<String>) -> DailyInsight {
    DailyInsight {
        date: date.into(),
        vibe: "System offline. Manually override your limits.".into(),
        workout_tip: "Stick to the basics. Consistency is key.".into(),
        diet_hack: "Eat real food. Mostly plants.".into(),
        life_style_tip: "Breathe. You got this.".into(),
    }
}

/// Everything a generator gets to work with.
#[derive(Debug, Clone, Serialize)]
pub struct InsightRequest {
    pub date: String,
    pub profile: UserProfile,
    pub previous_day: Option<DailyStats>,
}

#[derive(Debug, Error)]
pub enum InsightError {
    #[error("no API key configured")]
    MissingCredentials,

    #[error("credentials rejected: {0}")]
    Unauthorized(String),

    #[error("quota exceeded: {0}")]
    QuotaExceeded(String),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Malformed(String),

    #[error("generation timed out after {0:?}")]
    TimedOut(Duration),
}

impl InsightError {
    /// Whether the stored credential should be discarded so the next
    /// attempt re-authenticates.
    pub fn invalidates_credentials(&self) -> bool {
        matches!(self, InsightError::Unauthorized(_))
    }
}

#[async_trait]
pub trait InsightGenerator: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &str;

    async fn generate(&self, request: &InsightRequest) -> Result<DailyInsight, InsightError>;

    /// Forget any cached or stored credential.
    fn invalidate_credentials(&self) {}
}

/// Day-stamped insight storage.
pub struct InsightCache<'a> {
    store: &'a dyn Store,
    clock: &'a dyn Clock,
}

impl<'a> InsightCache<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn Clock) -> Self {
        Self { store, clock }
    }

    pub fn save(&self, insight: &DailyInsight) -> Result<()> {
        save_record(self.store, keys::DAILY_INSIGHT, insight)
    }

    /// Today's insight; `None` once the stamped day has passed.
    pub fn load(&self) -> Option<DailyInsight> {
        let insight: DailyInsight = load_record(self.store, keys::DAILY_INSIGHT)?;
        if insight.date != self.clock.today() {
            tracing::debug!(stamped = %insight.date, "cached insight expired");
            return None;
        }
        Some(insight)
    }
}

/// Where a returned insight came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSource {
    Cache,
    Generated,
    Fallback,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightOutcome {
    pub insight: DailyInsight,
    pub source: InsightSource,
    /// Set when the fallback was used.
    pub error: Option<String>,
}

/// Runs one generation attempt and keeps the cache in step.
pub struct InsightService<'a> {
    store: &'a dyn Store,
    clock: &'a dyn Clock,
    timeout: Duration,
}

impl<'a> InsightService<'a> {
    pub fn new(store: &'a dyn Store, clock: &'a dyn Clock, timeout: Duration) -> Self {
        Self {
            store,
            clock,
            timeout,
        }
    }

    pub fn cache(&self) -> InsightCache<'a> {
        InsightCache::new(self.store, self.clock)
    }

    /// Cached insight for today, generating one if there is none.
    pub async fn today_or_refresh(&self, generator: &dyn InsightGenerator) -> Result<InsightOutcome> {
        if let Some(insight) = self.cache().load() {
            return Ok(InsightOutcome {
                insight,
                source: InsightSource::Cache,
                error: None,
            });
        }
        self.refresh(generator).await
    }

    /// Generate a fresh insight for today.
    ///
    /// Fails only with `NotOnboarded`. Generation errors and timeouts return
    /// the fallback insight, which is cached like a generated one. If the
    /// day rolls over while the request is in flight the result is returned
    /// but not cached.
    pub async fn refresh(&self, generator: &dyn InsightGenerator) -> Result<InsightOutcome> {
        let profile = Progression::new(self.store, self.clock).require_profile()?;
        let previous_day = StatsLedger::new(self.store, self.clock).previous_day();
        let request = InsightRequest {
            date: self.clock.today(),
            profile,
            previous_day,
        };

        let attempt = match tokio::time::timeout(self.timeout, generator.generate(&request)).await {
            Ok(result) => result,
            Err(_) => Err(InsightError::TimedOut(self.timeout)),
        };

        let outcome = match attempt {
            Ok(mut insight) => {
                insight.date = request.date.clone();
                tracing::info!(generator = generator.name(), date = %insight.date, "insight generated");
                InsightOutcome {
                    insight,
                    source: InsightSource::Generated,
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(generator = generator.name(), error = %e, "insight generation failed; using fallback");
                if e.invalidates_credentials() {
                    tracing::warn!(generator = generator.name(), "invalidating stored credentials");
                    generator.invalidate_credentials();
                }
                InsightOutcome {
                    insight: fallback_insight(request.date.clone()),
                    source: InsightSource::Fallback,
                    error: Some(e.to_string()),
                }
            }
        };

        if self.clock.today() == request.date {
            self.cache().save(&outcome.insight)?;
        } else {
            tracing::debug!(requested = %request.date, "day changed during generation; not caching");
        }
        Ok(outcome)
    }
}
