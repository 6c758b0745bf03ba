//! Gemini-backed insight generator.
//!
//! Calls `models/{model}:generateContent` with a JSON response schema and
//! maps the four returned fields onto a [`DailyInsight`]. The API key comes
//! from the OS keyring, falling back to `GEMINI_API_KEY`.

use std::sync::Mutex;

use async_trait::async_trait;
use indoc::formatdoc;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::credentials;
use super::{DailyInsight, InsightError, InsightGenerator, InsightRequest};
use crate::storage::InsightConfig;

const API_KEY_ENV: &str = "GEMINI_API_KEY";

const SYSTEM_INSTRUCTION: &str = "You are FitOs, a Gen Z lifestyle coach. You are authentic, concise, \
and use minimal slang but good vibes. Your goal is to give a daily briefing based on the user's goals, \
stats, and living environment. Do not be generic. Be specific to their location (Village vs City).";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    system_instruction: Content,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

/// The model's JSON payload. Missing or blank fields get per-field defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Briefing {
    vibe: Option<String>,
    workout_tip: Option<String>,
    diet_hack: Option<String>,
    life_style_tip: Option<String>,
}

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl Briefing {
    fn into_insight(self, date: &str) -> DailyInsight {
        DailyInsight {
            date: date.to_string(),
            vibe: or_default(self.vibe, "Let's get after it today."),
            workout_tip: or_default(self.workout_tip, "Focus on form."),
            diet_hack: or_default(self.diet_hack, "Drink water before meals."),
            life_style_tip: or_default(self.life_style_tip, "Put the phone down 30 mins before bed."),
        }
    }
}

pub struct GeminiInsightGenerator {
    client: Client,
    model: String,
    api_base: String,
    api_key: Mutex<Option<String>>,
}

impl GeminiInsightGenerator {
    /// Generator that resolves its key lazily from the keyring or environment.
    pub fn new(config: &InsightConfig) -> Self {
        Self {
            client: Client::new(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
            api_key: Mutex::new(None),
        }
    }

    pub fn with_api_key(config: &InsightConfig, api_key: impl Into<String>) -> Self {
        let generator = Self::new(config);
        if let Ok(mut slot) = generator.api_key.lock() {
            *slot = Some(api_key.into());
        }
        generator
    }

    fn resolve_key(&self) -> Result<String, InsightError> {
        let mut slot = self
            .api_key
            .lock()
            .map_err(|_| InsightError::MissingCredentials)?;
        if let Some(key) = slot.as_ref() {
            return Ok(key.clone());
        }

        let stored = match credentials::get(credentials::GEMINI_API_KEY) {
            Ok(key) => key,
            Err(e) => {
                tracing::debug!(error = %e, "keyring unavailable");
                None
            }
        };
        let key = stored
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|k| !k.is_empty())
            .ok_or(InsightError::MissingCredentials)?;
        *slot = Some(key.clone());
        Ok(key)
    }

    fn build_url(&self, method: &str, api_key: &str) -> String {
        format!("{}/models/{}:{method}?key={api_key}", self.api_base, self.model)
    }

    fn build_prompt(request: &InsightRequest) -> String {
        let user = &request.profile;
        let (steps, water, sleep) = match &request.previous_day {
            Some(day) => (
                day.steps.to_string(),
                day.water_intake_oz.to_string(),
                day.sleep_hours.to_string(),
            ),
            None => ("N/A".into(), "N/A".into(), "N/A".into()),
        };
        formatdoc! {"
            User: {name}, Level {level} ({fitness}).
            Location Environment: {location} (CRITICAL: Adjust advice based on this).
            Goals: {goals}.
            Lifestyle: Sleep is {sleep_type}, Screen time is {screen_time}.

            Stats yesterday (if any):
            Steps: {steps}
            Water: {water}
            Sleep: {sleep}

            INSTRUCTIONS FOR LOCATION:
            - If user is in a VILLAGE: Suggest outdoor activities (running in fields, using farm equipment/heavy objects for lifting), eating fresh local produce/dairy, rising with the sun.
            - If user is in a CITY: Suggest gym workouts, park runs, stair climbing, meal prep for busy schedule, managing pollution/stress.

            Generate a daily briefing for today ({date}) in JSON format containing:
            1. 'vibe': A short, punchy 1-sentence motivation.
            2. 'workoutTip': A specific training focus for today (tailored to Village/City).
            3. 'dietHack': A specific nutritional suggestion (tailored to Village/City availability).
            4. 'lifeStyleTip': A habit correction based on their screen time or sleep.
            ",
            name = user.name,
            level = user.level,
            fitness = user.fitness_level,
            location = user.location_type,
            goals = user.goals.join(", "),
            sleep_type = user.lifestyle.sleep_type,
            screen_time = user.lifestyle.screen_time,
            date = request.date,
        }
    }

    fn build_request(request: &InsightRequest) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part {
                    text: Some(Self::build_prompt(request)),
                }],
            }],
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: Some(SYSTEM_INSTRUCTION.into()),
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: json!({
                    "type": "OBJECT",
                    "properties": {
                        "vibe": { "type": "STRING" },
                        "workoutTip": { "type": "STRING" },
                        "dietHack": { "type": "STRING" },
                        "lifeStyleTip": { "type": "STRING" }
                    },
                    "required": ["vibe", "workoutTip", "dietHack", "lifeStyleTip"]
                }),
            },
        }
    }

    fn map_api_error(status: u16, body: &str) -> InsightError {
        let message = serde_json::from_str::<GenerateResponse>(body)
            .ok()
            .and_then(|r| r.error)
            .map_or_else(|| body.to_string(), |e| e.message);

        match status {
            401 | 403 | 404 => InsightError::Unauthorized(message),
            429 => InsightError::QuotaExceeded(message),
            _ => InsightError::Api { status, message },
        }
    }

    fn extract_text(response: GenerateResponse) -> Result<String, InsightError> {
        if let Some(error) = response.error {
            return Err(InsightError::Malformed(error.message));
        }
        response
            .candidates
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| InsightError::Malformed("no content in response".into()))
    }
}

#[async_trait]
impl InsightGenerator for GeminiInsightGenerator {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, request: &InsightRequest) -> Result<DailyInsight, InsightError> {
        let api_key = self.resolve_key()?;
        let url = self.build_url("generateContent", &api_key);
        let body = Self::build_request(request);

        tracing::debug!(model = %self.model, "sending insight request");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| InsightError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| InsightError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(status = %status, "insight API error");
            return Err(Self::map_api_error(status.as_u16(), &text));
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&text).map_err(|e| InsightError::Malformed(e.to_string()))?;
        let payload = Self::extract_text(parsed)?;
        let briefing: Briefing =
            serde_json::from_str(&payload).map_err(|e| InsightError::Malformed(e.to_string()))?;

        Ok(briefing.into_insight(&request.date))
    }

    fn invalidate_credentials(&self) {
        if let Ok(mut slot) = self.api_key.lock() {
            *slot = None;
        }
        if let Err(e) = credentials::delete(credentials::GEMINI_API_KEY) {
            tracing::warn!(error = %e, "failed to clear stored API key");
        }
    }
}

impl std::fmt::Debug for GeminiInsightGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiInsightGenerator")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
