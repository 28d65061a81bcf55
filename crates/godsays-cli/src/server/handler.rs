//! Request handlers for the three HTTP endpoints.
//!
//! - `GET /`: plain-text phrase
//! - `GET /json`: `{"god_says": "<phrase>"}`
//! - `GET /health`: status, corpus size and uptime
//!
//! `/` and `/json` accept an optional `amount` query parameter validated the
//! same way as the CLI flag. Without it the generator's stored default is
//! used. When `amount` is repeated only the first occurrence counts.

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use godsays::{PhraseSource, parse_amount};
use serde::{Deserialize, Serialize};

use crate::server::error::ApiError;

const NO_STORE: &str = "no-cache, no-store, must-revalidate";
const NO_CACHE: &str = "no-cache";
const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
const APPLICATION_JSON: &str = "application/json";

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    generator: Arc<dyn PhraseSource>,
    started_at: Instant,
}

impl AppState {
    pub fn new(generator: Arc<dyn PhraseSource>) -> Self {
        Self {
            generator,
            started_at: Instant::now(),
        }
    }
}

/// Query pairs in request order. Kept as a list so a repeated `amount` does
/// not fail deserialization.
pub type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize, Deserialize)]
pub struct GodResponse {
    pub god_says: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub words_count: usize,
    pub uptime: String,
}

/// `GET /`
pub async fn speak_text(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let message = generate(&state, requested_amount(&query)?)?;
    Ok((
        [
            (header::CONTENT_TYPE, TEXT_PLAIN),
            (header::CACHE_CONTROL, NO_STORE),
        ],
        message,
    )
        .into_response())
}

/// `GET /json`
pub async fn speak_json(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response, ApiError> {
    let god_says = generate(&state, requested_amount(&query)?)?;
    json_response(&GodResponse { god_says }, NO_STORE)
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = HealthResponse {
        status: "ok".to_string(),
        words_count: state.generator.words_count(),
        uptime: format_uptime(state.started_at.elapsed()),
    };
    json_response(&body, NO_CACHE)
}

/// Reads the first `amount` query parameter. A missing or empty value means
/// "use the stored default".
fn requested_amount(query: &[(String, String)]) -> Result<Option<usize>, ApiError> {
    let amount = query
        .iter()
        .find(|(key, _)| key == "amount")
        .map(|(_, value)| value.trim());
    match amount {
        None | Some("") => Ok(None),
        Some(raw) => parse_amount(raw)
            .map(Some)
            .map_err(ApiError::InvalidParameter),
    }
}

fn generate(state: &AppState, amount: Option<usize>) -> Result<String, ApiError> {
    let message = match amount {
        None => state.generator.speak(),
        Some(amount) => {
            #[allow(clippy::cast_possible_wrap)]
            let amount = amount as i64;
            state
                .generator
                .speak_with_amount(amount)
                .map_err(ApiError::Generation)?
        }
    };

    if message.is_empty() {
        return Err(ApiError::EmptyMessage);
    }
    Ok(message)
}

fn json_response<T: Serialize>(body: &T, cache_control: &'static str) -> Result<Response, ApiError> {
    let bytes = serde_json::to_vec(body).map_err(ApiError::Encoding)?;
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, APPLICATION_JSON),
            (header::CACHE_CONTROL, cache_control),
        ],
        bytes,
    )
        .into_response())
}

/// Renders an uptime rounded to whole seconds, e.g. `1h2m3s`, `4m0s`, `12s`.
pub fn format_uptime(uptime: Duration) -> String {
    let secs = (uptime.as_millis() + 500) / 1000;
    let (hours, minutes, seconds) = (secs / 3600, secs % 3600 / 60, secs % 60);
    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}
