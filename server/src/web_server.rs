use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use common::leaderboard::{Leaderboard, LeaderboardError, ScoreStore, ScoreSubmission};
use common::log;

pub struct WebServerState<S: ScoreStore> {
    pub leaderboard: Leaderboard<S>,
}

impl<S: ScoreStore> Clone for WebServerState<S> {
    fn clone(&self) -> Self {
        Self {
            leaderboard: self.leaderboard.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SubmitScoreBody {
    #[serde(default)]
    pub player_name: Option<String>,
    #[serde(default)]
    pub score: Option<Value>,
    #[serde(default)]
    pub game_duration: Option<Value>,
}

#[derive(Debug, Serialize)]
struct SubmitScoreReply {
    success: bool,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

impl ApiError {
    fn bad_request(error: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: error.into(),
            details: None,
        }
    }

    fn internal(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

pub fn build_router<S: ScoreStore>(leaderboard: Leaderboard<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/score", get(get_leaderboard::<S>).post(submit_score::<S>))
        .route("/api/leaderboard", get(get_leaderboard::<S>))
        .route("/health", get(health))
        .method_not_allowed_fallback(method_not_allowed)
        .layer(cors)
        .with_state(WebServerState { leaderboard })
}

pub async fn run_web_server<S: ScoreStore>(listener: TcpListener, leaderboard: Leaderboard<S>) {
    let app = build_router(leaderboard);

    match listener.local_addr() {
        Ok(addr) => log!("Web server listening on {}", addr),
        Err(e) => log!("Web server listening on unknown address: {}", e),
    }

    if let Err(e) = axum::serve(listener, app).await {
        log!("Web server error: {}", e);
    }
}

/// Whole non-negative numbers only; `12.0` is accepted, `12.5` is not.
fn parse_score(value: &Value) -> Option<u32> {
    if let Some(score) = value.as_u64() {
        return u32::try_from(score).ok();
    }
    let score = value.as_f64()?;
    if score >= 0.0 && score.fract() == 0.0 && score <= u32::MAX as f64 {
        Some(score as u32)
    } else {
        None
    }
}

async fn submit_score<S: ScoreStore>(
    State(state): State<WebServerState<S>>,
    payload: Result<Json<SubmitScoreBody>, JsonRejection>,
) -> Result<Json<SubmitScoreReply>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError {
        status: StatusCode::BAD_REQUEST,
        error: "Invalid request body".to_string(),
        details: Some(rejection.body_text()),
    })?;

    let player_name = body
        .player_name
        .filter(|name| !name.trim().is_empty())
        .ok_or_else(|| ApiError::bad_request("Invalid player name or score"))?;
    let score = body
        .score
        .as_ref()
        .and_then(parse_score)
        .ok_or_else(|| ApiError::bad_request("Invalid player name or score"))?;
    let game_duration = body.game_duration.as_ref().and_then(Value::as_f64).unwrap_or(0.0);

    match state
        .leaderboard
        .submit(ScoreSubmission::new(player_name, score, game_duration))
    {
        Ok(_) => Ok(Json(SubmitScoreReply {
            success: true,
            message: "Score saved successfully".to_string(),
        })),
        Err(LeaderboardError::InvalidSubmission(message)) => Err(ApiError::bad_request(message)),
        Err(LeaderboardError::Storage(details)) => {
            log!("Failed to save score: {}", details);
            Err(ApiError::internal("Failed to save score", details))
        }
    }
}

async fn get_leaderboard<S: ScoreStore>(State(state): State<WebServerState<S>>) -> Response {
    match state.leaderboard.top() {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => {
            log!("Failed to fetch leaderboard: {}", e);
            ApiError::internal("Failed to fetch leaderboard", e.to_string()).into_response()
        }
    }
}

async fn health() -> &'static str {
    "OK"
}

async fn method_not_allowed() -> ApiError {
    ApiError {
        status: StatusCode::METHOD_NOT_ALLOWED,
        error: "Method not allowed".to_string(),
        details: None,
    }
}
