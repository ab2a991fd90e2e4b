//! HTTP adapter
//!
//! Exposes the round lifecycle over three JSON endpoints: start a round,
//! submit a guess, request a hint. State is session-keyed - every client
//! gets its own round and difficulty advisor, addressed by the session id
//! returned from `/api/start`. The literal target word appears in a
//! response only once the round is over.

use crate::bank::WordBank;
use crate::core::{DifficultyAdvisor, Round, RoundView};
use anyhow::Result;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::routing::post;
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Shared server state
pub struct ServerState {
    bank: WordBank,
    sessions: Mutex<HashMap<String, Session>>,
}

/// One client's round and its cross-round advisor
struct Session {
    round: Round,
    advisor: DifficultyAdvisor,
}

impl ServerState {
    #[must_use]
    pub fn new(bank: WordBank) -> Self {
        Self {
            bank,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[derive(Deserialize)]
struct StartRequest {
    /// Existing session to continue (keeps its advisor); omitted for a new one
    #[serde(default)]
    session: Option<String>,
}

#[derive(Deserialize)]
struct GuessRequest {
    session: String,
    guess: String,
}

#[derive(Deserialize)]
struct HintRequest {
    session: String,
}

#[derive(Debug, Serialize)]
struct RoundResponse {
    session: String,
    #[serde(flatten)]
    view: RoundView,
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

/// How a raw guess string routes into the round
#[derive(Debug, Clone, PartialEq, Eq)]
enum GuessKind {
    Letter(char),
    Word(String),
}

/// Route a guess by its length, rejecting shapes the core never sees
///
/// A single character must be a letter; anything longer must contain at
/// least one letter to count as a word guess.
fn classify_guess(raw: &str) -> Option<GuessKind> {
    let input = raw.trim().to_uppercase();
    let mut chars = input.chars();
    let first = chars.next()?;

    if chars.next().is_none() {
        first.is_ascii_alphabetic().then_some(GuessKind::Letter(first))
    } else if input.chars().any(|c| c.is_ascii_alphabetic()) {
        Some(GuessKind::Word(input))
    } else {
        None
    }
}

fn new_session_id() -> String {
    rand::rng()
        .sample_iter(Alphanumeric)
        .take(16)
        .map(char::from)
        .collect()
}

/// Build the API router
pub fn router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/api/start", post(start_round))
        .route("/api/guess", post(submit_guess))
        .route("/api/hint", post(request_hint))
        .with_state(state)
}

async fn start_round(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<StartRequest>,
) -> Result<Json<RoundResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;

    let session_id = req.session.unwrap_or_else(new_session_id);
    let advisor = sessions
        .remove(&session_id)
        .map_or_else(DifficultyAdvisor::new, |s| s.advisor);

    let difficulty = advisor.recommended_difficulty();
    let Some(record) = state.bank.select(difficulty, &mut rand::rng()) else {
        return Err(api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "word bank is empty",
        ));
    };

    let round = Round::new(record);
    let view = round.view();
    tracing::info!(session = %session_id, difficulty, "round started");
    sessions.insert(session_id.clone(), Session { round, advisor });

    Ok(Json(RoundResponse {
        session: session_id,
        view,
    }))
}

async fn submit_guess(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<GuessRequest>,
) -> Result<Json<RoundResponse>, ApiError> {
    let Some(kind) = classify_guess(&req.guess) else {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid guess"));
    };

    let mut sessions = state.sessions.lock().await;
    let Some(session) = sessions.get_mut(&req.session) else {
        return Err(api_error(StatusCode::BAD_REQUEST, "no active round"));
    };

    let was_over = session.round.is_over();
    match kind {
        GuessKind::Letter(letter) => {
            session.round.guess_letter(letter);
        }
        GuessKind::Word(word) => {
            session.round.guess_word(&word);
        }
    }

    if session.round.is_over() && !was_over {
        session.advisor.record_result(session.round.won());
        tracing::info!(
            session = %req.session,
            won = session.round.won(),
            "round finished"
        );
    }

    Ok(Json(RoundResponse {
        session: req.session.clone(),
        view: session.round.view(),
    }))
}

async fn request_hint(
    State(state): State<Arc<ServerState>>,
    Json(req): Json<HintRequest>,
) -> Result<Json<RoundResponse>, ApiError> {
    let mut sessions = state.sessions.lock().await;
    let Some(session) = sessions.get_mut(&req.session) else {
        return Err(api_error(StatusCode::BAD_REQUEST, "no active round"));
    };

    session.round.hint();

    Ok(Json(RoundResponse {
        session: req.session.clone(),
        view: session.round.view(),
    }))
}

/// Run the HTTP server until interrupted
///
/// # Errors
///
/// Returns an error if the runtime cannot be built or the port cannot be
/// bound.
pub fn serve(bank: WordBank, port: u16) -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve_async(bank, port))
}

async fn serve_async(bank: WordBank, port: u16) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(ServerState::new(bank));
    let app = router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("breach terminal API listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordRecord;

    fn test_state() -> Arc<ServerState> {
        let record = WordRecord {
            word: "CIPHER".to_string(),
            difficulty: 1,
            category: "Test".to_string(),
            hints: vec!["Used to scramble data".to_string()],
            definition: None,
        };
        Arc::new(ServerState::new(WordBank::from_records(vec![record])))
    }

    #[test]
    fn classify_guess_routes_by_length() {
        assert_eq!(classify_guess("c"), Some(GuessKind::Letter('C')));
        assert_eq!(
            classify_guess("cipher"),
            Some(GuessKind::Word("CIPHER".to_string()))
        );
        assert_eq!(
            classify_guess(" zero-day "),
            Some(GuessKind::Word("ZERO-DAY".to_string()))
        );
        assert_eq!(classify_guess(""), None);
        assert_eq!(classify_guess("7"), None);
        assert_eq!(classify_guess("123"), None);
    }

    #[test]
    fn session_ids_are_sixteen_alphanumerics() {
        let id = new_session_id();
        assert_eq!(id.len(), 16);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[tokio::test]
    async fn start_creates_a_session_with_hidden_target() {
        let state = test_state();
        let response = start_round(State(state), Json(StartRequest { session: None }))
            .await
            .unwrap();

        assert!(!response.session.is_empty());
        assert!(!response.view.game_over);
        assert_eq!(response.view.target_word, None);
        assert_eq!(response.view.masked_word, "_ _ _ _ _ _");
    }

    #[tokio::test]
    async fn guess_without_session_is_rejected() {
        let state = test_state();
        let err = submit_guess(
            State(state),
            Json(GuessRequest {
                session: "missing".to_string(),
                guess: "c".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert_eq!(err.0, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn winning_word_guess_reveals_target_and_records_result() {
        let state = test_state();
        let started = start_round(State(state.clone()), Json(StartRequest { session: None }))
            .await
            .unwrap();
        let session = started.session.clone();

        let response = submit_guess(
            State(state.clone()),
            Json(GuessRequest {
                session: session.clone(),
                guess: "cipher".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(response.view.game_over);
        assert!(response.view.won);
        assert_eq!(response.view.target_word.as_deref(), Some("CIPHER"));

        let sessions = state.sessions.lock().await;
        assert_eq!(sessions[&session].advisor.wins(), 1);
    }

    #[tokio::test]
    async fn restarting_a_session_keeps_its_advisor() {
        let state = test_state();
        let started = start_round(State(state.clone()), Json(StartRequest { session: None }))
            .await
            .unwrap();
        let session = started.session.clone();

        submit_guess(
            State(state.clone()),
            Json(GuessRequest {
                session: session.clone(),
                guess: "cipher".to_string(),
            }),
        )
        .await
        .unwrap();

        let restarted = start_round(
            State(state.clone()),
            Json(StartRequest {
                session: Some(session.clone()),
            }),
        )
        .await
        .unwrap();
        assert_eq!(restarted.session, session);

        let sessions = state.sessions.lock().await;
        assert_eq!(sessions[&session].advisor.wins(), 1);
        assert_eq!(sessions[&session].advisor.streak(), 1);
    }

    #[tokio::test]
    async fn hint_advances_the_cursor_through_the_view() {
        let state = test_state();
        let started = start_round(State(state.clone()), Json(StartRequest { session: None }))
            .await
            .unwrap();

        let response = request_hint(
            State(state),
            Json(HintRequest {
                session: started.session.clone(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.view.hints_used, 1);
        assert_eq!(response.view.message, "HINT: Used to scramble data");
    }

    #[tokio::test]
    async fn invalid_guess_is_rejected_before_the_round() {
        let state = test_state();
        let started = start_round(State(state.clone()), Json(StartRequest { session: None }))
            .await
            .unwrap();

        let err = submit_guess(
            State(state.clone()),
            Json(GuessRequest {
                session: started.session.clone(),
                guess: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(err.0, StatusCode::BAD_REQUEST);

        // The round is untouched
        let sessions = state.sessions.lock().await;
        assert_eq!(sessions[&started.session].round.breach_level(), 0);
    }
}
