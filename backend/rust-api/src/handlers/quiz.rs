use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::extractors::AppJson;
use crate::models::quiz::{QuizError, SubmitAnswerRequest};
use crate::services::{quiz_service::QuizService, AppState};

fn quiz_error_status(e: &QuizError) -> StatusCode {
    match e {
        QuizError::SessionNotFound => StatusCode::NOT_FOUND,
        QuizError::AlreadyCompleted => StatusCode::CONFLICT,
    }
}

pub async fn create_session(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::info!("Creating quiz session");

    let service = QuizService::new(state.sessions.clone(), state.config.session_ttl_seconds);
    let response = service.create_session().await;

    (StatusCode::CREATED, Json(response))
}

pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let service = QuizService::new(state.sessions.clone(), state.config.session_ttl_seconds);

    match service.get_session(&session_id).await {
        Ok(view) => Ok((StatusCode::OK, Json(view))),
        Err(e) => Err((quiz_error_status(&e), e.to_string())),
    }
}

pub async fn submit_answer(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
    AppJson(req): AppJson<SubmitAnswerRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!("Submitting answer for quiz session: {}", session_id);

    let service = QuizService::new(state.sessions.clone(), state.config.session_ttl_seconds);

    match service.submit_answer(&session_id, &req).await {
        Ok(response) => Ok((StatusCode::OK, Json(response))),
        Err(e) => {
            tracing::warn!("Failed to submit answer: {}", e);
            Err((quiz_error_status(&e), e.to_string()))
        }
    }
}

pub async fn restart(
    State(state): State<Arc<AppState>>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    tracing::info!("Restarting quiz session: {}", session_id);

    let service = QuizService::new(state.sessions.clone(), state.config.session_ttl_seconds);

    match service.restart(&session_id).await {
        Ok(view) => Ok((StatusCode::OK, Json(view))),
        Err(e) => Err((quiz_error_status(&e), e.to_string())),
    }
}
