// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for users, exercises, and logs.

use crate::error::{ErrorResponse, Result};
use crate::models::User;
use crate::routes::extract::JsonOrForm;
use crate::services::{ExerciseOutcome, LogResult, NewExercise};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}/exercises", post(create_exercise))
        .route("/api/users/{id}/logs", get(get_logs))
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
struct CreateUserBody {
    username: Option<String>,
}

/// Register a user and return the created record.
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(body): JsonOrForm<CreateUserBody>,
) -> Result<Json<User>> {
    let user = state.users.create(body.username).await?;
    Ok(Json(user))
}

/// List all users in storage order.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users.list().await?))
}

// ─── Exercises ───────────────────────────────────────────────

/// Record an exercise for an existing user.
async fn create_exercise(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    JsonOrForm(body): JsonOrForm<NewExercise>,
) -> Result<Response> {
    match state.exercises.create(&id, body).await? {
        ExerciseOutcome::Created(exercise) => Ok(Json(exercise).into_response()),
        // Reported with a success status; only the body carries the error.
        // Existing clients depend on this exact shape.
        ExerciseOutcome::InvalidDate => Ok(Json(ErrorResponse {
            error: "Invalid Date".to_string(),
        })
        .into_response()),
    }
}

// ─── Logs ────────────────────────────────────────────────────

/// Raw log query parameters.
///
/// `limit` is kept as a string: its coercion (absent means unbounded, a
/// non-numeric value truncates to nothing) happens in the log service, not
/// in deserialization.
#[derive(Debug, Default, Deserialize)]
struct LogsQuery {
    from: Option<String>,
    to: Option<String>,
    limit: Option<String>,
}

/// Get a user's exercise log, optionally windowed and truncated.
async fn get_logs(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<LogsQuery>,
) -> Result<Json<LogResult>> {
    tracing::debug!(
        user_id = %id,
        from = ?params.from,
        to = ?params.to,
        limit = ?params.limit,
        "Fetching exercise log"
    );

    let result = state
        .logs
        .query(
            &id,
            params.from.as_deref(),
            params.to.as_deref(),
            params.limit.as_deref(),
        )
        .await?;

    Ok(Json(result))
}
