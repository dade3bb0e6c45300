// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise entry creation.

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::Exercise;
use crate::time_utils;
use serde::Deserialize;
use serde_json::Value;

/// Incoming exercise fields, before coercion.
///
/// `duration` is kept as raw JSON because callers send it as a number or a
/// string (form posts always send strings) and either is accepted.
#[derive(Debug, Default, Deserialize)]
pub struct NewExercise {
    pub description: Option<String>,
    pub duration: Option<Value>,
    pub date: Option<String>,
}

/// Outcome of an exercise creation attempt.
///
/// An unparseable date is a distinct outcome rather than an [`AppError`]:
/// the API reports it with a success status and an error body, and that
/// shape is observable behavior existing clients rely on.
#[derive(Debug)]
pub enum ExerciseOutcome {
    Created(Exercise),
    InvalidDate,
}

/// Service for appending exercise entries.
#[derive(Clone)]
pub struct ExerciseService {
    store: JsonStore,
}

impl ExerciseService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Append an exercise for an existing user.
    ///
    /// The date defaults to today when absent or empty; an unparseable date
    /// yields [`ExerciseOutcome::InvalidDate`] without touching storage.
    pub async fn create(&self, user_id: &str, entry: NewExercise) -> Result<ExerciseOutcome> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let date = match entry.date.as_deref() {
            None | Some("") => time_utils::today(),
            Some(raw) => match time_utils::parse_date(raw) {
                Some(date) => date,
                None => return Ok(ExerciseOutcome::InvalidDate),
            },
        };

        let exercise = Exercise {
            username: user.username.clone(),
            description: entry.description,
            duration: coerce_duration(entry.duration.as_ref()),
            date: time_utils::render_date(date),
            id: user.id,
        };

        self.store.append_exercise(exercise.clone()).await?;
        tracing::info!(user_id, date = %exercise.date, "Exercise recorded");

        Ok(ExerciseOutcome::Created(exercise))
    }
}

/// Coerce a raw duration value to a number, JavaScript-style.
///
/// Numbers pass through; strings are trimmed and parsed, with the empty
/// string coercing to zero; null is zero and booleans are 0/1. Everything
/// else, including an absent value, is NaN - stored, not rejected.
fn coerce_duration(raw: Option<&Value>) -> f64 {
    match raw {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse().unwrap_or(f64::NAN)
            }
        }
        Some(Value::Null) => 0.0,
        Some(Value::Bool(b)) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::UserService;
    use serde_json::json;

    fn value(v: Value) -> Option<Value> {
        Some(v)
    }

    #[test]
    fn test_coerce_duration_numbers_and_strings() {
        assert_eq!(coerce_duration(value(json!(30)).as_ref()), 30.0);
        assert_eq!(coerce_duration(value(json!(12.5)).as_ref()), 12.5);
        assert_eq!(coerce_duration(value(json!("45")).as_ref()), 45.0);
        assert_eq!(coerce_duration(value(json!(" 45 ")).as_ref()), 45.0);
        assert_eq!(coerce_duration(value(json!("1e2")).as_ref()), 100.0);
    }

    #[test]
    fn test_coerce_duration_non_numeric_is_nan() {
        assert!(coerce_duration(value(json!("ten minutes")).as_ref()).is_nan());
        assert!(coerce_duration(value(json!({"n": 1})).as_ref()).is_nan());
        assert!(coerce_duration(None).is_nan());
    }

    #[test]
    fn test_coerce_duration_degenerate_values() {
        assert_eq!(coerce_duration(value(json!("")).as_ref()), 0.0);
        assert_eq!(coerce_duration(value(json!(null)).as_ref()), 0.0);
        assert_eq!(coerce_duration(value(json!(true)).as_ref()), 1.0);
    }

    #[tokio::test]
    async fn test_unknown_user_is_not_found_and_no_side_effect() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        let service = ExerciseService::new(store.clone());

        let err = service
            .create("no-such-id", NewExercise::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UserNotFound));
        assert!(store.load_exercises().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_date_does_not_append() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        let user = UserService::new(store.clone())
            .create(Some("alice".to_string()))
            .await
            .unwrap();
        let service = ExerciseService::new(store.clone());

        let outcome = service
            .create(
                &user.id,
                NewExercise {
                    date: Some("not-a-date".to_string()),
                    ..NewExercise::default()
                },
            )
            .await
            .unwrap();

        assert!(matches!(outcome, ExerciseOutcome::InvalidDate));
        assert!(store.load_exercises().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_date_is_rendered() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();
        let user = UserService::new(store.clone())
            .create(Some("alice".to_string()))
            .await
            .unwrap();
        let service = ExerciseService::new(store);

        let outcome = service
            .create(
                &user.id,
                NewExercise {
                    description: Some("swim".to_string()),
                    duration: Some(json!("30")),
                    date: Some("2023-01-15".to_string()),
                },
            )
            .await
            .unwrap();

        let ExerciseOutcome::Created(exercise) = outcome else {
            panic!("expected a created exercise");
        };
        assert_eq!(exercise.date, "Sun Jan 15 2023");
        assert_eq!(exercise.duration, 30.0);
        assert_eq!(exercise.id, user.id);
        assert_eq!(exercise.username.as_deref(), Some("alice"));
    }
}
