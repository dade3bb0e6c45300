// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Filtered, truncated views of a user's exercise log.

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::Exercise;
use crate::time_utils;
use chrono::NaiveDate;
use serde::Serialize;

/// One projected log entry: identity fields are dropped.
#[derive(Debug, Serialize)]
pub struct LogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration: f64,
    pub date: String,
}

/// Response shape for a log query.
#[derive(Debug, Serialize)]
pub struct LogResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Number of exercises belonging to the user, counted before the date
    /// window or limit are applied.
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

/// Service for querying exercise logs.
#[derive(Clone)]
pub struct LogService {
    store: JsonStore,
}

impl LogService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Produce the log view for one user.
    ///
    /// Exercises are matched to the user by username equality, so users
    /// sharing a username share a log. An unparseable `from`/`to` makes the
    /// window match nothing rather than failing the request, and an
    /// unparseable `limit` truncates to zero entries.
    pub async fn query(
        &self,
        user_id: &str,
        from: Option<&str>,
        to: Option<&str>,
        limit: Option<&str>,
    ) -> Result<LogResult> {
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let window = resolve_window(from, to);
        let limit = limit.map(|raw| raw.trim().parse::<usize>().unwrap_or(0));

        let exercises = self.store.load_exercises().await?;
        let mine: Vec<Exercise> = exercises
            .into_iter()
            .filter(|exercise| exercise.username == user.username)
            .collect();
        let count = mine.len();

        let mut log: Vec<LogEntry> = mine
            .into_iter()
            .filter(|exercise| in_window(exercise, window))
            .map(|exercise| LogEntry {
                description: exercise.description,
                duration: exercise.duration,
                date: exercise.date,
            })
            .collect();
        if let Some(cap) = limit {
            log.truncate(cap);
        }

        Ok(LogResult {
            username: user.username,
            count,
            id: user.id,
            log,
        })
    }
}

/// Resolve the inclusive `[from, to]` window. `from` defaults to the
/// earliest representable date, `to` to today. `None` means a supplied
/// bound failed to parse, in which case nothing matches.
fn resolve_window(from: Option<&str>, to: Option<&str>) -> Option<(NaiveDate, NaiveDate)> {
    let from = match from {
        None => NaiveDate::MIN,
        Some(raw) => time_utils::parse_date(raw)?,
    };
    let to = match to {
        None => time_utils::today(),
        Some(raw) => time_utils::parse_date(raw)?,
    };
    Some((from, to))
}

fn in_window(exercise: &Exercise, window: Option<(NaiveDate, NaiveDate)>) -> bool {
    let Some((from, to)) = window else {
        return false;
    };
    // Entries with an unparseable stored date are excluded, same as a
    // failed comparison would exclude them.
    time_utils::parse_date(&exercise.date).is_some_and(|date| date >= from && date <= to)
}
