// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercises;
pub mod logs;
pub mod users;

pub use exercises::{ExerciseOutcome, ExerciseService, NewExercise};
pub use logs::{LogEntry, LogResult, LogService};
pub use users::UserService;
