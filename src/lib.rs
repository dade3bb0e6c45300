// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: register users and log their exercises
//!
//! This crate provides the backend API for recording timestamped exercise
//! entries per user and serving filtered, truncated activity logs.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::JsonStore;
use services::{ExerciseService, LogService, UserService};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: JsonStore,
    pub users: UserService,
    pub exercises: ExerciseService,
    pub logs: LogService,
}

impl AppState {
    /// Assemble the services over one store handle.
    pub fn new(config: Config, store: JsonStore) -> Self {
        Self {
            users: UserService::new(store.clone()),
            exercises: ExerciseService::new(store.clone()),
            logs: LogService::new(store.clone()),
            config,
            store,
        }
    }
}
