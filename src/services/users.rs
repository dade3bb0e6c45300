// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User registration and listing.

use crate::db::JsonStore;
use crate::error::Result;
use crate::models::User;
use uuid::Uuid;

/// Service for creating and listing users.
#[derive(Clone)]
pub struct UserService {
    store: JsonStore,
}

impl UserService {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Create a user with a fresh id and persist it.
    ///
    /// The username is taken as-is: empty, duplicate, and absent usernames
    /// are all accepted.
    pub async fn create(&self, username: Option<String>) -> Result<User> {
        let user = User {
            username,
            id: Uuid::new_v4().to_string(),
        };

        self.store.append_user(user.clone()).await?;
        tracing::info!(user_id = %user.id, "User created");

        Ok(user)
    }

    /// All users, in storage order.
    pub async fn list(&self) -> Result<Vec<User>> {
        self.store.load_users().await
    }
}
