// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise entry model for storage and API.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored exercise record in the exercises document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Denormalized copy of the owner's username at creation time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Free-form description; absent if the caller sent none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration as coerced at write time. Non-numeric input is stored as
    /// NaN, which serializes to JSON null and reads back as NaN.
    #[serde(default = "nan", deserialize_with = "duration_from_json")]
    pub duration: f64,
    /// Calendar date, rendered form (`"Sun Jan 15 2023"`)
    pub date: String,
    /// The owning user's id. Shared by all of that user's exercises,
    /// so this is a foreign key, not a row identifier.
    #[serde(rename = "_id")]
    pub id: String,
}

fn nan() -> f64 {
    f64::NAN
}

/// Stored durations may be `null` (serde_json writes non-finite floats as
/// null); map that back to NaN instead of failing the whole document.
fn duration_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
