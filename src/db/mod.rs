//! Database layer (flat JSON documents).

pub mod json_store;

pub use json_store::JsonStore;

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    pub const EXERCISES: &str = "exercises";
}
