//! Keyed profile records. Each user has at most one active record; a new
//! submission replaces it and bumps the revision.

pub mod json_file;
pub mod memory;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::answers::QuizAnswers;
use crate::model::profile::StyleProfile;
use crate::scorer::compute_style_profile;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed store data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),
    #[error("no quiz results found for user {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub user_id: String,
    pub revision: u64,
    /// Raw answers, kept so the profile can be recomputed and audited.
    pub answers: QuizAnswers,
    pub profile: StyleProfile,
}

pub trait ProfileStore {
    fn load(&self, user_id: &str) -> Result<Option<ProfileRecord>, StoreError>;
    fn save(&mut self, record: ProfileRecord) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Verification {
    Match,
    Drift { recomputed: StyleProfile },
}

pub fn validate_user_id(user_id: &str) -> Result<&str, StoreError> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() || trimmed.chars().any(char::is_control) {
        return Err(StoreError::InvalidUserId(user_id.to_string()));
    }
    Ok(trimmed)
}

/// Scores the answers and stores them with the resulting profile.
pub fn submit_quiz<S: ProfileStore + ?Sized>(
    store: &mut S,
    user_id: &str,
    answers: QuizAnswers,
) -> Result<ProfileRecord, StoreError> {
    let user_id = validate_user_id(user_id)?;
    let profile = compute_style_profile(&answers);
    let revision = match store.load(user_id)? {
        Some(prev) => prev.revision + 1,
        None => 1,
    };

    let record = ProfileRecord {
        user_id: user_id.to_string(),
        revision,
        answers,
        profile,
    };
    store.save(record.clone())?;

    tracing::info!(
        user = user_id,
        revision,
        primary = %record.profile.primary_style,
        "quiz submission stored"
    );
    Ok(record)
}

pub fn latest_profile<S: ProfileStore + ?Sized>(
    store: &S,
    user_id: &str,
) -> Result<ProfileRecord, StoreError> {
    let user_id = validate_user_id(user_id)?;
    store
        .load(user_id)?
        .ok_or_else(|| StoreError::NotFound(user_id.to_string()))
}

/// Recomputes the profile from the stored answers and compares.
pub fn verify_record(record: &ProfileRecord) -> Verification {
    let recomputed = compute_style_profile(&record.answers);
    if recomputed == record.profile {
        Verification::Match
    } else {
        tracing::warn!(
            user = record.user_id.as_str(),
            revision = record.revision,
            "stored profile differs from recomputed profile"
        );
        Verification::Drift { recomputed }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/store/tests.rs"]
mod tests;
