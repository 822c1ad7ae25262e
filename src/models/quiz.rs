//! Matching quiz models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The quiz answer fields the scorer understands.
///
/// Submissions are free-form records; unknown fields are ignored here but
/// preserved verbatim on the stored result.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswers {
    pub activity_level: Option<String>,
    pub size_preference: Vec<String>,
    pub species_preference: Option<String>,
    pub housing_type: Option<String>,
    pub has_yard: bool,
    pub experience: Option<String>,
    pub time_commitment: Option<String>,
    pub has_kids: bool,
    pub has_other_pets: bool,
}

/// One scored pet in a quiz result, ordered best-first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetMatch {
    pub pet_id: String,
    pub score: u32,
}

/// A stored quiz outcome. At most one per user; resubmitting replaces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub id: String,
    pub user_id: String,
    pub answers: Value,
    pub matches: Vec<PetMatch>,
    pub created_at: String,
}

/// Response body for a quiz submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSubmitResponse {
    pub matches: Vec<PetMatch>,
}
