//! Favorite (saved pet) model.

use serde::{Deserialize, Serialize};

/// A pet saved by a user. Unique per (userId, petId) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub created_at: String,
}

/// Acknowledgement returned by the favorite add/remove endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteAck {
    pub message: String,
    pub pet_id: String,
}
