//! Favorites API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::errors::AppError;
use crate::models::{Favorite, FavoriteAck, Principal};
use crate::AppState;

/// GET /api/favorites - List the caller's favorited pet ids.
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<String>>, AppError> {
    let favorites = state.repo.favorites_for_user(&principal.id).await?;
    let pet_ids: Vec<String> = favorites.into_iter().map(|fav| fav.pet_id).collect();
    Ok(Json(pet_ids))
}

/// POST /api/favorites/:petId - Add a pet to the caller's favorites.
pub async fn add_favorite(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(pet_id): Path<String>,
) -> Result<(StatusCode, Json<FavoriteAck>), AppError> {
    let favorite = Favorite {
        id: state.ids.next_id(),
        user_id: principal.id,
        pet_id: pet_id.clone(),
        created_at: state.clock.now().to_rfc3339(),
    };

    state.repo.add_favorite(favorite).await?;

    Ok((
        StatusCode::CREATED,
        Json(FavoriteAck {
            message: "Added to favorites".to_string(),
            pet_id,
        }),
    ))
}

/// DELETE /api/favorites/:petId - Remove a pet from the caller's favorites.
///
/// Removing a pet that was never favorited succeeds as a no-op.
pub async fn remove_favorite(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(pet_id): Path<String>,
) -> Result<Json<FavoriteAck>, AppError> {
    state.repo.remove_favorite(&principal.id, &pet_id).await?;

    Ok(Json(FavoriteAck {
        message: "Removed from favorites".to_string(),
        pet_id,
    }))
}
