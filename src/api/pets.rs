//! Pet API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::{CreatePetRequest, Pet, PetListParams, PetPage, PetStatus, UpdatePetRequest};
use crate::query;
use crate::AppState;

/// GET /api/pets - List pets with filtering, sorting, and pagination.
pub async fn list_pets(
    State(state): State<AppState>,
    Query(params): Query<PetListParams>,
) -> Result<Json<PetPage>, AppError> {
    let pets = state.repo.list_pets().await?;
    let page = query::run(pets, &params)?;
    Ok(Json(page))
}

/// GET /api/pets/:id - Get a single pet.
pub async fn get_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Pet>, AppError> {
    let pet = state
        .repo
        .get_pet(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;
    Ok(Json(pet))
}

/// POST /api/pets - Create a new pet (admin only).
pub async fn create_pet(
    State(state): State<AppState>,
    Json(request): Json<CreatePetRequest>,
) -> Result<(StatusCode, Json<Pet>), AppError> {
    // Validate required fields
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }
    if request.species.trim().is_empty() {
        return Err(AppError::Validation("Species is required".to_string()));
    }

    let pet = Pet {
        id: state.ids.next_id(),
        name: request.name,
        species: request.species,
        breed: request.breed,
        size: request.size,
        gender: request.gender,
        age_category: request.age_category,
        activity_level: request.activity_level,
        description: request.description,
        special_needs: request.special_needs,
        needs_yard: request.needs_yard,
        good_for_first_time: request.good_for_first_time,
        needs_experienced: request.needs_experienced,
        time_requirement: request.time_requirement,
        good_with: request.good_with,
        status: PetStatus::Available,
        date_added: state.clock.now().to_rfc3339(),
        photo_url: request.photo_url,
    };

    let pet = state.repo.insert_pet(pet).await?;
    Ok((StatusCode::CREATED, Json(pet)))
}

/// PUT /api/pets/:id - Update a pet (admin only).
pub async fn update_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdatePetRequest>,
) -> Result<Json<Pet>, AppError> {
    let pet = state.repo.update_pet(&id, &request).await?;
    Ok(Json(pet))
}

/// DELETE /api/pets/:id - Delete a pet (admin only).
pub async fn delete_pet(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    state.repo.delete_pet(&id).await?;
    Ok(Json(
        serde_json::json!({ "message": "Pet deleted successfully" }),
    ))
}
