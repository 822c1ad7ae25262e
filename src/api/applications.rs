//! Adoption application API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::errors::AppError;
use crate::intake;
use crate::models::{
    Application, ApplicationListParams, ApplicationStatus, CreateApplicationRequest, PetStatus,
    Principal, UpdateApplicationStatusRequest,
};
use crate::AppState;

/// GET /api/applications/my-applications - List the caller's applications.
pub async fn my_applications(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<Application>>, AppError> {
    let applications = state.repo.list_applications().await?;
    let mine: Vec<Application> = applications
        .into_iter()
        .filter(|app| app.user_id == principal.id)
        .collect();
    Ok(Json(mine))
}

/// GET /api/applications - List all applications (admin only).
pub async fn list_applications(
    State(state): State<AppState>,
    Query(params): Query<ApplicationListParams>,
) -> Result<Json<Vec<Application>>, AppError> {
    let mut applications = state.repo.list_applications().await?;
    if let Some(status) = params.status {
        applications.retain(|app| app.status == status);
    }
    Ok(Json(applications))
}

/// GET /api/applications/:id - Get a single application (owner or admin).
pub async fn get_application(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<Application>, AppError> {
    let application = state
        .repo
        .get_application(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if application.user_id != principal.id && !principal.is_admin() {
        return Err(AppError::Forbidden("Access denied".to_string()));
    }

    Ok(Json(application))
}

/// POST /api/applications - Submit an application.
pub async fn submit_application(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateApplicationRequest>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    if request.pet_id.trim().is_empty() {
        return Err(AppError::Validation("Pet id is required".to_string()));
    }

    let today = state.clock.now().date_naive();
    intake::validate_submission(&request, today)?;

    let application = intake::build_application(
        request,
        &principal.id,
        state.ids.next_id(),
        state.clock.now().to_rfc3339(),
    );

    let application = state.repo.create_application(application).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// PATCH /api/applications/:id/status - Update review status (admin only).
///
/// Approving an application moves the pet to pending. The two collection
/// writes are not atomic; the pet write lands first.
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateApplicationStatusRequest>,
) -> Result<Json<Application>, AppError> {
    let existing = state
        .repo
        .get_application(&id)
        .await?
        .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

    if request.status == ApplicationStatus::Approved {
        let found = state
            .repo
            .set_pet_status(&existing.pet_id, PetStatus::Pending)
            .await?;
        if !found {
            tracing::warn!(
                "Pet {} referenced by application {} no longer exists",
                existing.pet_id,
                id
            );
        }
    }

    let application = state
        .repo
        .update_application_status(
            &id,
            request.status,
            request.notes,
            state.clock.now().to_rfc3339(),
        )
        .await?;

    Ok(Json(application))
}
