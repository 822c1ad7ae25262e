//! Appointment API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use crate::errors::AppError;
use crate::models::{
    Appointment, AppointmentStatus, AvailableSlotsResponse, CreateAppointmentRequest, Principal,
    SlotParams,
};
use crate::scheduling;
use crate::AppState;

/// GET /api/appointments/my-appointments - List the caller's appointments.
pub async fn my_appointments(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = state.repo.appointments_for_user(&principal.id).await?;
    Ok(Json(appointments))
}

/// GET /api/appointments/available-slots - Free slots for a date.
pub async fn available_slots(
    State(state): State<AppState>,
    Query(params): Query<SlotParams>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let Some(date) = params.date else {
        return Err(AppError::Validation("Date required".to_string()));
    };

    let appointments = state.repo.list_appointments().await?;
    let available_slots = scheduling::available_slots(&appointments, &date);

    Ok(Json(AvailableSlotsResponse {
        date,
        available_slots,
    }))
}

/// POST /api/appointments - Schedule a visit.
pub async fn schedule_appointment(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    if request.pet_id.trim().is_empty()
        || request.date.trim().is_empty()
        || request.time.trim().is_empty()
    {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let appointment = Appointment {
        id: state.ids.next_id(),
        user_id: principal.id,
        pet_id: request.pet_id,
        date: request.date,
        time: request.time,
        notes: request.notes.unwrap_or_default(),
        status: AppointmentStatus::Scheduled,
        created_at: state.clock.now().to_rfc3339(),
        cancelled_at: None,
    };

    let appointment = state.repo.create_appointment(appointment).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// PATCH /api/appointments/:id/cancel - Cancel an appointment (owner only).
pub async fn cancel_appointment(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<Appointment>, AppError> {
    let appointment = state
        .repo
        .cancel_appointment(&id, &principal.id, state.clock.now().to_rfc3339())
        .await?;
    Ok(Json(appointment))
}
