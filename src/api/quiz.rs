//! Matching quiz API endpoints.

use axum::{extract::State, Extension, Json};

use crate::errors::AppError;
use crate::matching;
use crate::models::{Principal, QuizAnswers, QuizResult, QuizSubmitResponse};
use crate::AppState;

/// POST /api/quiz/submit - Score the quiz and store the caller's result.
///
/// The submitted record is stored verbatim; only the fields the scorer
/// understands influence the ranking. A new submission replaces the
/// caller's previous result.
pub async fn submit_quiz(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<QuizSubmitResponse>, AppError> {
    let answers: QuizAnswers = serde_json::from_value(body.clone())
        .map_err(|_| AppError::Validation("Quiz answers are malformed".to_string()))?;

    let pets = state.repo.list_pets().await?;
    let matches = matching::rank_matches(&answers, &pets);

    let result = QuizResult {
        id: state.ids.next_id(),
        user_id: principal.id,
        answers: body,
        matches: matches.clone(),
        created_at: state.clock.now().to_rfc3339(),
    };
    state.repo.replace_quiz_result(result).await?;

    Ok(Json(QuizSubmitResponse { matches }))
}

/// GET /api/quiz/results - Get the caller's stored quiz result.
pub async fn quiz_results(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<QuizResult>, AppError> {
    let result = state
        .repo
        .quiz_result_for_user(&principal.id)
        .await?
        .ok_or_else(|| AppError::NotFound("No quiz results found".to_string()))?;
    Ok(Json(result))
}
