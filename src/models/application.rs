//! Adoption application model.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Review status of an adoption application.
///
/// Pending, under review, and approved applications are all "active" and
/// block further submissions for the same (user, pet) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Whether this status still blocks a new application for the same pet.
    pub fn is_active(&self) -> bool {
        !matches!(self, ApplicationStatus::Rejected)
    }
}

/// An adoption application submitted by a user for one pet.
///
/// Applicant detail fields beyond the typed ones (name, phone, housing
/// questionnaire answers, ...) are carried through verbatim in `details`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub pet_id: String,
    pub status: ApplicationStatus,
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_notes: Option<String>,
    pub email: String,
    pub date_of_birth: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Request body for submitting an application.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequest {
    pub pet_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub date_of_birth: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Request body for the admin status update.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationStatusRequest {
    pub status: ApplicationStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Query parameters for the admin application listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationListParams {
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}
