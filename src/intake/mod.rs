//! Adoption application intake.
//!
//! Validates a submission (email shape, adult age) and enforces the
//! one-active-application-per-pet rule, then builds the stored record with
//! server-assigned identity and timestamps.

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::{Application, ApplicationStatus, CreateApplicationRequest};

/// Minimum applicant age in whole years.
pub const MIN_APPLICANT_AGE: i32 = 18;

/// Top-level keys the server assigns; client-supplied values for these are
/// discarded rather than carried into the stored record.
const RESERVED_KEYS: [&str; 8] = [
    "id",
    "userId",
    "petId",
    "status",
    "submittedAt",
    "reviewedAt",
    "adminNotes",
    "email",
];

/// Validate a submission's own fields. The duplicate-application rule is
/// checked separately, under the applications collection lock.
pub fn validate_submission(
    request: &CreateApplicationRequest,
    today: NaiveDate,
) -> Result<(), AppError> {
    if !valid_email(&request.email) {
        return Err(AppError::Validation(
            "Valid email address is required".to_string(),
        ));
    }

    if request.date_of_birth.is_empty() {
        return Err(AppError::Validation(
            "Date of birth is required".to_string(),
        ));
    }

    let Some(date_of_birth) = parse_date(&request.date_of_birth) else {
        return Err(AppError::Validation(
            "Date of birth must be a valid date".to_string(),
        ));
    };

    if age_on(date_of_birth, today) < MIN_APPLICANT_AGE {
        return Err(AppError::Validation(
            "You must be at least 18 years old to submit an application".to_string(),
        ));
    }

    Ok(())
}

/// Whether the user already has an application for this pet that is still
/// pending, under review, or approved.
pub fn has_active_application(applications: &[Application], user_id: &str, pet_id: &str) -> bool {
    applications
        .iter()
        .any(|app| app.user_id == user_id && app.pet_id == pet_id && app.status.is_active())
}

/// Build the stored application from a validated submission.
pub fn build_application(
    request: CreateApplicationRequest,
    user_id: &str,
    id: String,
    submitted_at: String,
) -> Application {
    let mut details: Map<String, Value> = request.details;
    for key in RESERVED_KEYS {
        details.remove(key);
    }
    // dateOfBirth stays a typed field; drop a stray duplicate.
    details.remove("dateOfBirth");

    Application {
        id,
        user_id: user_id.to_string(),
        pet_id: request.pet_id,
        status: ApplicationStatus::Pending,
        submitted_at,
        reviewed_at: None,
        admin_notes: None,
        email: request.email,
        date_of_birth: request.date_of_birth,
        details,
    }
}

/// Basic `local@domain.tld` shape with no whitespace anywhere.
fn valid_email(email: &str) -> bool {
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

/// Accepts a plain calendar date or a full RFC 3339 timestamp.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Age in whole years: calendar-year difference, minus one if this year's
/// birthday has not happened yet.
fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}
