//! Pet model and the listing request/response contract.

use serde::{Deserialize, Serialize};

/// Adoption status of a pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetStatus {
    Available,
    Pending,
    Adopted,
}

impl PetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PetStatus::Available => "available",
            PetStatus::Pending => "pending",
            PetStatus::Adopted => "adopted",
        }
    }
}

/// A pet listed for adoption.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: String,
    pub breed: String,
    pub size: String,
    pub gender: String,
    pub age_category: String,
    pub activity_level: String,
    pub description: String,
    #[serde(default)]
    pub special_needs: bool,
    #[serde(default)]
    pub needs_yard: bool,
    #[serde(default)]
    pub good_for_first_time: bool,
    #[serde(default)]
    pub needs_experienced: bool,
    pub time_requirement: String,
    #[serde(default)]
    pub good_with: Vec<String>,
    pub status: PetStatus,
    pub date_added: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Request body for creating a new pet.
///
/// Status and dateAdded are always server-assigned.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePetRequest {
    pub name: String,
    pub species: String,
    #[serde(default)]
    pub breed: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub age_category: String,
    #[serde(default)]
    pub activity_level: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub special_needs: bool,
    #[serde(default)]
    pub needs_yard: bool,
    #[serde(default)]
    pub good_for_first_time: bool,
    #[serde(default)]
    pub needs_experienced: bool,
    #[serde(default)]
    pub time_requirement: String,
    #[serde(default)]
    pub good_with: Vec<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Request body for updating an existing pet.
///
/// Id and dateAdded are preserved regardless of the request contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age_category: Option<String>,
    #[serde(default)]
    pub activity_level: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub special_needs: Option<bool>,
    #[serde(default)]
    pub needs_yard: Option<bool>,
    #[serde(default)]
    pub good_for_first_time: Option<bool>,
    #[serde(default)]
    pub needs_experienced: Option<bool>,
    #[serde(default)]
    pub time_requirement: Option<String>,
    #[serde(default)]
    pub good_with: Option<Vec<String>>,
    #[serde(default)]
    pub status: Option<PetStatus>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Query parameters accepted by the pet listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetListParams {
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    /// Boolean-coerced: the literal string "true" means true.
    #[serde(default)]
    pub special_needs: Option<String>,
    /// Comma-separated tag list; every tag must be present on the pet.
    #[serde(default)]
    pub good_with: Option<String>,
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub sort_by: Option<String>,
    #[serde(default)]
    pub sort_order: Option<String>,
}

/// One page of the pet listing plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetPage {
    pub pets: Vec<Pet>,
    pub total_count: usize,
    pub current_page: u32,
    pub total_pages: u32,
}
