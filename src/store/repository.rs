//! Typed data operations over the flat-file store.
//!
//! Business rules that must hold across concurrent requests (duplicate
//! favorites, duplicate active applications, slot occupancy) are checked
//! inside the mutation closure, under the collection's lock.

use crate::errors::AppError;
use crate::intake;
use crate::models::{
    Application, ApplicationStatus, Appointment, AppointmentStatus, Favorite, Pet, PetStatus,
    QuizResult, UpdatePetRequest, User,
};
use crate::scheduling;

use super::{Collection, FileStore};

/// Repository for all data operations.
pub struct Repository {
    store: FileStore,
}

impl Repository {
    pub fn new(store: FileStore) -> Self {
        Self { store }
    }

    // ==================== USER OPERATIONS ====================

    /// List all user accounts.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.store.read(Collection::Users).await
    }

    // ==================== PET OPERATIONS ====================

    /// List all pets, in stored order.
    pub async fn list_pets(&self) -> Result<Vec<Pet>, AppError> {
        self.store.read(Collection::Pets).await
    }

    /// Get a pet by ID.
    pub async fn get_pet(&self, id: &str) -> Result<Option<Pet>, AppError> {
        let pets = self.list_pets().await?;
        Ok(pets.into_iter().find(|pet| pet.id == id))
    }

    /// Append a new pet.
    pub async fn insert_pet(&self, pet: Pet) -> Result<Pet, AppError> {
        self.store
            .update(Collection::Pets, |pets: &mut Vec<Pet>| {
                pets.push(pet.clone());
                Ok(pet)
            })
            .await
    }

    /// Apply a partial update. The id and dateAdded always survive.
    pub async fn update_pet(&self, id: &str, request: &UpdatePetRequest) -> Result<Pet, AppError> {
        self.store
            .update(Collection::Pets, |pets: &mut Vec<Pet>| {
                let pet = pets
                    .iter_mut()
                    .find(|pet| pet.id == id)
                    .ok_or_else(|| AppError::NotFound("Pet not found".to_string()))?;

                if let Some(name) = &request.name {
                    pet.name = name.clone();
                }
                if let Some(species) = &request.species {
                    pet.species = species.clone();
                }
                if let Some(breed) = &request.breed {
                    pet.breed = breed.clone();
                }
                if let Some(size) = &request.size {
                    pet.size = size.clone();
                }
                if let Some(gender) = &request.gender {
                    pet.gender = gender.clone();
                }
                if let Some(age_category) = &request.age_category {
                    pet.age_category = age_category.clone();
                }
                if let Some(activity_level) = &request.activity_level {
                    pet.activity_level = activity_level.clone();
                }
                if let Some(description) = &request.description {
                    pet.description = description.clone();
                }
                if let Some(special_needs) = request.special_needs {
                    pet.special_needs = special_needs;
                }
                if let Some(needs_yard) = request.needs_yard {
                    pet.needs_yard = needs_yard;
                }
                if let Some(good_for_first_time) = request.good_for_first_time {
                    pet.good_for_first_time = good_for_first_time;
                }
                if let Some(needs_experienced) = request.needs_experienced {
                    pet.needs_experienced = needs_experienced;
                }
                if let Some(time_requirement) = &request.time_requirement {
                    pet.time_requirement = time_requirement.clone();
                }
                if let Some(good_with) = &request.good_with {
                    pet.good_with = good_with.clone();
                }
                if let Some(status) = request.status {
                    pet.status = status;
                }
                if let Some(photo_url) = &request.photo_url {
                    pet.photo_url = Some(photo_url.clone());
                }

                Ok(pet.clone())
            })
            .await
    }

    /// Delete a pet by ID.
    pub async fn delete_pet(&self, id: &str) -> Result<(), AppError> {
        self.store
            .update(Collection::Pets, |pets: &mut Vec<Pet>| {
                let before = pets.len();
                pets.retain(|pet| pet.id != id);
                if pets.len() == before {
                    return Err(AppError::NotFound("Pet not found".to_string()));
                }
                Ok(())
            })
            .await
    }

    /// Set a pet's adoption status. Returns false when the pet no longer
    /// exists (the approval cascade skips missing pets).
    pub async fn set_pet_status(&self, id: &str, status: PetStatus) -> Result<bool, AppError> {
        self.store
            .update(Collection::Pets, |pets: &mut Vec<Pet>| {
                match pets.iter_mut().find(|pet| pet.id == id) {
                    Some(pet) => {
                        pet.status = status;
                        Ok(true)
                    }
                    None => Ok(false),
                }
            })
            .await
    }

    // ==================== APPLICATION OPERATIONS ====================

    /// List all applications, in stored order.
    pub async fn list_applications(&self) -> Result<Vec<Application>, AppError> {
        self.store.read(Collection::Applications).await
    }

    /// Get an application by ID.
    pub async fn get_application(&self, id: &str) -> Result<Option<Application>, AppError> {
        let applications = self.list_applications().await?;
        Ok(applications.into_iter().find(|app| app.id == id))
    }

    /// Append a new application. The duplicate-active check runs under the
    /// collection lock so concurrent submissions cannot both pass it.
    pub async fn create_application(
        &self,
        application: Application,
    ) -> Result<Application, AppError> {
        self.store
            .update(Collection::Applications, |apps: &mut Vec<Application>| {
                if intake::has_active_application(apps, &application.user_id, &application.pet_id)
                {
                    return Err(AppError::Conflict(
                        "You already have an application for this pet".to_string(),
                    ));
                }
                apps.push(application.clone());
                Ok(application)
            })
            .await
    }

    /// Update an application's review status. Notes are only overwritten
    /// when the request carries them.
    pub async fn update_application_status(
        &self,
        id: &str,
        status: ApplicationStatus,
        notes: Option<String>,
        reviewed_at: String,
    ) -> Result<Application, AppError> {
        self.store
            .update(Collection::Applications, |apps: &mut Vec<Application>| {
                let app = apps
                    .iter_mut()
                    .find(|app| app.id == id)
                    .ok_or_else(|| AppError::NotFound("Application not found".to_string()))?;

                app.status = status;
                app.reviewed_at = Some(reviewed_at);
                if let Some(notes) = notes {
                    app.admin_notes = Some(notes);
                }

                Ok(app.clone())
            })
            .await
    }

    // ==================== FAVORITE OPERATIONS ====================

    /// List one user's favorites, in stored order.
    pub async fn favorites_for_user(&self, user_id: &str) -> Result<Vec<Favorite>, AppError> {
        let favorites: Vec<Favorite> = self.store.read(Collection::Favorites).await?;
        Ok(favorites
            .into_iter()
            .filter(|fav| fav.user_id == user_id)
            .collect())
    }

    /// Append a favorite; each (user, pet) pair is stored at most once.
    pub async fn add_favorite(&self, favorite: Favorite) -> Result<Favorite, AppError> {
        self.store
            .update(Collection::Favorites, |favorites: &mut Vec<Favorite>| {
                let exists = favorites
                    .iter()
                    .any(|fav| fav.user_id == favorite.user_id && fav.pet_id == favorite.pet_id);
                if exists {
                    return Err(AppError::Conflict("Pet already in favorites".to_string()));
                }
                favorites.push(favorite.clone());
                Ok(favorite)
            })
            .await
    }

    /// Remove a favorite. Removing one that does not exist is a no-op.
    pub async fn remove_favorite(&self, user_id: &str, pet_id: &str) -> Result<(), AppError> {
        self.store
            .update(Collection::Favorites, |favorites: &mut Vec<Favorite>| {
                favorites.retain(|fav| !(fav.user_id == user_id && fav.pet_id == pet_id));
                Ok(())
            })
            .await
    }

    // ==================== APPOINTMENT OPERATIONS ====================

    /// List all appointments, in stored order.
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, AppError> {
        self.store.read(Collection::Appointments).await
    }

    /// List one user's appointments, in stored order.
    pub async fn appointments_for_user(&self, user_id: &str) -> Result<Vec<Appointment>, AppError> {
        let appointments = self.list_appointments().await?;
        Ok(appointments
            .into_iter()
            .filter(|app| app.user_id == user_id)
            .collect())
    }

    /// Append an appointment. The slot occupancy check runs under the
    /// collection lock so two bookings cannot both take the same slot.
    pub async fn create_appointment(
        &self,
        appointment: Appointment,
    ) -> Result<Appointment, AppError> {
        self.store
            .update(Collection::Appointments, |apps: &mut Vec<Appointment>| {
                if scheduling::slot_taken(apps, &appointment.date, &appointment.time) {
                    return Err(AppError::Conflict("Time slot not available".to_string()));
                }
                apps.push(appointment.clone());
                Ok(appointment)
            })
            .await
    }

    /// Cancel an appointment on behalf of its owner.
    pub async fn cancel_appointment(
        &self,
        id: &str,
        user_id: &str,
        cancelled_at: String,
    ) -> Result<Appointment, AppError> {
        self.store
            .update(Collection::Appointments, |apps: &mut Vec<Appointment>| {
                let app = apps
                    .iter_mut()
                    .find(|app| app.id == id)
                    .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

                if app.user_id != user_id {
                    return Err(AppError::Forbidden("Access denied".to_string()));
                }

                app.status = AppointmentStatus::Cancelled;
                app.cancelled_at = Some(cancelled_at);

                Ok(app.clone())
            })
            .await
    }

    // ==================== QUIZ RESULT OPERATIONS ====================

    /// Store a quiz result, replacing any prior result for the same user.
    pub async fn replace_quiz_result(&self, result: QuizResult) -> Result<QuizResult, AppError> {
        self.store
            .update(Collection::QuizResults, |results: &mut Vec<QuizResult>| {
                results.retain(|r| r.user_id != result.user_id);
                results.push(result.clone());
                Ok(result)
            })
            .await
    }

    /// Get one user's stored quiz result, if any.
    pub async fn quiz_result_for_user(&self, user_id: &str) -> Result<Option<QuizResult>, AppError> {
        let results: Vec<QuizResult> = self.store.read(Collection::QuizResults).await?;
        Ok(results.into_iter().find(|r| r.user_id == user_id))
    }
}
