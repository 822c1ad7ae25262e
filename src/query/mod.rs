//! Pet listing query pipeline.
//!
//! Applies, in order: status filter, equality filters, goodWith tag
//! containment, text search, sort, and pagination over the full pets
//! collection.

use std::cmp::Ordering;

use chrono::DateTime;

use crate::errors::AppError;
use crate::models::{Pet, PetListParams, PetPage};

/// Default page size for the listing.
pub const DEFAULT_PAGE_SIZE: u32 = 12;

/// Longest accepted search string, measured after trimming.
pub const MAX_SEARCH_LEN: usize = 100;

/// Listing status filter applied when none is requested.
pub const DEFAULT_STATUS: &str = "available";

/// Run the full pipeline and produce one page plus pagination metadata.
pub fn run(mut pets: Vec<Pet>, params: &PetListParams) -> Result<PetPage, AppError> {
    // The search-length check rejects before any filtering happens.
    let search = match &params.search {
        Some(raw) => {
            let needle = raw.trim().to_lowercase();
            if needle.chars().count() > MAX_SEARCH_LEN {
                return Err(AppError::Validation("Search query too long".to_string()));
            }
            Some(needle)
        }
        None => None,
    };

    let status = params.status.as_deref().unwrap_or(DEFAULT_STATUS);
    pets.retain(|pet| pet.status.as_str() == status);

    if let Some(species) = &params.species {
        pets.retain(|pet| pet.species == *species);
    }
    if let Some(age) = &params.age {
        pets.retain(|pet| pet.age_category == *age);
    }
    if let Some(size) = &params.size {
        pets.retain(|pet| pet.size == *size);
    }
    if let Some(gender) = &params.gender {
        pets.retain(|pet| pet.gender == *gender);
    }
    if let Some(special_needs) = &params.special_needs {
        let wanted = special_needs == "true";
        pets.retain(|pet| pet.special_needs == wanted);
    }
    if let Some(good_with) = &params.good_with {
        let tags: Vec<&str> = good_with.split(',').collect();
        pets.retain(|pet| {
            tags.iter()
                .all(|tag| pet.good_with.iter().any(|t| t == tag))
        });
    }
    if let Some(needle) = &search {
        if !needle.is_empty() {
            pets.retain(|pet| {
                pet.name.to_lowercase().contains(needle)
                    || pet.description.to_lowercase().contains(needle)
                    || pet.breed.to_lowercase().contains(needle)
            });
        }
    }

    sort_pets(&mut pets, params);

    let page = params.page.unwrap_or(1).max(1);
    let limit = params.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let total_count = pets.len();
    let total_pages = total_count.div_ceil(limit as usize) as u32;

    let start = (page as usize - 1) * limit as usize;
    let pets: Vec<Pet> = pets.into_iter().skip(start).take(limit as usize).collect();

    Ok(PetPage {
        pets,
        total_count,
        current_page: page,
        total_pages,
    })
}

/// Sortable listing fields. Unknown field names fall back to `DateAdded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SortField {
    DateAdded,
    Name,
    Species,
    Breed,
    Size,
    Gender,
    AgeCategory,
    ActivityLevel,
}

impl SortField {
    fn parse(s: Option<&str>) -> Self {
        match s {
            Some("name") => SortField::Name,
            Some("species") => SortField::Species,
            Some("breed") => SortField::Breed,
            Some("size") => SortField::Size,
            Some("gender") => SortField::Gender,
            Some("ageCategory") => SortField::AgeCategory,
            Some("activityLevel") => SortField::ActivityLevel,
            _ => SortField::DateAdded,
        }
    }
}

/// Sort in place. The order of equal keys is unspecified.
fn sort_pets(pets: &mut [Pet], params: &PetListParams) {
    let field = SortField::parse(params.sort_by.as_deref());
    let ascending = params.sort_order.as_deref() == Some("asc");

    pets.sort_unstable_by(|a, b| {
        let ordering = compare_by(field, a, b);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

fn compare_by(field: SortField, a: &Pet, b: &Pet) -> Ordering {
    match field {
        // dateAdded compares as a timestamp; unparseable values fall back
        // to their string form.
        SortField::DateAdded => {
            match (
                DateTime::parse_from_rfc3339(&a.date_added),
                DateTime::parse_from_rfc3339(&b.date_added),
            ) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.date_added.cmp(&b.date_added),
            }
        }
        SortField::Name => a.name.cmp(&b.name),
        SortField::Species => a.species.cmp(&b.species),
        SortField::Breed => a.breed.cmp(&b.breed),
        SortField::Size => a.size.cmp(&b.size),
        SortField::Gender => a.gender.cmp(&b.gender),
        SortField::AgeCategory => a.age_category.cmp(&b.age_category),
        SortField::ActivityLevel => a.activity_level.cmp(&b.activity_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PetStatus;

    fn pet(id: &str, name: &str) -> Pet {
        Pet {
            id: id.to_string(),
            name: name.to_string(),
            species: "dog".to_string(),
            breed: "mix".to_string(),
            size: "medium".to_string(),
            gender: "male".to_string(),
            age_category: "adult".to_string(),
            activity_level: "moderate".to_string(),
            description: String::new(),
            special_needs: false,
            needs_yard: false,
            good_for_first_time: false,
            needs_experienced: false,
            time_requirement: "moderate".to_string(),
            good_with: vec![],
            status: PetStatus::Available,
            date_added: format!("2024-01-0{}T00:00:00Z", id),
            photo_url: None,
        }
    }

    fn params() -> PetListParams {
        PetListParams::default()
    }

    #[test]
    fn test_default_status_filter() {
        let mut pending = pet("1", "Pen");
        pending.status = PetStatus::Pending;
        let page = run(vec![pending, pet("2", "Ava")], &params()).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.pets[0].name, "Ava");
    }

    #[test]
    fn test_explicit_status_filter() {
        let mut adopted = pet("1", "Dop");
        adopted.status = PetStatus::Adopted;
        let p = PetListParams {
            status: Some("adopted".to_string()),
            ..params()
        };
        let page = run(vec![adopted, pet("2", "Ava")], &p).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.pets[0].name, "Dop");
    }

    #[test]
    fn test_equality_filters_compose() {
        let mut cat = pet("1", "Cleo");
        cat.species = "cat".to_string();
        let mut small = pet("2", "Tiny");
        small.size = "small".to_string();

        let p = PetListParams {
            species: Some("dog".to_string()),
            size: Some("medium".to_string()),
            ..params()
        };
        let page = run(vec![cat, small, pet("3", "Rex")], &p).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.pets[0].name, "Rex");
    }

    #[test]
    fn test_special_needs_coercion() {
        let mut sn = pet("1", "Sen");
        sn.special_needs = true;

        let yes = PetListParams {
            special_needs: Some("true".to_string()),
            ..params()
        };
        let page = run(vec![sn.clone(), pet("2", "Ava")], &yes).unwrap();
        assert_eq!(page.pets[0].name, "Sen");

        // Anything except the literal "true" means false.
        let no = PetListParams {
            special_needs: Some("yes".to_string()),
            ..params()
        };
        let page = run(vec![sn, pet("2", "Ava")], &no).unwrap();
        assert_eq!(page.pets[0].name, "Ava");
    }

    #[test]
    fn test_good_with_requires_every_tag() {
        let mut kids_only = pet("1", "Kiddo");
        kids_only.good_with = vec!["kids".to_string()];
        let mut both = pet("2", "Buddy");
        both.good_with = vec!["kids".to_string(), "pets".to_string()];

        let p = PetListParams {
            good_with: Some("kids,pets".to_string()),
            ..params()
        };
        let page = run(vec![kids_only, both], &p).unwrap();

        assert_eq!(page.total_count, 1);
        assert_eq!(page.pets[0].name, "Buddy");
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let mut named = pet("1", "Whiskers");
        named.description = "quiet".to_string();
        let mut described = pet("2", "Ava");
        described.description = "Loves whisker rubs".to_string();
        let mut bred = pet("3", "Rex");
        bred.breed = "WhiskerHound".to_string();
        let plain = pet("4", "Mo");

        let p = PetListParams {
            search: Some("WHISKER".to_string()),
            ..params()
        };
        let page = run(vec![named, described, bred, plain], &p).unwrap();

        assert_eq!(page.total_count, 3);
    }

    #[test]
    fn test_search_length_boundary() {
        let ok = PetListParams {
            search: Some("x".repeat(100)),
            ..params()
        };
        assert!(run(vec![pet("1", "Ava")], &ok).is_ok());

        let too_long = PetListParams {
            search: Some("x".repeat(101)),
            ..params()
        };
        let err = run(vec![pet("1", "Ava")], &too_long).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        // Trailing whitespace does not count against the limit.
        let padded = PetListParams {
            search: Some(format!("{}   ", "x".repeat(100))),
            ..params()
        };
        assert!(run(vec![pet("1", "Ava")], &padded).is_ok());
    }

    #[test]
    fn test_default_sort_is_date_added_desc() {
        let page = run(
            vec![pet("1", "Old"), pet("3", "New"), pet("2", "Mid")],
            &params(),
        )
        .unwrap();

        let names: Vec<&str> = page.pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["New", "Mid", "Old"]);
    }

    #[test]
    fn test_sort_by_name_asc() {
        let p = PetListParams {
            sort_by: Some("name".to_string()),
            sort_order: Some("asc".to_string()),
            ..params()
        };
        let page = run(
            vec![pet("1", "Ziggy"), pet("2", "Ava"), pet("3", "Milo")],
            &p,
        )
        .unwrap();

        let names: Vec<&str> = page.pets.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Ava", "Milo", "Ziggy"]);
    }

    #[test]
    fn test_unknown_sort_field_falls_back_to_date_added() {
        let p = PetListParams {
            sort_by: Some("mystery".to_string()),
            ..params()
        };
        let page = run(vec![pet("1", "Old"), pet("2", "New")], &p).unwrap();
        assert_eq!(page.pets[0].name, "New");
    }

    #[test]
    fn test_pagination_slices_and_counts() {
        let pets: Vec<Pet> = (1..=5).map(|i| pet(&i.to_string(), "P")).collect();
        let p = PetListParams {
            page: Some(2),
            limit: Some(2),
            sort_order: Some("asc".to_string()),
            ..params()
        };
        let page = run(pets, &p).unwrap();

        assert_eq!(page.total_count, 5);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.pets.len(), 2);
        assert_eq!(page.pets[0].id, "3");
        assert_eq!(page.pets[1].id, "4");
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let page = run(
            vec![pet("1", "Ava")],
            &PetListParams {
                page: Some(7),
                ..params()
            },
        )
        .unwrap();

        assert!(page.pets.is_empty());
        assert_eq!(page.total_count, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_every_result_satisfies_active_filters() {
        let mut pets = Vec::new();
        for i in 1..=9 {
            let mut p = pet(&i.to_string(), "P");
            if i % 2 == 0 {
                p.species = "cat".to_string();
            }
            if i % 3 == 0 {
                p.gender = "female".to_string();
            }
            pets.push(p);
        }

        let p = PetListParams {
            species: Some("cat".to_string()),
            gender: Some("female".to_string()),
            ..params()
        };
        let page = run(pets, &p).unwrap();

        assert!(!page.pets.is_empty());
        assert!(page
            .pets
            .iter()
            .all(|pet| pet.species == "cat" && pet.gender == "female"));
    }
}
