//! Pet validation rules.

/// Maximum length of a pet name.
pub const MAX_PET_NAME_LENGTH: usize = 100;

/// Maximum length of a species string.
pub const MAX_SPECIES_LENGTH: usize = 50;

/// Validate a pet name: non-empty, within the length limit.
pub fn validate_pet_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Pet name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_PET_NAME_LENGTH {
        return Err(format!(
            "Pet name must be between 1 and {MAX_PET_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a species string: non-empty, within the length limit.
pub fn validate_species(species: &str) -> Result<(), String> {
    let trimmed = species.trim();
    if trimmed.is_empty() {
        return Err("Species cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_SPECIES_LENGTH {
        return Err(format!(
            "Species must be between 1 and {MAX_SPECIES_LENGTH} characters"
        ));
    }
    Ok(())
}
