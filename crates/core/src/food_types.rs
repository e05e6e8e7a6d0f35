//! Food type validation rules.

/// Maximum length of a food type name.
pub const MAX_FOOD_NAME_LENGTH: usize = 100;

/// Maximum length of a brand string.
pub const MAX_BRAND_LENGTH: usize = 100;

/// Maximum length of a food type description.
pub const MAX_FOOD_DESCRIPTION_LENGTH: usize = 500;

/// Validate a food type name: non-empty, within the length limit.
pub fn validate_food_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Food type name cannot be empty".to_string());
    }
    if trimmed.chars().count() > MAX_FOOD_NAME_LENGTH {
        return Err(format!(
            "Food type name must be between 1 and {MAX_FOOD_NAME_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a brand string: within the length limit.
pub fn validate_brand(brand: &str) -> Result<(), String> {
    if brand.chars().count() > MAX_BRAND_LENGTH {
        return Err(format!(
            "Brand must be at most {MAX_BRAND_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate a food type description: within the length limit.
pub fn validate_food_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_FOOD_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description must be at most {MAX_FOOD_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}
