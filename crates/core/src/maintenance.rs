//! Maintenance record constants and validation rules.

/// Water bowl refresh.
pub const KIND_WATER: &str = "water";

/// Litter box / toilet cleaning.
pub const KIND_TOILET: &str = "toilet";

/// All valid maintenance kinds.
pub const VALID_KINDS: &[&str] = &[KIND_WATER, KIND_TOILET];

/// Maximum length of a maintenance description.
pub const MAX_DESCRIPTION_LENGTH: usize = 500;

/// Inclusive bounds for the `find_recent` day window.
pub const MIN_RECENT_DAYS: i64 = 1;
pub const MAX_RECENT_DAYS: i64 = 365;

/// Default day window for recent maintenance queries.
pub const DEFAULT_RECENT_DAYS: i64 = 7;

/// Validate that the maintenance kind is one of the allowed values.
pub fn validate_kind(kind: &str) -> Result<(), String> {
    if VALID_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(format!(
            "Invalid maintenance type '{kind}'. Must be one of: {}",
            VALID_KINDS.join(", ")
        ))
    }
}

/// Validate a maintenance description: within the length limit.
pub fn validate_description(description: &str) -> Result<(), String> {
    if description.chars().count() > MAX_DESCRIPTION_LENGTH {
        return Err(format!(
            "Description must be at most {MAX_DESCRIPTION_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate the `days` window for recent-maintenance queries.
pub fn validate_recent_days(days: i64) -> Result<(), String> {
    if (MIN_RECENT_DAYS..=MAX_RECENT_DAYS).contains(&days) {
        Ok(())
    } else {
        Err(format!(
            "Days must be between {MIN_RECENT_DAYS} and {MAX_RECENT_DAYS}"
        ))
    }
}
