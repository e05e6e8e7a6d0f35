//! Feeding schedule and feeding record validation rules.

use std::sync::LazyLock;

/// Maximum length of feeding record notes.
pub const MAX_NOTES_LENGTH: usize = 500;

/// Matches a 24-hour `HH:MM` schedule time, with or without a leading zero.
static TIME_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^([01]?[0-9]|2[0-3]):[0-5][0-9]$").expect("valid regex"));

/// Validate a schedule time string (`HH:MM`, 24-hour clock).
pub fn validate_schedule_time(time: &str) -> Result<(), String> {
    if TIME_RE.is_match(time) {
        Ok(())
    } else {
        Err(format!("Time '{time}' must be in HH:MM format"))
    }
}

/// Validate feeding record notes: within the length limit.
pub fn validate_notes(notes: &str) -> Result<(), String> {
    if notes.chars().count() > MAX_NOTES_LENGTH {
        return Err(format!(
            "Notes must be at most {MAX_NOTES_LENGTH} characters"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_times() {
        for t in ["00:00", "8:00", "08:30", "19:45", "23:59"] {
            assert!(validate_schedule_time(t).is_ok(), "{t} should be valid");
        }
    }

    #[test]
    fn rejects_invalid_times() {
        for t in ["24:00", "12:60", "8", "08:5", "8:00am", "", "ab:cd"] {
            assert!(validate_schedule_time(t).is_err(), "{t} should be invalid");
        }
    }

    #[test]
    fn notes_length_limit() {
        assert!(validate_notes(&"n".repeat(500)).is_ok());
        assert!(validate_notes(&"n".repeat(501)).is_err());
    }
}
