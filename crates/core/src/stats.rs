//! Aggregate computation helpers.

/// Round a ratio to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Completion percentage for `completed` out of `total`, rounded to two
/// decimal places. Zero totals yield 0 rather than a division error.
pub fn completion_percentage(completed: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(completed as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_total_is_zero() {
        assert_eq!(completion_percentage(0, 0), 0.0);
    }

    #[test]
    fn three_of_five_is_sixty() {
        assert_eq!(completion_percentage(3, 5), 60.0);
    }

    #[test]
    fn one_of_two_is_fifty() {
        assert_eq!(completion_percentage(1, 2), 50.0);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 1/3 -> 33.333... -> 33.33
        assert_eq!(completion_percentage(1, 3), 33.33);
        // 2/3 -> 66.666... -> 66.67
        assert_eq!(completion_percentage(2, 3), 66.67);
    }
}
