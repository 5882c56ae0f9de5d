//! Centralized validation and helper functions.

/// Maximum number of records allowed in a single input file
pub const MAX_RECORDS: usize = 100_000;

/// Validation error types
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid tolerance {0}: must be a finite, non-negative number")]
    InvalidTolerance(f64),
    #[error("Invalid retention time '{0}'")]
    InvalidRetentionTime(String),
    #[error("Retention time must be finite, got {0}")]
    NonFiniteRetentionTime(f64),
}

/// Parse a retention time field.
///
/// An empty field means the retention time is unknown and yields `Ok(None)`.
///
/// # Examples
///
/// ```
/// use rt_matcher::utils::validation::parse_retention_time;
///
/// assert_eq!(parse_retention_time("4.2"), Ok(Some(4.2)));
/// assert_eq!(parse_retention_time(" "), Ok(None));
/// assert!(parse_retention_time("NaN").is_err());
/// ```
pub fn parse_retention_time(field: &str) -> Result<Option<f64>, ValidationError> {
    let field = field.trim();
    if field.is_empty() {
        return Ok(None);
    }

    let value: f64 = field
        .parse()
        .map_err(|_| ValidationError::InvalidRetentionTime(field.to_string()))?;

    if !value.is_finite() {
        return Err(ValidationError::NonFiniteRetentionTime(value));
    }

    Ok(Some(value))
}

/// Validate a numeric tolerance supplied by the user.
pub fn validate_tolerance(tolerance: f64) -> Result<f64, ValidationError> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(tolerance)
    } else {
        Err(ValidationError::InvalidTolerance(tolerance))
    }
}

/// Check whether a collection already holding `count` records is full.
///
/// Call this with the current count BEFORE adding a new record.
#[must_use]
pub fn is_at_record_limit(count: usize) -> bool {
    count >= MAX_RECORDS
}
