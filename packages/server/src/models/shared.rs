use crate::error::AppError;

/// Reject a required string field that is empty or whitespace.
pub fn validate_required(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Marks must be a finite, non-negative number.
pub fn validate_marks_obtained(marks: f64) -> Result<(), AppError> {
    if !marks.is_finite() || marks < 0.0 {
        return Err(AppError::Validation(
            "marks_obtained must be a non-negative number".into(),
        ));
    }
    Ok(())
}

/// Total marks are the divisor of every percentage, so they must be positive.
pub fn validate_total_marks(total: f64) -> Result<(), AppError> {
    if !total.is_finite() || total <= 0.0 {
        return Err(AppError::Validation(
            "total_marks must be greater than 0".into(),
        ));
    }
    Ok(())
}
