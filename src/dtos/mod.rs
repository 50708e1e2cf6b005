pub mod post_dtos;
pub mod user_dtos;

use thiserror::Error;

/// A request body that parsed but does not describe a valid request.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{0}")]
pub struct ValidationError(pub String);

fn require_non_blank(value: &str, field: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError(format!("{} cannot be empty", field)));
    }
    Ok(())
}
