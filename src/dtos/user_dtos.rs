use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{ValidationError, require_non_blank};

const MAX_AGE: u32 = 150;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
});

/// Body of `POST /users`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDTO {
    pub user_name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl CreateUserDTO {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_non_blank(&self.user_name, "userName")?;

        if !EMAIL_RE.is_match(&self.email) {
            return Err(ValidationError("email is not a valid address".to_string()));
        }

        if self.age.is_some_and(|age| age > MAX_AGE) {
            return Err(ValidationError(format!("age must be at most {}", MAX_AGE)));
        }

        Ok(())
    }
}
