use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, TS)]
#[ts(export)]
pub struct CityUpdateRequestDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 2048))]
    pub photo: String,
}

impl CityUpdateRequestDto {
    /// Runs the declared constraints and additionally rejects whitespace-only fields.
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        if self.name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "name must not be blank".to_string(),
            ));
        }
        if self.photo.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "photo must not be blank".to_string(),
            ));
        }
        Ok(self)
    }
}
