use crate::application::city_dto::CityResponseDto;
use crate::domain::{city::repository::CityRepository, errors::DomainError};
use std::sync::Arc;
use tracing::{info, warn};

pub struct FindCitiesByNameUseCase {
    repository: Arc<dyn CityRepository>,
}

impl FindCitiesByNameUseCase {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    /// Returns every city whose name contains `name`.
    ///
    /// # Errors
    /// `ValidationError` for a blank name, `NotFound` when nothing matches.
    pub async fn execute(&self, name: &str) -> Result<Vec<CityResponseDto>, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "name must not be blank".to_string(),
            ));
        }

        info!("getting city with name {}", name);
        let cities = self.repository.find_by_name_like(name).await?;
        if cities.is_empty() {
            warn!("No city found with name {}", name);
            return Err(DomainError::NotFound(format!(
                "The city with name {} was not found",
                name
            )));
        }

        Ok(cities.into_iter().map(CityResponseDto::from).collect())
    }
}
