use super::dto::CityUpdateRequestDto;
use crate::application::city_dto::CityResponseDto;
use crate::domain::{
    city::repository::CityRepository,
    errors::DomainError,
    shared::principal::{Principal, ROLE_ALLOW_EDIT},
};
use std::sync::Arc;
use tracing::{info, warn};

pub struct UpdateCityUseCase {
    repository: Arc<dyn CityRepository>,
}

impl UpdateCityUseCase {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    /// Replaces the name and photo of city `id`.
    ///
    /// The caller must hold the `ALLOW_EDIT` role. Anonymous callers get
    /// `Unauthorized`, authenticated callers without the role get `Forbidden`.
    pub async fn execute(
        &self,
        principal: Option<&Principal>,
        id: i64,
        request: CityUpdateRequestDto,
    ) -> Result<CityResponseDto, DomainError> {
        let principal = principal.ok_or(DomainError::Unauthorized)?;
        if !principal.has_role(ROLE_ALLOW_EDIT) {
            warn!(user = %principal.username, "update rejected, missing role {}", ROLE_ALLOW_EDIT);
            return Err(DomainError::Forbidden(format!(
                "{} may not edit cities",
                principal.username
            )));
        }

        if id <= 0 {
            return Err(DomainError::ValidationError(
                "id must be positive".to_string(),
            ));
        }
        let request = request.validated()?;

        info!("updating city with id: {}", id);
        let mut city = self.repository.find_by_id(id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("the city with id:{} does not exist", id))
        })?;

        city.apply_update(request.name, request.photo);
        let saved = self.repository.update(&city).await?;
        info!("city with id {} successfully updated", id);

        Ok(saved.into())
    }
}
