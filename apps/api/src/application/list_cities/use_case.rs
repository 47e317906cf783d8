use super::dto::CitiesPageResponse;
use crate::application::city_dto::CityResponseDto;
use crate::domain::{
    city::repository::CityRepository, errors::DomainError, shared::pagination::PageRequest,
};
use std::sync::Arc;
use tracing::info;

pub struct ListCitiesUseCase {
    repository: Arc<dyn CityRepository>,
}

impl ListCitiesUseCase {
    pub fn new(repository: Arc<dyn CityRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        page_number: i64,
        page_size: i64,
    ) -> Result<CitiesPageResponse, DomainError> {
        let request = PageRequest::new(page_number, page_size)?;

        info!("getting all cities");
        let page = self.repository.find_page(request).await?;
        Ok(page.map(CityResponseDto::from).into())
    }
}
