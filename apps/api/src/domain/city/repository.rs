use super::entity::City;
use crate::domain::errors::DomainError;
use crate::domain::shared::pagination::{Page, PageRequest};
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CityRepository: Send + Sync {
    /// Cities whose name contains `name`, ordered by id.
    async fn find_by_name_like(&self, name: &str) -> Result<Vec<City>, DomainError>;
    async fn find_page(&self, request: PageRequest) -> Result<Page<City>, DomainError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, DomainError>;
    /// Persists `name` and `photo` for `city.id`. Returns `NotFound` if the row is gone.
    async fn update(&self, city: &City) -> Result<City, DomainError>;
}
