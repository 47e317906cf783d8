use crate::{domain::city::repository::CityRepository, infrastructure::security::InMemoryUserStore};
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub city_repo: Arc<dyn CityRepository>,
    pub user_store: Arc<InMemoryUserStore>,
}
