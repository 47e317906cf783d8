use crate::domain::{
    city::{entity::City, repository::CityRepository},
    errors::DomainError,
    shared::pagination::{Page, PageRequest},
};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, info, instrument};

pub struct SqlxCityRepository {
    pub pool: PgPool,
}

impl SqlxCityRepository {
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing SqlxCityRepository with connection pool");
        Self { pool }
    }
}

/// Escapes `LIKE` metacharacters so `name` matches literally.
fn like_pattern(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push('%');
    for c in name.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn query_failed(op: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        error!(operation = op, error = %e, "city query failed");
        DomainError::InfrastructureError(e.to_string())
    }
}

#[async_trait]
impl CityRepository for SqlxCityRepository {
    #[instrument(skip(self))]
    async fn find_by_name_like(&self, name: &str) -> Result<Vec<City>, DomainError> {
        let cities: Vec<City> = sqlx::query_as(
            r#"SELECT id, name, photo FROM cities WHERE name LIKE $1 ESCAPE '\' ORDER BY id"#,
        )
        .bind(like_pattern(name))
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("find_by_name_like"))?;

        debug!("name lookup matched {} cities", cities.len());
        Ok(cities)
    }

    #[instrument(skip(self), fields(page = request.page_number, size = request.page_size))]
    async fn find_page(&self, request: PageRequest) -> Result<Page<City>, DomainError> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*)::bigint FROM cities")
            .fetch_one(&self.pool)
            .await
            .map_err(query_failed("count"))?;

        let cities: Vec<City> =
            sqlx::query_as("SELECT id, name, photo FROM cities ORDER BY id LIMIT $1 OFFSET $2")
                .bind(request.page_size)
                .bind(request.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(query_failed("find_page"))?;

        Ok(Page::new(cities, request, total))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<City>, DomainError> {
        sqlx::query_as("SELECT id, name, photo FROM cities WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("find_by_id"))
    }

    #[instrument(skip(self, city), fields(id = city.id))]
    async fn update(&self, city: &City) -> Result<City, DomainError> {
        sqlx::query_as(
            "UPDATE cities SET name = $2, photo = $3 WHERE id = $1 RETURNING id, name, photo",
        )
        .bind(city.id)
        .bind(&city.name)
        .bind(&city.photo)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed("update"))?
        .ok_or_else(|| DomainError::NotFound(format!("the city with id:{} does not exist", city.id)))
    }
}
