pub mod sqlx_city_repository;
