use axum::{
    Extension, Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
};
use serde::Deserialize;
use tracing::instrument;

use crate::{
    application::{
        city_dto::CityResponseDto,
        find_cities_by_name::use_case::FindCitiesByNameUseCase,
        list_cities::{dto::CitiesPageResponse, use_case::ListCitiesUseCase},
        update_city::{dto::CityUpdateRequestDto, use_case::UpdateCityUseCase},
    },
    domain::{errors::DomainError, shared::principal::Principal},
    presentation::http::{errors::AppError, state::AppState},
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityPageQuery {
    pub page_number: i64,
    pub page_size: i64,
}

/// `GET /cities/{name}`
#[instrument(skip_all)]
pub async fn get_city(
    State(state): State<AppState>,
    name: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<CityResponseDto>>, AppError> {
    let Path(name) = name?;
    let cities = FindCitiesByNameUseCase::new(state.city_repo.clone())
        .execute(&name)
        .await?;
    Ok(Json(cities))
}

/// `GET /cities?pageNumber=&pageSize=`
///
/// Lookup failures other than invalid paging are reported as a bare 500.
#[instrument(skip_all)]
pub async fn get_all_cities(
    State(state): State<AppState>,
    params: Result<Query<CityPageQuery>, QueryRejection>,
) -> Result<Json<CitiesPageResponse>, AppError> {
    let Query(params) = params?;
    ListCitiesUseCase::new(state.city_repo.clone())
        .execute(params.page_number, params.page_size)
        .await
        .map(Json)
        .map_err(|e| match e {
            DomainError::ValidationError(msg) => AppError::ValidationError(msg),
            other => {
                tracing::error!(error = %other, "Error happened when getting all cities");
                AppError::Internal(other.to_string())
            }
        })
}

/// `PUT /cities/{id}`, requires the `ALLOW_EDIT` role.
#[instrument(skip_all)]
pub async fn update_city(
    State(state): State<AppState>,
    principal: Option<Extension<Principal>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<CityUpdateRequestDto>, JsonRejection>,
) -> Result<Json<CityResponseDto>, AppError> {
    let principal = principal.map(|Extension(p)| p);
    let Path(id) = id?;
    let Json(body) = body?;

    let updated = UpdateCityUseCase::new(state.city_repo.clone())
        .execute(principal.as_ref(), id, body)
        .await?;
    Ok(Json(updated))
}
