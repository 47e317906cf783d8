use crate::application::city_dto::CityResponseDto;
use crate::domain::shared::pagination::Page;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CitiesPageResponse {
    pub cities: Vec<CityResponseDto>,
    pub current_page: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

impl From<Page<CityResponseDto>> for CitiesPageResponse {
    fn from(page: Page<CityResponseDto>) -> Self {
        let total_pages = page.total_pages();
        Self {
            current_page: page.number,
            total_items: page.total_elements,
            total_pages,
            cities: page.content,
        }
    }
}
