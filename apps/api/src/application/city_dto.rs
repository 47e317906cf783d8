use crate::domain::city::entity::City;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CityResponseDto {
    pub id: i64,
    pub name: String,
    pub photo: String,
}

impl From<City> for CityResponseDto {
    fn from(city: City) -> Self {
        Self {
            id: city.id,
            name: city.name,
            photo: city.photo,
        }
    }
}
