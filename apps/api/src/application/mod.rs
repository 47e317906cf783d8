pub mod city_dto;
pub mod find_cities_by_name;
pub mod list_cities;
pub mod update_city;
