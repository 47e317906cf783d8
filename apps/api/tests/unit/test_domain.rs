use cities_api::{
    application::{
        city_dto::CityResponseDto, list_cities::dto::CitiesPageResponse,
        update_city::dto::CityUpdateRequestDto,
    },
    domain::{
        city::entity::City,
        shared::pagination::{Page, PageRequest},
    },
};

#[test]
fn page_request_accepts_bounds() {
    assert!(PageRequest::new(0, 1).is_ok());
    assert!(PageRequest::new(0, 50).is_ok());
    assert!(PageRequest::new(1000, 25).is_ok());
}

#[test]
fn page_request_rejects_out_of_range() {
    assert!(PageRequest::new(-1, 10).is_err());
    assert!(PageRequest::new(0, 0).is_err());
    assert!(PageRequest::new(0, 51).is_err());
}

#[test]
fn page_envelope_counts_partial_last_page() {
    let request = PageRequest::new(2, 4).expect("valid page");
    let page = Page::new(
        vec![City {
            id: 9,
            name: "Cairo".into(),
            photo: "cairo.jpg".into(),
        }],
        request,
        9,
    );
    let response: CitiesPageResponse = page.map(CityResponseDto::from).into();

    assert_eq!(response.current_page, 2);
    assert_eq!(response.total_items, 9);
    assert_eq!(response.total_pages, 3);
    assert_eq!(response.cities[0].name, "Cairo");
}

#[test]
fn update_request_rejects_blank_or_oversized_fields() {
    let ok = CityUpdateRequestDto {
        name: "Lima".into(),
        photo: "lima.jpg".into(),
    };
    assert!(ok.validated().is_ok());

    let blank = CityUpdateRequestDto {
        name: " \t".into(),
        photo: "lima.jpg".into(),
    };
    assert!(blank.validated().is_err());

    let long = CityUpdateRequestDto {
        name: "x".repeat(256),
        photo: "lima.jpg".into(),
    };
    assert!(long.validated().is_err());
}
