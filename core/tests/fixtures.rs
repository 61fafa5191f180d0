//! Verify response translation against the canned fixture bodies stored in
//! `fixtures/`.
//!
//! The fixtures replay the catalog service's known responses, so these tests
//! pin down the exact decoded shape a caller sees for each operation without
//! any server involved.

use catalog_core::{CatalogClient, CatalogError, HttpResponse, Movie};
use chrono::NaiveDate;

const BASE_URL: &str = "http://localhost:8081";

fn client() -> CatalogClient {
    CatalogClient::new(BASE_URL)
}

fn ok(body: &str) -> HttpResponse {
    HttpResponse {
        status: 200,
        body: body.to_string(),
    }
}

#[test]
fn all_movies_fixture_decodes_every_record() {
    let movies = client()
        .parse_list_all(ok(include_str!("../../fixtures/all-movies.json")))
        .unwrap();
    assert_eq!(movies.len(), 3);
    assert_eq!(movies[0].name.as_deref(), Some("Batman Begins"));
    assert_eq!(movies[2].year, Some(2012));
}

#[test]
fn avengers_fixture_yields_four_records_with_exact_cast() {
    let movies = client()
        .parse_get_by_name(ok(include_str!("../../fixtures/avengers.json")))
        .unwrap();
    assert_eq!(movies.len(), 4);
    assert_eq!(
        movies[0].cast.as_deref(),
        Some("Robert Downey Jr, Chris Evans , Chris HemsWorth")
    );
}

#[test]
fn year_2012_fixture_yields_two_records() {
    let movies = client()
        .parse_get_by_year(ok(include_str!("../../fixtures/year-2012.json")))
        .unwrap();
    assert_eq!(movies.len(), 2);
    assert_eq!(
        movies[1].cast.as_deref(),
        Some("Robert Downey Jr, Chris Evans , Chris HemsWorth")
    );
}

#[test]
fn single_movie_fixture_decodes_all_fields() {
    let movie = client()
        .parse_get_by_id(ok(include_str!("../../fixtures/movie.json")))
        .unwrap();
    assert_eq!(
        movie,
        Movie {
            movie_id: Some(1),
            ..Movie::new(
                "Batman Begins",
                "Christian Bale, Katie Holmes , Liam Neeson",
                2005,
                NaiveDate::from_ymd_opt(2005, 6, 15).unwrap(),
            )
        }
    );
}

#[test]
fn add_movie_fixture_carries_server_assigned_id() {
    let movie = client()
        .parse_add(ok(include_str!("../../fixtures/add-movie.json")))
        .unwrap();
    assert_eq!(movie.movie_id, Some(8));
    assert_eq!(movie.name.as_deref(), Some("Harry Potter y la Camara Secreta"));
}

#[test]
fn fixture_records_roundtrip_through_the_codec() {
    let movies = client()
        .parse_list_all(ok(include_str!("../../fixtures/avengers.json")))
        .unwrap();
    for movie in movies {
        let encoded = serde_json::to_string(&movie).unwrap();
        let decoded: Movie = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, movie);
    }
}

#[test]
fn truncated_fixture_body_is_a_transport_error() {
    let truncated = &include_str!("../../fixtures/avengers.json")[..40];
    let err = client().parse_get_by_name(ok(truncated)).unwrap_err();
    assert!(matches!(err, CatalogError::Transport { .. }));
}
