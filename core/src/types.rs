//! Domain DTOs for the movie catalog API.
//!
//! # Design
//! A single `Movie` record covers every wire exchange: create bodies carry
//! no `movie_id` (it is server-assigned), partial update bodies omit the
//! unchanged fields, and decoded responses fill in whatever the server sent.
//! Every field is therefore optional and unset fields are skipped during
//! serialization, so the record round-trips field-for-field through JSON.
//! The type mirrors the mock-server's schema but is defined independently;
//! integration tests catch schema drift between the two crates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A catalog record exchanged with the movie service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Server-assigned identifier; absent until the movie is persisted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// ISO-8601 calendar date, e.g. `2002-11-29`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
}

impl Movie {
    /// Creation payload with all required fields set and no identifier.
    pub fn new(name: &str, cast: &str, year: i32, release_date: NaiveDate) -> Self {
        Self {
            movie_id: None,
            name: Some(name.to_string()),
            cast: Some(cast.to_string()),
            year: Some(year),
            release_date: Some(release_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_serializes_with_exact_field_names() {
        let movie = Movie::new(
            "Batman Begins",
            "Christian Bale, Katie Holmes , Liam Neeson",
            2005,
            NaiveDate::from_ymd_opt(2005, 6, 15).unwrap(),
        );
        let json = serde_json::to_value(&movie).unwrap();
        assert_eq!(json["name"], "Batman Begins");
        assert_eq!(json["cast"], "Christian Bale, Katie Holmes , Liam Neeson");
        assert_eq!(json["year"], 2005);
        assert_eq!(json["release_date"], "2005-06-15");
    }

    #[test]
    fn creation_payload_omits_absent_identifier() {
        let movie = Movie::new("Up", "Ed Asner", 2009, NaiveDate::from_ymd_opt(2009, 5, 29).unwrap());
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("movie_id").is_none());
    }

    #[test]
    fn partial_record_omits_unset_fields() {
        let movie = Movie {
            cast: Some("uwu".to_string()),
            ..Movie::default()
        };
        let json = serde_json::to_string(&movie).unwrap();
        assert_eq!(json, r#"{"cast":"uwu"}"#);
    }

    #[test]
    fn movie_roundtrips_through_json() {
        let movie = Movie {
            movie_id: Some(7),
            ..Movie::new(
                "Avengers: End Game",
                "Robert Downey Jr, Chris Evans , Chris HemsWorth",
                2019,
                NaiveDate::from_ymd_opt(2019, 4, 26).unwrap(),
            )
        };
        let json = serde_json::to_string(&movie).unwrap();
        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn missing_wire_fields_decode_as_none() {
        let movie: Movie = serde_json::from_str(r#"{"name":"Dark Knight"}"#).unwrap();
        assert_eq!(movie.name.as_deref(), Some("Dark Knight"));
        assert!(movie.movie_id.is_none());
        assert!(movie.cast.is_none());
        assert!(movie.year.is_none());
        assert!(movie.release_date.is_none());
    }
}
