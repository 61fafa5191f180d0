//! In-memory stand-in for the movie catalog service.
//!
//! Mirrors the real service's observable behavior over the same paths:
//! JSON movie records, plain-text error messages on 404, the exact
//! missing-field message on 400, and the literal delete confirmation.
//! Backed by a `HashMap` with auto-incremented ids; state lives only as
//! long as the process.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Movie {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
}

#[derive(Deserialize)]
pub struct NameQuery {
    pub movie_name: String,
}

#[derive(Deserialize)]
pub struct YearQuery {
    pub year: i32,
}

#[derive(Default)]
pub struct Store {
    movies: HashMap<i64, Movie>,
    next_id: i64,
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/movieservice/v1/allMovies", get(all_movies))
        .route("/movieservice/v1/movieName", get(movie_by_name))
        .route("/movieservice/v1/movieYear", get(movie_by_year))
        .route("/movieservice/v1/movie", post(add_movie))
        .route(
            "/movieservice/v1/movie/{id}",
            get(movie_by_id).put(update_movie).delete(delete_movie),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn all_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    let store = db.read().await;
    let mut movies: Vec<Movie> = store.movies.values().cloned().collect();
    movies.sort_by_key(|m| m.movie_id);
    Json(movies)
}

async fn movie_by_id(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let store = db.read().await;
    store
        .movies
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| not_found_by_id(id))
}

async fn movie_by_name(
    State(db): State<Db>,
    Query(query): Query<NameQuery>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    let store = db.read().await;
    let needle = query.movie_name.to_lowercase();
    let mut movies: Vec<Movie> = store
        .movies
        .values()
        .filter(|m| {
            m.name
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect();
    if movies.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No Movie Available with the given name - {}", query.movie_name),
        ));
    }
    movies.sort_by_key(|m| m.movie_id);
    Ok(Json(movies))
}

async fn movie_by_year(
    State(db): State<Db>,
    Query(query): Query<YearQuery>,
) -> Result<Json<Vec<Movie>>, (StatusCode, String)> {
    let store = db.read().await;
    let mut movies: Vec<Movie> = store
        .movies
        .values()
        .filter(|m| m.year == Some(query.year))
        .cloned()
        .collect();
    if movies.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            format!("No Movie Available with the given year - {}", query.year),
        ));
    }
    movies.sort_by_key(|m| m.movie_id);
    Ok(Json(movies))
}

async fn add_movie(
    State(db): State<Db>,
    Json(input): Json<Movie>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let missing = missing_fields(&input);
    if !missing.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("Please pass all the input fields : [{}]", missing.join(", ")),
        ));
    }
    let mut store = db.write().await;
    store.next_id += 1;
    let movie = Movie {
        movie_id: Some(store.next_id),
        ..input
    };
    let id = store.next_id;
    store.movies.insert(id, movie.clone());
    Ok(Json(movie))
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<Movie>,
) -> Result<Json<Movie>, (StatusCode, String)> {
    let mut store = db.write().await;
    let movie = store.movies.get_mut(&id).ok_or_else(|| not_found_by_id(id))?;
    if let Some(name) = input.name {
        movie.name = Some(name);
    }
    if let Some(cast) = input.cast {
        movie.cast = Some(cast);
    }
    if let Some(year) = input.year {
        movie.year = Some(year);
    }
    if let Some(release_date) = input.release_date {
        movie.release_date = Some(release_date);
    }
    Ok(Json(movie.clone()))
}

async fn delete_movie(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<String, (StatusCode, String)> {
    let mut store = db.write().await;
    store
        .movies
        .remove(&id)
        .map(|_| "Movie Deleted Successfully".to_string())
        .ok_or_else(|| not_found_by_id(id))
}

fn missing_fields(movie: &Movie) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if movie.name.is_none() {
        missing.push("name");
    }
    if movie.cast.is_none() {
        missing.push("cast");
    }
    if movie.year.is_none() {
        missing.push("year");
    }
    if movie.release_date.is_none() {
        missing.push("release_date");
    }
    missing
}

fn not_found_by_id(id: i64) -> (StatusCode, String) {
    (
        StatusCode::NOT_FOUND,
        format!("No Movie Available with the given Movie Id - {id}"),
    )
}
