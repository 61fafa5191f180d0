//! Request builder, response translator, and blocking operations for the
//! movie catalog API.
//!
//! # Design
//! `CatalogClient` holds only a `base_url` and a [`Transport`] and carries no
//! mutable state between calls. Each operation is split into a `build_*`
//! method that produces an [`HttpRequest`] and a `parse_*` method that
//! consumes an [`HttpResponse`]; the public operation methods compose
//! build → execute → parse and block until the exchange completes. The
//! `build_*`/`parse_*` pairs stay public so the request and translation
//! layers can be exercised deterministically without a server.

use crate::error::CatalogError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Movie;

const ALL_MOVIES_PATH: &str = "/movieservice/v1/allMovies";
const MOVIE_PATH: &str = "/movieservice/v1/movie";
const MOVIE_BY_NAME_PATH: &str = "/movieservice/v1/movieName";
const MOVIE_BY_YEAR_PATH: &str = "/movieservice/v1/movieYear";

/// Synchronous, stateless client for the movie catalog service.
///
/// Every operation blocks the calling thread until the HTTP exchange
/// completes and returns either the decoded result or a [`CatalogError`].
/// No retries, no fallback values: a failed call is the caller's to handle.
#[derive(Debug, Clone)]
pub struct CatalogClient<T = UreqTransport> {
    base_url: String,
    transport: T,
}

impl CatalogClient<UreqTransport> {
    /// Client over the default blocking transport.
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(base_url, UreqTransport::new())
    }
}

impl<T: Transport> CatalogClient<T> {
    pub fn with_transport(base_url: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    // -- operations ---------------------------------------------------------

    /// Retrieve every movie in the catalog. The list may be empty.
    pub fn list_all(&self) -> Result<Vec<Movie>, CatalogError> {
        let request = self.build_list_all();
        self.parse_list_all(self.transport.execute(&request)?)
    }

    /// Retrieve a single movie by its server-assigned id.
    ///
    /// The id is substituted into the path verbatim; a nonexistent or invalid
    /// id is rejected by the server (404), not validated locally.
    pub fn get_by_id(&self, id: i64) -> Result<Movie, CatalogError> {
        let request = self.build_get_by_id(id);
        self.parse_get_by_id(self.transport.execute(&request)?)
    }

    /// Retrieve the movies whose name matches `name`.
    pub fn get_by_name(&self, name: &str) -> Result<Vec<Movie>, CatalogError> {
        let request = self.build_get_by_name(name);
        self.parse_get_by_name(self.transport.execute(&request)?)
    }

    /// Retrieve the movies released in `year`.
    pub fn get_by_year(&self, year: i32) -> Result<Vec<Movie>, CatalogError> {
        let request = self.build_get_by_year(year);
        self.parse_get_by_year(self.transport.execute(&request)?)
    }

    /// Create a movie. `movie.movie_id` must be unset; the returned record
    /// carries the server-assigned id.
    pub fn add(&self, movie: &Movie) -> Result<Movie, CatalogError> {
        let request = self.build_add(movie)?;
        self.parse_add(self.transport.execute(&request)?)
    }

    /// Update the movie with `id`. Only the fields set on `movie` are
    /// applied; the returned record is the merged result.
    pub fn update(&self, id: i64, movie: &Movie) -> Result<Movie, CatalogError> {
        let request = self.build_update(id, movie)?;
        self.parse_update(self.transport.execute(&request)?)
    }

    /// Delete the movie with `id`, returning the server's plain-text
    /// confirmation message.
    pub fn delete(&self, id: i64) -> Result<String, CatalogError> {
        let request = self.build_delete(id);
        self.parse_delete(self.transport.execute(&request)?)
    }

    // -- request builder ----------------------------------------------------

    pub fn build_list_all(&self) -> HttpRequest {
        self.get_request(format!("{}{ALL_MOVIES_PATH}", self.base_url))
    }

    pub fn build_get_by_id(&self, id: i64) -> HttpRequest {
        self.get_request(format!("{}{MOVIE_PATH}/{id}", self.base_url))
    }

    pub fn build_get_by_name(&self, name: &str) -> HttpRequest {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("movie_name", name)
            .finish();
        self.get_request(format!("{}{MOVIE_BY_NAME_PATH}?{query}", self.base_url))
    }

    pub fn build_get_by_year(&self, year: i32) -> HttpRequest {
        self.get_request(format!("{}{MOVIE_BY_YEAR_PATH}?year={year}", self.base_url))
    }

    pub fn build_add(&self, movie: &Movie) -> Result<HttpRequest, CatalogError> {
        Ok(HttpRequest {
            method: HttpMethod::Post,
            url: format!("{}{MOVIE_PATH}", self.base_url),
            headers: json_headers(),
            body: Some(encode_body(movie)?),
        })
    }

    pub fn build_update(&self, id: i64, movie: &Movie) -> Result<HttpRequest, CatalogError> {
        Ok(HttpRequest {
            method: HttpMethod::Put,
            url: format!("{}{MOVIE_PATH}/{id}", self.base_url),
            headers: json_headers(),
            body: Some(encode_body(movie)?),
        })
    }

    pub fn build_delete(&self, id: i64) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            url: format!("{}{MOVIE_PATH}/{id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn get_request(&self, url: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    // -- response translator ------------------------------------------------

    pub fn parse_list_all(&self, response: HttpResponse) -> Result<Vec<Movie>, CatalogError> {
        decode_movie_list(response)
    }

    pub fn parse_get_by_id(&self, response: HttpResponse) -> Result<Movie, CatalogError> {
        decode_movie(response)
    }

    pub fn parse_get_by_name(&self, response: HttpResponse) -> Result<Vec<Movie>, CatalogError> {
        decode_movie_list(response)
    }

    pub fn parse_get_by_year(&self, response: HttpResponse) -> Result<Vec<Movie>, CatalogError> {
        decode_movie_list(response)
    }

    pub fn parse_add(&self, response: HttpResponse) -> Result<Movie, CatalogError> {
        decode_movie(response)
    }

    pub fn parse_update(&self, response: HttpResponse) -> Result<Movie, CatalogError> {
        decode_movie(response)
    }

    /// The delete confirmation is plain text, passed through verbatim.
    pub fn parse_delete(&self, response: HttpResponse) -> Result<String, CatalogError> {
        check_success(&response)?;
        Ok(response.body)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn encode_body(movie: &Movie) -> Result<String, CatalogError> {
    serde_json::to_string(movie).map_err(|e| CatalogError::Transport {
        message: format!("failed to serialize request body: {e}"),
    })
}

fn decode_movie(response: HttpResponse) -> Result<Movie, CatalogError> {
    check_success(&response)?;
    serde_json::from_str(&response.body).map_err(|e| CatalogError::Transport {
        message: format!("failed to decode response body: {e}"),
    })
}

fn decode_movie_list(response: HttpResponse) -> Result<Vec<Movie>, CatalogError> {
    check_success(&response)?;
    serde_json::from_str(&response.body).map_err(|e| CatalogError::Transport {
        message: format!("failed to decode response body: {e}"),
    })
}

/// Any 2xx counts as success; everything else becomes an upstream error
/// carrying the status and raw body verbatim.
fn check_success(response: &HttpResponse) -> Result<(), CatalogError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    Err(CatalogError::Upstream {
        status: response.status,
        body: response.body.clone(),
    })
}
