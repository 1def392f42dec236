// src/api.rs — blocking client for the movie backend
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, info};

use crate::model::{MovieDetail, MovieUpdate};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("{status} - {message}")]
    Server { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("could not read poster {name}: {source}")]
    Poster {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Transport(e.to_string())
    }
}

/// The two calls the edit view makes. Implementations run on worker threads.
pub trait MovieApi: Send + Sync {
    fn fetch_movie(&self, movie_id: &str) -> Result<MovieDetail, ApiError>;
    fn update_movie(&self, movie_id: &str, update: &MovieUpdate) -> Result<(), ApiError>;
}

pub struct HttpMovieApi {
    client: Client,
    server_path: String,
}

impl HttpMovieApi {
    pub fn new(server_path: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("movie-editor/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, server_path))
    }

    pub fn with_client(client: Client, server_path: impl Into<String>) -> Self {
        Self {
            client,
            server_path: server_path.into(),
        }
    }

    pub fn movie_url(&self, movie_id: &str) -> String {
        movie_url(&self.server_path, movie_id)
    }
}

pub fn movie_url(server_path: &str, movie_id: &str) -> String {
    format!(
        "{}/movie/movies/{}",
        server_path.trim_end_matches('/'),
        urlencoding::encode(movie_id)
    )
}

impl MovieApi for HttpMovieApi {
    fn fetch_movie(&self, movie_id: &str) -> Result<MovieDetail, ApiError> {
        let url = self.movie_url(movie_id);
        debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .send()?;
        let resp = ensure_success(resp)?;
        let body = resp.bytes()?;
        serde_json::from_slice::<MovieDetail>(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn update_movie(&self, movie_id: &str, update: &MovieUpdate) -> Result<(), ApiError> {
        let url = self.movie_url(movie_id);
        let form = build_update_form(update)?;
        info!(
            "PATCH {url} (title={:?}, year={}, poster={})",
            update.title,
            update.publishing_year,
            update.poster.as_ref().map_or("<unchanged>", |p| p.name.as_str())
        );
        let resp = self.client.patch(&url).multipart(form).send()?;
        ensure_success(resp)?;
        Ok(())
    }
}

/// Multipart body with the backend's field names: `userid`, `title`, `publishingYear`, `poster`.
pub fn build_update_form(update: &MovieUpdate) -> Result<Form, ApiError> {
    let form = Form::new()
        .text("userid", update.user_id.clone())
        .text("title", update.title.clone())
        .text("publishingYear", update.publishing_year.to_string());

    let form = match &update.poster {
        Some(poster) => {
            let bytes = poster.read_bytes().map_err(|source| ApiError::Poster {
                name: poster.name.clone(),
                source,
            })?;
            let part = Part::bytes(bytes)
                .file_name(poster.name.clone())
                .mime_str(&poster.mime())?;
            form.part("poster", part)
        }
        // No new file: send the empty value so the server keeps the current poster.
        None => form.text("poster", String::new()),
    };
    Ok(form)
}

fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().unwrap_or_default();
    Err(ApiError::Server {
        status: status.as_u16(),
        message: error_message(status, &body),
    })
}

/// `{ "message": ... }` or a bare JSON string if present, else the raw body, else the reason phrase.
pub fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let serde_json::Value::String(s) = &value {
            if !s.trim().is_empty() {
                return s.trim().to_string();
            }
        }
        match value.get("message") {
            Some(serde_json::Value::String(s)) => {
                if !s.trim().is_empty() {
                    return s.trim().to_string();
                }
            }
            Some(serde_json::Value::Null) | None => {}
            Some(other) => return other.to_string(),
        }
    }
    let trimmed = body.trim();
    if !trimmed.is_empty() && !trimmed.starts_with('{') {
        return trimmed.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}
