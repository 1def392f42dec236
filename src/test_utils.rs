// src/test_utils.rs — shared fakes for view and shell tests
use std::sync::Mutex;
use std::thread;
use std::time::{Duration, Instant};

use crate::api::{ApiError, MovieApi};
use crate::app::edit::EditMovieView;
use crate::app::types::Effect;
use crate::model::{MovieDetail, MovieUpdate};

/// In-memory backend with canned answers; records every call it receives.
pub struct FakeApi {
    fetch: Result<MovieDetail, (u16, String)>,
    update: Result<(), (u16, String)>,
    calls: Mutex<Vec<String>>,
    updates: Mutex<Vec<MovieUpdate>>,
}

impl FakeApi {
    pub fn with_movie(title: &str, year: Option<i32>) -> Self {
        Self {
            fetch: Ok(MovieDetail {
                title: title.to_string(),
                publishing_year: year,
            }),
            update: Ok(()),
            calls: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn fetch_fails(status: u16, message: &str) -> Self {
        Self {
            fetch: Err((status, message.to_string())),
            ..Self::with_movie("", None)
        }
    }

    pub fn update_fails(mut self, status: u16, message: &str) -> Self {
        self.update = Err((status, message.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<MovieUpdate> {
        self.updates.lock().unwrap().clone()
    }
}

fn server_error((status, message): &(u16, String)) -> ApiError {
    ApiError::Server {
        status: *status,
        message: message.clone(),
    }
}

impl MovieApi for FakeApi {
    fn fetch_movie(&self, movie_id: &str) -> Result<MovieDetail, ApiError> {
        self.calls.lock().unwrap().push(format!("GET {movie_id}"));
        self.fetch.clone().map_err(|e| server_error(&e))
    }

    fn update_movie(&self, movie_id: &str, update: &MovieUpdate) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(format!("PATCH {movie_id}"));
        self.updates.lock().unwrap().push(update.clone());
        self.update.clone().map_err(|e| server_error(&e))
    }
}

/// Poll until the view has no request in flight, collecting effects along the way.
pub fn settle(view: &mut EditMovieView) -> Vec<Effect> {
    let deadline = Instant::now() + Duration::from_secs(5);
    let mut effects = Vec::new();
    loop {
        effects.extend(view.poll());
        if !view.is_busy() || Instant::now() > deadline {
            return effects;
        }
        thread::sleep(Duration::from_millis(2));
    }
}
