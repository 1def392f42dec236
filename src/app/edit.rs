// src/app/edit.rs — load, edit and submit one movie record
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;

use eframe::egui::TextureHandle;
use tracing::{debug, error, info, warn};

use super::types::{ApiMsg, Effect, Route, ToastKind, ViewPhase};
use crate::api::MovieApi;
use crate::model::{MovieDetail, MovieUpdate, PosterFile};

pub const UPDATE_SUCCESS_MESSAGE: &str = "Movie updated successfully";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MovieForm {
    pub title: String,
    /// Text buffer behind the numeric field; parsed on submit.
    pub publishing_year: String,
    pub poster: Option<PosterFile>,
    pub selected_file_name: String,
}

impl MovieForm {
    pub fn apply_detail(&mut self, detail: &MovieDetail) {
        self.title = detail.title.clone();
        self.publishing_year = detail
            .publishing_year
            .map(|y| y.to_string())
            .unwrap_or_default();
    }

    /// Keep only the latest selection.
    pub fn set_poster(&mut self, poster: PosterFile) {
        self.selected_file_name = poster.name.clone();
        self.poster = Some(poster);
    }

    pub fn sanitize_year_input(&mut self) {
        self.publishing_year.retain(|c| c.is_ascii_digit());
    }

    pub fn drop_zone_label(&self, drag_active: bool) -> String {
        if drag_active {
            "Drop the image here ...".to_string()
        } else if self.selected_file_name.is_empty() {
            "Drop other image here".to_string()
        } else {
            format!("Selected image: {}", self.selected_file_name)
        }
    }

    /// Validate required fields and snapshot them for the PATCH.
    pub fn to_update(&self, user_id: &str) -> Result<MovieUpdate, String> {
        if self.title.trim().is_empty() {
            return Err("Title is required".into());
        }
        let year = self.publishing_year.trim();
        if year.is_empty() {
            return Err("Publishing year is required".into());
        }
        let publishing_year = year
            .parse::<i32>()
            .map_err(|_| format!("Publishing year must be a number (got `{year}`)"))?;
        Ok(MovieUpdate {
            user_id: user_id.to_string(),
            title: self.title.clone(),
            publishing_year,
            poster: self.poster.clone(),
        })
    }
}

pub struct EditMovieView {
    movie_id: String,
    user_id: String,
    api: Arc<dyn MovieApi>,
    phase: ViewPhase,
    load_started: bool,
    rx: Option<Receiver<ApiMsg>>,

    pub form: MovieForm,

    // drop-zone / preview (UI thread only)
    pub(crate) drag_active: bool,
    pub(crate) preview: Option<TextureHandle>,
    pub(crate) preview_dirty: bool,
}

impl EditMovieView {
    pub fn new(movie_id: impl Into<String>, user_id: impl Into<String>, api: Arc<dyn MovieApi>) -> Self {
        Self {
            movie_id: movie_id.into(),
            user_id: user_id.into(),
            api,
            phase: ViewPhase::Loading,
            load_started: false,
            rx: None,
            form: MovieForm::default(),
            drag_active: false,
            preview: None,
            preview_dirty: false,
        }
    }

    pub fn movie_id(&self) -> &str {
        &self.movie_id
    }

    pub const fn phase(&self) -> ViewPhase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ViewPhase::Loading | ViewPhase::Submitting)
    }

    pub fn can_submit(&self) -> bool {
        self.phase == ViewPhase::Ready
    }

    /// Kick off the one GET for this mount. Later calls are no-ops.
    pub fn start_load(&mut self) {
        if self.load_started {
            return;
        }
        self.load_started = true;
        self.phase = ViewPhase::Loading;

        let (tx, rx) = mpsc::channel::<ApiMsg>();
        self.rx = Some(rx);
        let api = Arc::clone(&self.api);
        let movie_id = self.movie_id.clone();
        info!("Loading movie {movie_id}");
        std::thread::spawn(move || {
            let result = api.fetch_movie(&movie_id);
            // Receiver is gone if the view was unmounted; nothing to apply then.
            let _ = tx.send(ApiMsg::Loaded(result));
        });
    }

    pub fn select_poster(&mut self, poster: PosterFile) {
        if self.phase == ViewPhase::Navigated {
            return;
        }
        debug!("Poster selected: {}", poster.name);
        self.form.set_poster(poster);
        self.preview = None;
        self.preview_dirty = true;
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        if !self.can_submit() {
            debug!("Submit ignored while {:?}", self.phase);
            return Vec::new();
        }
        let update = match self.form.to_update(&self.user_id) {
            Ok(u) => u,
            Err(msg) => {
                warn!("Not submitting movie {}: {msg}", self.movie_id);
                return vec![Effect::Notify(ToastKind::Warning, msg)];
            }
        };

        self.phase = ViewPhase::Submitting;
        let (tx, rx) = mpsc::channel::<ApiMsg>();
        self.rx = Some(rx);
        let api = Arc::clone(&self.api);
        let movie_id = self.movie_id.clone();
        std::thread::spawn(move || {
            let result = api.update_movie(&movie_id, &update);
            let _ = tx.send(ApiMsg::Updated(result));
        });
        Vec::new()
    }

    /// Leave without touching the network.
    pub fn cancel(&mut self) -> Vec<Effect> {
        self.rx = None;
        self.phase = ViewPhase::Navigated;
        vec![Effect::Navigate(Route::List)]
    }

    /// Drain worker results without blocking the UI thread.
    pub fn poll(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        loop {
            let msg = {
                let Some(rx) = self.rx.as_ref() else {
                    break;
                };
                match rx.try_recv() {
                    Ok(m) => m,
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        self.rx = None;
                        if self.is_busy() {
                            error!("Worker for movie {} exited without a result", self.movie_id);
                            self.phase = ViewPhase::Ready;
                            effects.push(Effect::Notify(
                                ToastKind::Error,
                                "Request aborted unexpectedly".into(),
                            ));
                        }
                        break;
                    }
                }
            };
            self.apply(msg, &mut effects);
        }
        effects
    }

    fn apply(&mut self, msg: ApiMsg, effects: &mut Vec<Effect>) {
        match msg {
            ApiMsg::Loaded(Ok(detail)) => {
                info!("Loaded movie {}: {:?}", self.movie_id, detail.title);
                self.form.apply_detail(&detail);
                self.phase = ViewPhase::Ready;
            }
            ApiMsg::Loaded(Err(e)) => {
                error!("Failed to load movie {}: {e}", self.movie_id);
                self.phase = ViewPhase::Ready;
                effects.push(Effect::Notify(ToastKind::Error, e.to_string()));
            }
            ApiMsg::Updated(Ok(())) => {
                info!("Updated movie {}", self.movie_id);
                self.rx = None;
                self.phase = ViewPhase::Navigated;
                effects.push(Effect::Notify(
                    ToastKind::Success,
                    UPDATE_SUCCESS_MESSAGE.into(),
                ));
                effects.push(Effect::Navigate(Route::List));
            }
            ApiMsg::Updated(Err(e)) => {
                error!("Failed to update movie {}: {e}", self.movie_id);
                self.phase = ViewPhase::Ready;
                effects.push(Effect::Notify(ToastKind::Error, e.to_string()));
            }
        }
    }
}
