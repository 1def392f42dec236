// src/app/mod.rs — application shell: routing, session gate, notifications

use std::sync::Arc;
use std::time::Duration;

use eframe::egui as eg;
use tracing::{info, warn};

pub mod dropzone;
pub mod edit;
pub mod gfx;
pub mod notify;
pub mod types;
pub mod ui;

pub use edit::{EditMovieView, MovieForm};
pub use notify::Toasts;
pub use types::{Effect, Route, ToastKind, ViewPhase};

use crate::api::MovieApi;
use crate::config::AppConfig;

// Keep polling worker channels while a request is in flight.
const BUSY_REPAINT_MS: u64 = 100;

pub struct MovieApp {
    config: AppConfig,
    api: Arc<dyn MovieApi>,
    route: Route,
    edit: Option<EditMovieView>,
    toasts: Toasts,

    // list screen input
    list_movie_id: String,
}

impl MovieApp {
    pub fn new(config: AppConfig, api: Arc<dyn MovieApi>, initial: Route) -> Self {
        let mut app = Self {
            config,
            api,
            route: Route::List,
            edit: None,
            toasts: Toasts::new(),
            list_movie_id: String::new(),
        };
        app.navigate(initial);
        app
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn edit_view(&self) -> Option<&EditMovieView> {
        self.edit.as_ref()
    }

    pub fn edit_view_mut(&mut self) -> Option<&mut EditMovieView> {
        self.edit.as_mut()
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    /// Switch screens. Leaving the edit route drops the view; entering it mounts a fresh one.
    pub fn navigate(&mut self, route: Route) {
        info!("Navigate: {:?} -> {:?}", self.route, route);
        self.edit = None;
        if let Route::Edit(movie_id) = &route {
            match self.config.user_id.clone() {
                Some(user_id) => {
                    let mut view = EditMovieView::new(movie_id.clone(), user_id, Arc::clone(&self.api));
                    view.start_load();
                    self.edit = Some(view);
                }
                None => warn!("No user session; edit view for {movie_id} not mounted"),
            }
        }
        self.route = route;
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Notify(kind, message) => {
                    self.toasts.push(kind, message);
                }
                Effect::Navigate(route) => self.navigate(route),
            }
        }
    }

    /// Drain the mounted view's worker results and act on them.
    pub fn poll(&mut self) {
        let effects = match self.edit.as_mut() {
            Some(view) => view.poll(),
            None => return,
        };
        self.apply(effects);
    }

    fn is_busy(&self) -> bool {
        self.edit.as_ref().map_or(false, EditMovieView::is_busy)
    }
}

// ========== App impl ==========
impl eframe::App for MovieApp {
    fn update(&mut self, ctx: &eg::Context, _frame: &mut eframe::Frame) {
        self.poll();

        if let Some(view) = self.edit.as_mut() {
            view.handle_file_drop(ctx);
        }

        let mut effects = Vec::new();
        let route = self.route.clone();
        eg::CentralPanel::default().show(ctx, |ui| {
            eg::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| match route {
                    Route::Edit(_) => match self.edit.as_mut() {
                        Some(view) => effects = view.ui_render(ui),
                        None => self.ui_render_sign_in(ui),
                    },
                    Route::List => self.ui_render_list(ui),
                });
        });
        self.apply(effects);

        self.toasts.render(ctx);
        if self.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(BUSY_REPAINT_MS));
        }
    }
}
