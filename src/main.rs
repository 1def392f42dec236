// src/main.rs
use std::env;
use std::sync::Arc;

use movie_editor::api::HttpMovieApi;
use movie_editor::app::{MovieApp, Route};
use movie_editor::config::{load_config, RendererKind};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn pick_renderer(kind: Option<RendererKind>) -> eframe::Renderer {
    match kind {
        Some(RendererKind::Glow) => eframe::Renderer::Glow,
        Some(RendererKind::Wgpu) => eframe::Renderer::Wgpu,
        None => {
            // Default: Windows = WGPU (DX12), Others = Glow (GL)
            #[cfg(target_os = "windows")]
            { eframe::Renderer::Wgpu }
            #[cfg(not(target_os = "windows"))]
            { eframe::Renderer::Glow }
        }
    }
}

fn main() -> eframe::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();

    let config = load_config();
    info!("API base: {}", config.server_path);

    let api = match HttpMovieApi::new(config.server_path.clone()) {
        Ok(api) => Arc::new(api),
        Err(e) => {
            error!("Could not set up the HTTP client: {e}");
            std::process::exit(1);
        }
    };

    // Optional first argument: movie id to open straight away.
    let initial = env::args()
        .nth(1)
        .filter(|id| !id.trim().is_empty())
        .map_or(Route::List, |id| Route::Edit(id.trim().to_string()));

    let options = eframe::NativeOptions {
        renderer: pick_renderer(config.renderer),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    match eframe::run_native(
        "Movie Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(MovieApp::new(config, api, initial)))),
    ) {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("eframe failed to start: {e:?}");
            error!("Hint: try MOVIE_EDITOR_RENDERER=wgpu or glow.");
            Err(e)
        }
    }
}
