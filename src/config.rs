use std::{env, fs, path::Path, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_SERVER_PATH: &str = "http://localhost:5000";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererKind {
    Glow,
    Wgpu,
}

impl RendererKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "glow" | "gl" => Some(Self::Glow),
            "wgpu" => Some(Self::Wgpu),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the movie API, without a trailing slash.
    pub server_path: String,
    /// Identifier of the signed-in user; `None` keeps the editor behind the sign-in screen.
    pub user_id: Option<String>,
    pub renderer: Option<RendererKind>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_path: DEFAULT_SERVER_PATH.to_string(),
            user_id: None,
            renderer: None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    #[serde(alias = "serverPath")]
    server_path: Option<String>,
    #[serde(alias = "userid", alias = "userId")]
    user_id: Option<String>,
    renderer: Option<String>,
}

/// Load `config.json` (or `$MOVIE_EDITOR_CONFIG`) and apply environment overrides.
pub fn load_config() -> AppConfig {
    let cfg_path = env::var_os("MOVIE_EDITOR_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let cfg = load_config_from(&cfg_path);
    apply_env_overrides(cfg, |key| env::var(key).ok())
}

pub fn load_config_from(cfg_path: &Path) -> AppConfig {
    let mut cfg = AppConfig::default();

    match fs::read_to_string(cfg_path) {
        Ok(raw) => match serde_json::from_str::<RawConfig>(&raw) {
            Ok(parsed) => {
                if let Some(server) = parsed.server_path {
                    cfg.server_path = normalize_server_path(&server);
                }
                cfg.user_id = parsed.user_id.and_then(non_empty);
                if let Some(name) = parsed.renderer {
                    match RendererKind::from_str(&name) {
                        Some(kind) => cfg.renderer = Some(kind),
                        None => warn!(
                            "Unknown renderer `{name}` in {}; using the platform default.",
                            cfg_path.display()
                        ),
                    }
                }
                info!("Loaded config from {}", cfg_path.display());
            }
            Err(err) => {
                warn!(
                    "Failed to parse {} ({}). Using defaults.",
                    cfg_path.display(),
                    err
                );
            }
        },
        Err(_) => {
            info!("No {} found; using defaults", cfg_path.display());
        }
    }

    cfg
}

/// Environment wins over the file. `lookup` is injectable so tests don't touch the process env.
pub fn apply_env_overrides<F>(mut cfg: AppConfig, lookup: F) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(server) = lookup("MOVIE_EDITOR_SERVER_PATH").and_then(non_empty) {
        cfg.server_path = normalize_server_path(&server);
    }
    if let Some(user) = lookup("MOVIE_EDITOR_USER_ID").and_then(non_empty) {
        cfg.user_id = Some(user);
    }
    if let Some(name) = lookup("MOVIE_EDITOR_RENDERER") {
        match RendererKind::from_str(&name) {
            Some(kind) => cfg.renderer = Some(kind),
            None => warn!("Ignoring MOVIE_EDITOR_RENDERER={name}"),
        }
    }
    cfg
}

pub fn normalize_server_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_SERVER_PATH.to_string()
    } else {
        trimmed.to_string()
    }
}

fn non_empty(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() {
        None
    } else {
        Some(t.to_string())
    }
}
