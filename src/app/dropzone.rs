// src/app/dropzone.rs — poster selection by drag-and-drop or file dialog
use eframe::egui as eg;
use tracing::{debug, info};

use super::edit::EditMovieView;
use crate::model::PosterFile;

const ZONE_HEIGHT: f32 = 220.0;

/// Native drops carry a path, web drops carry bytes. Anything else is unusable.
pub fn poster_from_dropped(file: &eg::DroppedFile) -> Option<PosterFile> {
    if let Some(path) = &file.path {
        let mut poster = PosterFile::from_path(path.clone());
        if !file.name.is_empty() {
            poster.name = file.name.clone();
        }
        return Some(poster);
    }
    let bytes = file.bytes.clone()?;
    let name = if file.name.is_empty() {
        "poster".to_string()
    } else {
        file.name.clone()
    };
    Some(PosterFile::from_bytes(name, bytes))
}

/// Only the first file of a multi-file drop is kept.
pub fn first_dropped_poster(files: &[eg::DroppedFile]) -> Option<PosterFile> {
    files.iter().find_map(poster_from_dropped)
}

impl EditMovieView {
    /// Window-wide drag state and drops; call once per frame.
    pub(crate) fn handle_file_drop(&mut self, ctx: &eg::Context) {
        self.drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.len() > 1 {
            debug!("{} files dropped; keeping the first", dropped.len());
        }
        if let Some(poster) = first_dropped_poster(&dropped) {
            self.select_poster(poster);
        }
    }

    pub(crate) fn browse_for_poster(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .set_title("Choose a poster image")
            .pick_file()
        {
            info!("Poster picked from dialog: {}", path.display());
            self.select_poster(PosterFile::from_path(path));
        }
    }

    pub(crate) fn ui_drop_zone(&mut self, ui: &mut eg::Ui) {
        let size = eg::vec2(ui.available_width(), ZONE_HEIGHT);
        let (rect, resp) = ui.allocate_exact_size(size, eg::Sense::click());
        let resp = resp.on_hover_cursor(eg::CursorIcon::PointingHand);

        let stroke_col = if self.drag_active || resp.hovered() {
            eg::Color32::from_rgb(120, 180, 255)
        } else {
            eg::Color32::from_gray(110)
        };
        let painter = ui.painter();
        painter.rect_filled(rect, 10.0, eg::Color32::from_rgb(34, 64, 78));
        painter.rect_stroke(rect.shrink(1.0), 10.0, eg::Stroke::new(1.5, stroke_col));
        painter.text(
            rect.center(),
            eg::Align2::CENTER_CENTER,
            self.form.drop_zone_label(self.drag_active),
            eg::FontId::proportional(14.0),
            eg::Color32::WHITE,
        );

        if resp.clicked() {
            self.browse_for_poster();
        }

        if self.preview_dirty {
            self.preview_dirty = false;
            if let Some(poster) = &self.form.poster {
                match super::gfx::load_preview(ui.ctx(), poster) {
                    Ok(tex) => self.preview = Some(tex),
                    Err(e) => debug!("No preview for {}: {e}", poster.name),
                }
            }
        }
        if let Some(tex) = &self.preview {
            ui.add_space(8.0);
            let tex_size = tex.size_vec2();
            let scale = (ui.available_width() / tex_size.x).min(1.0);
            ui.image((tex.id(), tex_size * scale));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn path_drop_uses_file_name() {
        let file = eg::DroppedFile {
            path: Some(PathBuf::from("/home/me/Pictures/alien.png")),
            ..Default::default()
        };
        let poster = poster_from_dropped(&file).unwrap();
        assert_eq!(poster.name, "alien.png");
    }

    #[test]
    fn byte_drop_keeps_reported_name() {
        let file = eg::DroppedFile {
            name: "up.webp".into(),
            bytes: Some(Arc::from(&b"RIFF"[..])),
            ..Default::default()
        };
        let poster = poster_from_dropped(&file).unwrap();
        assert_eq!(poster.name, "up.webp");
        assert_eq!(poster.read_bytes().unwrap(), b"RIFF");
    }

    #[test]
    fn first_usable_file_wins() {
        let files = vec![
            eg::DroppedFile::default(),
            eg::DroppedFile {
                path: Some(PathBuf::from("a.jpg")),
                ..Default::default()
            },
            eg::DroppedFile {
                path: Some(PathBuf::from("b.jpg")),
                ..Default::default()
            },
        ];
        assert_eq!(first_dropped_poster(&files).map(|p| p.name), Some("a.jpg".into()));
        assert!(first_dropped_poster(&[]).is_none());
    }
}
