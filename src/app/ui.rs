// src/app/ui.rs
pub mod form;

use eframe::egui as eg;

use super::types::Route;

impl crate::app::MovieApp {
    /// Stand-in for the movie list: open any movie by id.
    pub(crate) fn ui_render_list(&mut self, ui: &mut eg::Ui) {
        ui.add_space(24.0);
        ui.label(eg::RichText::new("My movies").size(40.0).strong());
        ui.add_space(16.0);
        ui.label("Open a movie by its id to edit it.");
        ui.add_space(8.0);

        let mut open = false;
        ui.horizontal(|ui| {
            let resp = ui.add(
                eg::TextEdit::singleline(&mut self.list_movie_id)
                    .hint_text("Movie id")
                    .desired_width(260.0),
            );
            if resp.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter)) {
                open = true;
            }
            let has_id = !self.list_movie_id.trim().is_empty();
            if ui.add_enabled(has_id, eg::Button::new("Edit")).clicked() {
                open = true;
            }
        });

        let id = self.list_movie_id.trim().to_string();
        if open && !id.is_empty() {
            self.navigate(Route::Edit(id));
        }
    }

    pub(crate) fn ui_render_sign_in(&self, ui: &mut eg::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            ui.heading("Sign in required");
            ui.add_space(8.0);
            ui.label("No user session is configured, so movies can't be edited.");
            ui.label("Set `user_id` in config.json or MOVIE_EDITOR_USER_ID and restart.");
            ui.add_space(8.0);
            ui.monospace(format!("API: {}", self.config.server_path));
        });
    }
}
