// src/app/ui/form.rs
use eframe::egui as eg;

use crate::app::edit::EditMovieView;
use crate::app::types::{Effect, ViewPhase};

const FIELD_WIDTH: f32 = 320.0;

impl EditMovieView {
    /// Full edit page. Returns whatever the user's actions produced this frame.
    pub(crate) fn ui_render(&mut self, ui: &mut eg::Ui) -> Vec<Effect> {
        let mut effects = Vec::new();

        ui.add_space(24.0);
        ui.horizontal(|ui| {
            ui.label(eg::RichText::new("Edit").size(40.0).strong());
            match self.phase() {
                ViewPhase::Loading => {
                    ui.add(eg::Spinner::new().size(18.0));
                    ui.label(eg::RichText::new("Loading movie…").weak());
                }
                ViewPhase::Submitting => {
                    ui.add(eg::Spinner::new().size(18.0));
                    ui.label(eg::RichText::new("Saving…").weak());
                }
                ViewPhase::Ready | ViewPhase::Navigated => {}
            }
        });
        ui.add_space(24.0);

        ui.columns(2, |cols| {
            self.ui_drop_zone(&mut cols[0]);
            effects.extend(self.ui_fields(&mut cols[1]));
        });

        effects
    }

    fn ui_fields(&mut self, ui: &mut eg::Ui) -> Vec<Effect> {
        let mut submit = false;

        let title = ui.add(
            eg::TextEdit::singleline(&mut self.form.title)
                .hint_text("Title")
                .desired_width(FIELD_WIDTH),
        );
        if title.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter)) {
            submit = true;
        }

        ui.add_space(12.0);
        let year = ui.add(
            eg::TextEdit::singleline(&mut self.form.publishing_year)
                .hint_text("Publishing year")
                .desired_width(FIELD_WIDTH * 0.7),
        );
        if year.changed() {
            self.form.sanitize_year_input();
        }
        if year.lost_focus() && ui.input(|i| i.key_pressed(eg::Key::Enter)) {
            submit = true;
        }

        ui.add_space(32.0);
        let mut effects = Vec::new();
        ui.horizontal(|ui| {
            if ui
                .add_sized([FIELD_WIDTH * 0.48, 40.0], eg::Button::new("Cancel"))
                .clicked()
            {
                effects.extend(self.cancel());
            }
            let update = ui.add_enabled(
                self.can_submit(),
                eg::Button::new("Update").min_size(eg::vec2(FIELD_WIDTH * 0.48, 40.0)),
            );
            if update.clicked() {
                submit = true;
            }
        });

        if submit && effects.is_empty() {
            effects.extend(self.submit());
        }
        effects
    }
}
