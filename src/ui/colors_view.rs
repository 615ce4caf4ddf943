use egui::{RichText, Sense, Ui};

use crate::design_assistant::ColorScheme;

use super::{DesignAssistantApp, card_frame, paint_swatch};

const SCHEME_CARD_WIDTH: f32 = 200.;
const PREVIEW_SWATCH_SIZE: f32 = 28.;
const DETAIL_SWATCH_SIZE: f32 = 80.;

impl DesignAssistantApp {
    pub(crate) fn colors_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Color Harmony Guide").strong());
        });
        ui.add_space(12.);

        ui.horizontal_wrapped(|ui| {
            for scheme in ColorScheme::ALL {
                let selected = self.view_state.selection.color_scheme == scheme.label();
                let response = card_frame(selected)
                    .show(ui, |ui| {
                        ui.set_width(SCHEME_CARD_WIDTH);
                        ui.horizontal(|ui| {
                            for color in self.engine.colors_for(scheme.label()) {
                                paint_swatch(ui, &color, PREVIEW_SWATCH_SIZE);
                            }
                        });
                        ui.add_space(4.);
                        ui.label(RichText::new(scheme.label()).strong());
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    self.view_state.selection.color_scheme = scheme.label().to_string();
                }
            }
        });

        let scheme = self.view_state.selection.color_scheme.clone();
        if scheme.is_empty() {
            return;
        }

        ui.add_space(16.);
        card_frame(false).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("Colors for \"{}\"", scheme))
                    .strong()
                    .size(18.),
            );
            ui.add_space(8.);
            ui.horizontal_wrapped(|ui| {
                for color in self.engine.colors_for(&scheme) {
                    ui.vertical(|ui| {
                        paint_swatch(ui, &color, DETAIL_SWATCH_SIZE);
                        ui.label(color);
                    });
                    ui.add_space(12.);
                }
            });
        });
    }
}
