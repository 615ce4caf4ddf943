use egui::{RichText, Sense, Ui};

use crate::design_assistant::DesignStyle;

use super::{DesignAssistantApp, card_frame};

const STYLE_CARD_WIDTH: f32 = 300.;

impl DesignAssistantApp {
    pub(crate) fn style_guide_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Interior Design Styles").strong());
        });
        ui.add_space(12.);

        ui.horizontal_wrapped(|ui| {
            for style in DesignStyle::ALL {
                let selected = self.view_state.selection.style == style.label();
                let response = card_frame(selected)
                    .show(ui, |ui| {
                        ui.set_width(STYLE_CARD_WIDTH);
                        ui.label(RichText::new(style.label()).strong().size(18.));
                        ui.add_space(4.);
                        ui.label(style.description());
                        ui.add_space(4.);
                        ui.label(
                            RichText::new(format!("Key elements: {}", style.key_elements()))
                                .small()
                                .weak(),
                        );
                    })
                    .response
                    .interact(Sense::click());
                if response.clicked() {
                    self.view_state.selection.style = style.label().to_string();
                }
            }
        });
    }
}
