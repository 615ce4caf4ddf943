use egui::{Color32, RichText, Ui};
use itertools::Itertools;

use super::{
    DesignAssistantApp, PALETTE_BLUE, PALETTE_GREEN, PALETTE_INDIGO, PALETTE_PURPLE,
    PALETTE_YELLOW, Tab, bullet_list, card_frame, paint_swatch, primary_button,
};

const RESULT_SWATCH_SIZE: f32 = 64.;

fn section(ui: &mut Ui, title: &str, accent: Color32, add_contents: impl FnOnce(&mut Ui)) {
    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title).strong().size(18.).color(accent));
        ui.add_space(6.);
        add_contents(ui);
    });
    ui.add_space(12.);
}

impl DesignAssistantApp {
    /// Display the generated recommendations, or an empty state pointing
    /// back to the planner when nothing has been generated yet.
    pub(crate) fn recommendations_view(&mut self, ui: &mut Ui) {
        let Some(bundle) = self.view_state.recommendations.clone() else {
            self.empty_recommendations_view(ui);
            return;
        };

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Your Personalized Design Recommendations").strong());
        });
        ui.add_space(12.);

        let selection = &self.view_state.selection;
        card_frame(false)
            .fill(PALETTE_BLUE.gamma_multiply(0.08))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Your Selections:").strong());
                ui.label(
                    [
                        format!("🏠 {}", selection.room_type),
                        format!("🎨 {}", selection.style),
                        format!("🌈 {}", selection.color_scheme),
                        format!("💰 {}", selection.budget),
                    ]
                    .iter()
                    .join("    "),
                );
            });
        ui.add_space(12.);

        section(ui, "Recommended Colors", PALETTE_BLUE, |ui| {
            ui.horizontal_wrapped(|ui| {
                for color in &bundle.colors {
                    ui.vertical(|ui| {
                        paint_swatch(ui, color, RESULT_SWATCH_SIZE);
                        ui.label(RichText::new(color).small());
                    });
                    ui.add_space(12.);
                }
            });
        });
        section(ui, "Furniture Essentials", PALETTE_GREEN, |ui| {
            bullet_list(ui, &bundle.furniture, PALETTE_GREEN)
        });
        section(ui, "Lighting Suggestions", PALETTE_YELLOW, |ui| {
            bullet_list(ui, &bundle.lighting, PALETTE_YELLOW)
        });
        section(ui, "Decor & Styling", PALETTE_PURPLE, |ui| {
            bullet_list(ui, &bundle.decor, PALETTE_PURPLE)
        });
        section(ui, "Layout Tips", PALETTE_INDIGO, |ui| {
            bullet_list(ui, &bundle.layout, PALETTE_INDIGO)
        });

        ui.vertical_centered(|ui| {
            if primary_button(ui, "Plan Another Room").clicked() {
                self.view_state.reset();
            }
        });
    }

    fn empty_recommendations_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.);
            ui.label(RichText::new("💡").size(56.).weak());
            ui.heading(RichText::new("No Recommendations Yet").strong());
            ui.label(
                "Complete the Room Planner to get your personalized design recommendations!",
            );
            ui.add_space(16.);
            if primary_button(ui, "Start Room Planning").clicked() {
                self.view_state.active_tab = Tab::RoomPlanner;
            }
        });
    }
}
