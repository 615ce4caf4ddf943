use egui::{RichText, Ui};

use super::{
    DesignAssistantApp, PALETTE_BLUE, PALETTE_GREEN, PALETTE_PURPLE, Tab, card_frame,
    primary_button,
};

const FEATURES: [(&str, &str, &str); 3] = [
    (
        "📐",
        "Room Planning",
        "Get layout suggestions and furniture recommendations",
    ),
    (
        "🎨",
        "Color Harmony",
        "Discover perfect color combinations for your space",
    ),
    (
        "✨",
        "Style Matching",
        "Find your design style and get curated suggestions",
    ),
];

impl DesignAssistantApp {
    pub(crate) fn home_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(12.);
            ui.label(
                RichText::new("✨ Welcome to Your Design Journey")
                    .color(PALETTE_BLUE)
                    .strong(),
            );
            ui.add_space(6.);
            ui.heading(
                RichText::new("Let's Design Your Dream Space")
                    .size(26.)
                    .strong(),
            );
            ui.add_space(6.);
            ui.label(
                "Our assistant will help you create beautiful, functional spaces tailored to your \
                 style, budget, and needs. Get started by exploring our tools or jump straight to \
                 the Room Planner!",
            );
            ui.add_space(16.);
        });

        let accents = [PALETTE_BLUE, PALETTE_PURPLE, PALETTE_GREEN];
        ui.columns(FEATURES.len(), |columns| {
            for ((ui, (icon, title, text)), accent) in
                columns.iter_mut().zip(FEATURES).zip(accents)
            {
                card_frame(false).show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(36.).color(accent));
                        ui.label(RichText::new(title).strong().size(18.));
                        ui.label(text);
                    });
                });
            }
        });

        ui.add_space(20.);
        ui.vertical_centered(|ui| {
            if primary_button(ui, "Start Planning Your Room ➡").clicked() {
                self.view_state.active_tab = Tab::RoomPlanner;
            }
        });
    }
}
