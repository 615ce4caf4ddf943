use egui::{RichText, Ui};
use log::debug;

use crate::design_assistant::{BudgetRange, ColorScheme, DESIGN_TIPS, DesignStyle, RoomType};

use super::{DesignAssistantApp, card_frame, option_picker, primary_button};

impl DesignAssistantApp {
    /// Display the room planner form and the general tips panel.
    ///
    /// Submitting an incomplete form leaves everything in place and raises
    /// the notice modal.
    pub(crate) fn planner_view(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Room Planning Assistant").strong());
        });
        ui.add_space(12.);

        let mut generate_clicked = false;
        ui.columns(2, |columns| {
            let selection = &mut self.view_state.selection;
            let form = &mut columns[0];
            option_picker(
                form,
                "Room Type",
                "Select a room type",
                &mut selection.room_type,
                RoomType::ALL.iter().map(|room| room.label()),
            );
            option_picker(
                form,
                "Design Style",
                "Choose your style",
                &mut selection.style,
                DesignStyle::ALL.iter().map(|style| style.label()),
            );
            option_picker(
                form,
                "Color Preference",
                "Select color scheme",
                &mut selection.color_scheme,
                ColorScheme::ALL.iter().map(|scheme| scheme.label()),
            );
            option_picker(
                form,
                "Budget Range",
                "Select budget range",
                &mut selection.budget,
                BudgetRange::ALL.iter().map(|budget| budget.label()),
            );
            form.add_space(6.);
            generate_clicked =
                primary_button(form, "💡 Generate Design Recommendations").clicked();

            card_frame(false).show(&mut columns[1], |ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new("Design Tips").strong().size(18.));
                ui.add_space(6.);
                for tip in DESIGN_TIPS {
                    ui.label(format!("• {}", tip));
                }
            });
        });

        if generate_clicked {
            if let Err(e) = self.view_state.submit(&self.engine) {
                debug!("Recommendations not generated: {}", e);
            }
        }
    }
}
