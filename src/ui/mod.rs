use egui::{
    Button, Color32, ComboBox, CornerRadius, Frame, Id, Margin, Modal, Response, RichText,
    ScrollArea, Sense, Stroke, StrokeKind, Ui, Vec2, Visuals,
};
use log::{error, info};

use crate::design_assistant::{RecommendationEngine, swatch::swatch_rgb};

pub mod config;
mod colors_view;
mod home_view;
mod planner_view;
mod recommendations_view;
mod style_guide_view;
pub mod view_state;

use config::AppConfig;
pub use view_state::{Tab, ViewState};

pub(crate) const PALETTE_BLUE: Color32 = Color32::from_rgb(37, 99, 235);
pub(crate) const PALETTE_PURPLE: Color32 = Color32::from_rgb(147, 51, 234);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
pub(crate) const PALETTE_YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
pub(crate) const PALETTE_INDIGO: Color32 = Color32::from_rgb(129, 140, 248);
const PALETTE_BORDER: Color32 = Color32::from_gray(200);

const DEFAULT_BUTTON_CORNER_RADIUS: u8 = 8;
const DEFAULT_CARD_CORNER_RADIUS: u8 = 12;
const SWATCH_CORNER_RADIUS: u8 = 6;

/// `DesignAssistantApp` is the single window of the interior design assistant.
///
/// # Fields
///
/// * `engine` - The recommendation tables, built once at startup.
/// * `view_state` - Current tab, form selection and generated recommendations.
/// * `app_config` - Window and theme settings, saved on exit.
pub struct DesignAssistantApp {
    engine: RecommendationEngine,
    view_state: ViewState,
    app_config: AppConfig,
}

impl DesignAssistantApp {
    pub fn new(app_config: AppConfig, cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(visuals(app_config.dark_mode));

        Self {
            engine: RecommendationEngine::new(),
            view_state: ViewState::with_tab(app_config.start_tab),
            app_config,
        }
    }

    fn header(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(8.);
            ui.heading(
                RichText::new("AI Interior Design Assistant")
                    .size(30.)
                    .strong()
                    .color(PALETTE_BLUE),
            );
            ui.label("Transform your space with personalized design recommendations");
            ui.add_space(8.);
        });

        ui.horizontal_wrapped(|ui| {
            for tab in Tab::ALL {
                ui.selectable_value(&mut self.view_state.active_tab, tab, tab.label());
            }

            ui.separator();
            if ui
                .checkbox(&mut self.app_config.dark_mode, "Dark mode")
                .changed()
            {
                ui.ctx().set_visuals(visuals(self.app_config.dark_mode));
            }
        });
        ui.add_space(4.);
    }

    fn notice_modal(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.view_state.notice.clone() else {
            return;
        };

        let mut dismissed = false;
        let modal = Modal::new(Id::new("selection_notice")).show(ctx, |ui| {
            ui.set_width(360.);
            ui.heading("Almost there");
            ui.add_space(6.);
            ui.label(notice);
            ui.add_space(10.);
            if primary_button(ui, "OK").clicked() {
                dismissed = true;
            }
        });

        if dismissed || modal.should_close() {
            self.view_state.dismiss_notice();
        }
    }
}

impl eframe::App for DesignAssistantApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.app_config.record_last_tab(self.view_state.active_tab);
        if let Err(e) = self.app_config.save() {
            error!("Error while saving config file: {}", e);
        } else {
            info!("Saved config");
        }
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("header")
            .frame(Frame::side_top_panel(&ctx.style()).inner_margin(Margin::same(8)))
            .show(ctx, |ui| self.header(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| match self.view_state.active_tab {
                    Tab::Home => self.home_view(ui),
                    Tab::RoomPlanner => self.planner_view(ui),
                    Tab::Colors => self.colors_view(ui),
                    Tab::StyleGuide => self.style_guide_view(ui),
                    Tab::Recommendations => self.recommendations_view(ui),
                });
        });

        self.notice_modal(ctx);
    }
}

fn visuals(dark_mode: bool) -> Visuals {
    let base = if dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    };
    Visuals {
        hyperlink_color: PALETTE_BLUE,
        striped: false,
        ..base
    }
}

pub(crate) fn swatch_color(color_name: &str) -> Color32 {
    let [r, g, b] = swatch_rgb(color_name);
    Color32::from_rgb(r, g, b)
}

/// Paint a square color swatch; hovering shows the color name.
pub(crate) fn paint_swatch(ui: &mut Ui, color_name: &str, size: f32) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
    let radius = CornerRadius::same(SWATCH_CORNER_RADIUS);
    ui.painter()
        .rect_filled(rect, radius, swatch_color(color_name));
    ui.painter().rect_stroke(
        rect,
        radius,
        Stroke::new(1.0, PALETTE_BORDER),
        StrokeKind::Inside,
    );
    response.on_hover_text(color_name)
}

pub(crate) fn card_frame(selected: bool) -> Frame {
    let (stroke, fill) = if selected {
        (PALETTE_BLUE, PALETTE_BLUE.gamma_multiply(0.12))
    } else {
        (PALETTE_BORDER, Color32::TRANSPARENT)
    };
    Frame::new()
        .inner_margin(Margin::same(12))
        .corner_radius(CornerRadius::same(DEFAULT_CARD_CORNER_RADIUS))
        .stroke(Stroke::new(2.0, stroke))
        .fill(fill)
}

pub(crate) fn primary_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(
        Button::new(RichText::new(text).strong().color(Color32::WHITE))
            .fill(PALETTE_BLUE)
            .corner_radius(CornerRadius::same(DEFAULT_BUTTON_CORNER_RADIUS))
            .min_size(Vec2::new(220., 36.)),
    )
}

/// Labeled drop-down bound to one selection field. An empty value shows
/// the placeholder.
pub(crate) fn option_picker(
    ui: &mut Ui,
    label: &str,
    placeholder: &str,
    value: &mut String,
    options: impl IntoIterator<Item = &'static str>,
) {
    ui.label(RichText::new(label).strong());
    let selected_text = if value.is_empty() {
        placeholder.to_string()
    } else {
        value.clone()
    };
    ComboBox::from_id_salt(label)
        .selected_text(selected_text)
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in options {
                ui.selectable_value(&mut *value, option.to_string(), option);
            }
        });
    ui.add_space(10.);
}

pub(crate) fn bullet_list(ui: &mut Ui, items: &[String], bullet: Color32) {
    for item in items {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("●").color(bullet));
            ui.label(item);
        });
    }
}
