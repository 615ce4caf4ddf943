use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::AtriumError;
use crate::design_assistant::{RecommendationBundle, RecommendationEngine, Selection};

/// Top-level tabs of the assistant window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tab {
    #[default]
    Home,
    RoomPlanner,
    Colors,
    StyleGuide,
    Recommendations,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::RoomPlanner,
        Tab::Colors,
        Tab::StyleGuide,
        Tab::Recommendations,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "🏠 Home",
            Tab::RoomPlanner => "📐 Room Planner",
            Tab::Colors => "🎨 Colors",
            Tab::StyleGuide => "✨ Style Guide",
            Tab::Recommendations => "💡 My Recommendations",
        }
    }
}

/// Everything the window shows that is not static catalog data.
///
/// The state is owned by the app and handed to the stateless
/// [`RecommendationEngine`] on submit.
#[derive(Debug, Default)]
pub struct ViewState {
    pub active_tab: Tab,
    pub selection: Selection,
    pub recommendations: Option<RecommendationBundle>,
    /// Blocking message shown in a modal until dismissed.
    pub notice: Option<String>,
}

impl ViewState {
    pub fn with_tab(active_tab: Tab) -> Self {
        Self {
            active_tab,
            ..Default::default()
        }
    }

    pub fn has_recommendations(&self) -> bool {
        self.recommendations.is_some()
    }

    /// Generate recommendations for the current selection.
    ///
    /// On success the bundle is stored and the recommendations tab opens.
    /// On failure only the notice is set; tab, selection and any previous
    /// bundle stay as they were.
    pub fn submit(&mut self, engine: &RecommendationEngine) -> Result<(), AtriumError> {
        match engine.generate(&self.selection) {
            Ok(bundle) => {
                info!("Generated recommendations for {}", self.selection.room_type);
                self.recommendations = Some(bundle);
                self.active_tab = Tab::Recommendations;
                Ok(())
            }
            Err(e) => {
                debug!("Rejected incomplete selection: {}", e);
                self.notice = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Start over with a blank form on the room planner.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.recommendations = None;
        self.notice = None;
        self.active_tab = Tab::RoomPlanner;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design_assistant::Selection;

    fn complete_state() -> ViewState {
        let mut state = ViewState::with_tab(Tab::RoomPlanner);
        state.selection = Selection::new("Living Room", "Modern", "Neutral & Warm", "Under $1,000");
        state
    }

    #[test]
    fn test_default_state_starts_on_home() {
        let state = ViewState::default();
        assert_eq!(state.active_tab, Tab::Home);
        assert!(!state.has_recommendations());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_submit_stores_bundle_and_switches_tab() {
        let engine = RecommendationEngine::new();
        let mut state = complete_state();

        state.submit(&engine).unwrap();

        assert_eq!(state.active_tab, Tab::Recommendations);
        let bundle = state.recommendations.as_ref().unwrap();
        assert_eq!(bundle.furniture[0], "Comfortable sofa");
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_incomplete_submit_only_sets_notice() {
        let engine = RecommendationEngine::new();
        let mut state = ViewState::with_tab(Tab::RoomPlanner);
        state.selection.room_type = "Kitchen".to_string();

        assert!(state.submit(&engine).is_err());

        assert_eq!(state.active_tab, Tab::RoomPlanner);
        assert!(!state.has_recommendations());
        assert_eq!(state.selection.room_type, "Kitchen");
        let notice = state.notice.clone().unwrap();
        assert!(notice.starts_with("Please fill in all fields"));

        state.dismiss_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_failed_submit_keeps_previous_bundle() {
        let engine = RecommendationEngine::new();
        let mut state = complete_state();
        state.submit(&engine).unwrap();
        let previous = state.recommendations.clone();

        state.selection.style.clear();
        assert!(state.submit(&engine).is_err());
        assert_eq!(state.recommendations, previous);
        assert_eq!(state.active_tab, Tab::Recommendations);
    }

    #[test]
    fn test_reset_clears_selection_and_bundle() {
        let engine = RecommendationEngine::new();
        let mut state = complete_state();
        state.submit(&engine).unwrap();

        state.reset();

        assert_eq!(state.active_tab, Tab::RoomPlanner);
        assert_eq!(state.selection, Selection::default());
        assert!(!state.has_recommendations());
    }
}
