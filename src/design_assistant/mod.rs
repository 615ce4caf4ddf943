use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod recommendations;
pub mod swatch;


pub use catalog::{BudgetRange, ColorScheme, DESIGN_TIPS, DesignStyle, RoomType};
pub use recommendations::RecommendationEngine;

/// The four choices a user makes before asking for recommendations.
///
/// Values are free-form strings. They normally come from the labels in
/// [`catalog`], but anything non-empty is accepted and unknown values
/// resolve to the generic fallback recommendations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub room_type: String,
    pub style: String,
    pub color_scheme: String,
    pub budget: String,
}

impl Selection {
    pub fn new(
        room_type: impl Into<String>,
        style: impl Into<String>,
        color_scheme: impl Into<String>,
        budget: impl Into<String>,
    ) -> Self {
        Self {
            room_type: room_type.into(),
            style: style.into(),
            color_scheme: color_scheme.into(),
            budget: budget.into(),
        }
    }

    /// Names of the fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("room type", &self.room_type),
            ("style", &self.style),
            ("color scheme", &self.color_scheme),
            ("budget", &self.budget),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Suggestions produced for a single [`Selection`].
///
/// Each list is in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationBundle {
    pub colors: Vec<String>,
    pub furniture: Vec<String>,
    pub lighting: Vec<String>,
    pub decor: Vec<String>,
    pub layout: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_reports_all_fields() {
        let selection = Selection::default();
        assert_eq!(
            selection.missing_fields(),
            vec!["room type", "style", "color scheme", "budget"]
        );
        assert!(!selection.is_complete());
    }

    #[test]
    fn test_partial_selection_reports_remaining_fields() {
        let selection = Selection::new("Kitchen", "", "Earthy Tones", "");
        assert_eq!(selection.missing_fields(), vec!["style", "budget"]);
    }

    #[test]
    fn test_clear_resets_every_field() {
        let mut selection = Selection::new("Kitchen", "Modern", "Earthy Tones", "$15,000+");
        assert!(selection.is_complete());

        selection.clear();
        assert_eq!(selection, Selection::default());
    }
}
