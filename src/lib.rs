// Library interface for atrium
// This allows integration tests to access internal modules

pub mod design_assistant;
pub mod errors;
pub mod report;
pub mod ui;

// Re-export commonly used types
pub use design_assistant::{
    BudgetRange, ColorScheme, DesignStyle, RecommendationBundle, RecommendationEngine, RoomType,
    Selection,
};
pub use errors::AtriumError;
