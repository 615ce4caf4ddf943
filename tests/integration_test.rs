// Integration tests for the design assistant
//
// This test suite validates the complete workflow:
// 1. Build a selection from catalog labels
// 2. Generate recommendations through the engine
// 3. Drive the view state the way the window does
// 4. Render the result as a text or JSON report

use atrium::design_assistant::swatch::swatch_hex;
use atrium::report::{OutputFormat, write_recommendations};
use atrium::ui::{Tab, ViewState};
use atrium::{
    AtriumError, BudgetRange, ColorScheme, DesignStyle, RecommendationBundle,
    RecommendationEngine, RoomType, Selection,
};

fn all_selections() -> impl Iterator<Item = Selection> {
    RoomType::ALL.into_iter().flat_map(|room| {
        DesignStyle::ALL.into_iter().flat_map(move |style| {
            ColorScheme::ALL.into_iter().flat_map(move |scheme| {
                BudgetRange::ALL.into_iter().map(move |budget| {
                    Selection::new(room.label(), style.label(), scheme.label(), budget.label())
                })
            })
        })
    })
}

#[test]
fn test_every_catalog_combination_produces_a_full_bundle() {
    let engine = RecommendationEngine::new();
    let mut count = 0;

    for selection in all_selections() {
        let bundle = engine.generate(&selection).unwrap();
        assert_eq!(bundle.colors.len(), 4);
        assert!(!bundle.furniture.is_empty());
        assert_eq!(bundle.lighting.len(), 5);
        assert_eq!(bundle.decor.len(), 5);
        assert!(!bundle.layout.is_empty());
        count += 1;
    }

    assert_eq!(count, 8 * 10 * 8 * 4);
}

#[test]
fn test_bedroom_end_to_end() {
    let engine = RecommendationEngine::new();
    let mut state = ViewState::with_tab(Tab::RoomPlanner);
    state.selection = Selection::new(
        RoomType::Bedroom.label(),
        DesignStyle::Scandinavian.label(),
        ColorScheme::PastelSoft.label(),
        BudgetRange::From1kTo5k.label(),
    );

    state.submit(&engine).unwrap();
    assert_eq!(state.active_tab, Tab::Recommendations);

    let bundle = state.recommendations.clone().unwrap();
    assert_eq!(
        bundle.colors,
        vec!["Blush pink", "Sage green", "Lavender", "Butter yellow"]
    );
    assert_eq!(
        bundle.furniture,
        vec![
            "Platform bed",
            "Nightstands",
            "Dresser",
            "Reading chair",
            "Full-length mirror"
        ]
    );
    assert_eq!(bundle.layout.len(), 4);
    assert_eq!(bundle.layout[0], "Place bed away from direct sunlight");

    let swatches: Vec<String> = bundle.colors.iter().map(|c| swatch_hex(c)).collect();
    assert_eq!(swatches, vec!["#ec4899", "#10b981", "#6b7280", "#f59e0b"]);

    state.reset();
    assert_eq!(state.active_tab, Tab::RoomPlanner);
    assert!(state.recommendations.is_none());
    assert_eq!(state.selection, Selection::default());
}

#[test]
fn test_incomplete_selection_produces_no_bundle() {
    let engine = RecommendationEngine::new();
    let selection = Selection::new("Guest Room", "Farmhouse", "", "$15,000+");

    match engine.generate(&selection) {
        Err(AtriumError::IncompleteSelection { missing }) => {
            assert_eq!(missing, vec!["color scheme"]);
        }
        other => panic!("Expected IncompleteSelection, got {:?}", other),
    }
}

#[test]
fn test_json_report_round_trips_bundle() {
    let engine = RecommendationEngine::new();
    let selection = Selection::new("Home Office", "Minimalist", "Monochromatic", "Under $1,000");
    let bundle = engine.generate(&selection).unwrap();

    let mut out = Vec::new();
    write_recommendations(&mut out, &selection, &bundle, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let parsed: RecommendationBundle =
        serde_json::from_value(value["recommendations"].clone()).unwrap();
    assert_eq!(parsed, bundle);
    assert_eq!(
        parsed.layout,
        vec!["Consider functionality and flow in your layout"]
    );
}

#[test]
fn test_engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(RecommendationEngine::new());
    let expected = engine
        .generate(&Selection::new("Kitchen", "Modern", "Earthy Tones", "$5,000-$15,000"))
        .unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || {
                engine
                    .generate(&Selection::new(
                        "Kitchen",
                        "Modern",
                        "Earthy Tones",
                        "$5,000-$15,000",
                    ))
                    .unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
