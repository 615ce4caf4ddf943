use std::collections::HashMap;

use log::debug;

use super::{ColorScheme, RecommendationBundle, RoomType, Selection};
use crate::AtriumError;

type Table = HashMap<&'static str, &'static [&'static str]>;

const FALLBACK_COLORS: &[&str] = &["White", "Gray", "Beige", "Black"];
const FALLBACK_FURNITURE: &[&str] = &["Essential furniture pieces for your space"];
const FALLBACK_LAYOUT: &[&str] = &["Consider functionality and flow in your layout"];

const LIGHTING_TIPS: &[&str] = &[
    "Layer different types of lighting (ambient, task, accent)",
    "Consider natural light patterns throughout the day",
    "Use warm white bulbs (2700K-3000K) for cozy spaces",
    "Add dimmer switches for flexibility",
    "Include table lamps for ambient lighting",
];

const DECOR_TIPS: &[&str] = &[
    "Add plants for natural elements and air purification",
    "Use throw pillows and blankets for texture and color",
    "Incorporate artwork that reflects your personality",
    "Add mirrors to enhance natural light and space",
    "Include personal items and meaningful objects",
];

/// Engine that maps a [`Selection`] to design recommendations.
///
/// Colors are keyed by color scheme; furniture and layout by room type.
/// Lighting and decor advice is the same for every selection. Keys missing
/// from a table resolve to a generic fallback, so every lookup is total.
///
/// The tables are built once and never mutated, which makes a shared
/// engine safe to use from several threads.
pub struct RecommendationEngine {
    color_map: Table,
    furniture_map: Table,
    layout_map: Table,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationEngine {
    /// Create a new RecommendationEngine with all lookup tables populated.
    pub fn new() -> Self {
        Self {
            color_map: Self::build_color_map(),
            furniture_map: Self::build_furniture_map(),
            layout_map: Self::build_layout_map(),
        }
    }

    /// Produce the full recommendation bundle for a selection.
    ///
    /// Fails with [`AtriumError::IncompleteSelection`] when any of the four
    /// fields is empty; no partial bundle is returned in that case.
    pub fn generate(&self, selection: &Selection) -> Result<RecommendationBundle, AtriumError> {
        let missing = selection.missing_fields();
        if !missing.is_empty() {
            return Err(AtriumError::IncompleteSelection { missing });
        }

        debug!(
            "Generating recommendations for {} / {} / {} / {}",
            selection.room_type, selection.style, selection.color_scheme, selection.budget
        );

        Ok(RecommendationBundle {
            colors: self.colors_for(&selection.color_scheme),
            furniture: self.furniture_for(&selection.room_type),
            lighting: self.lighting_for(&selection.room_type, &selection.style),
            decor: self.decor_for(&selection.style, &selection.color_scheme),
            layout: self.layout_for(&selection.room_type),
        })
    }

    /// The four colors of a named scheme, or a neutral default palette.
    pub fn colors_for(&self, color_scheme: &str) -> Vec<String> {
        Self::lookup(&self.color_map, color_scheme, FALLBACK_COLORS)
    }

    /// Key furniture pieces for a room type.
    pub fn furniture_for(&self, room_type: &str) -> Vec<String> {
        Self::lookup(&self.furniture_map, room_type, FALLBACK_FURNITURE)
    }

    /// General lighting advice. Identical for every room and style.
    pub fn lighting_for(&self, _room_type: &str, _style: &str) -> Vec<String> {
        to_owned_list(LIGHTING_TIPS)
    }

    /// General decor advice. Identical for every style and color scheme.
    pub fn decor_for(&self, _style: &str, _color_scheme: &str) -> Vec<String> {
        to_owned_list(DECOR_TIPS)
    }

    pub fn layout_for(&self, room_type: &str) -> Vec<String> {
        Self::lookup(&self.layout_map, room_type, FALLBACK_LAYOUT)
    }

    fn lookup(table: &Table, key: &str, fallback: &'static [&'static str]) -> Vec<String> {
        match table.get(key) {
            Some(items) => to_owned_list(items),
            None => {
                debug!("No table entry for '{}', using fallback", key);
                to_owned_list(fallback)
            }
        }
    }

    fn build_color_map() -> Table {
        let mut map: Table = HashMap::new();
        map.insert(
            ColorScheme::NeutralWarm.label(),
            &["Warm white", "Beige", "Soft gray", "Cream"],
        );
        map.insert(
            ColorScheme::BoldVibrant.label(),
            &["Deep teal", "Mustard yellow", "Coral", "Navy blue"],
        );
        map.insert(
            ColorScheme::Monochromatic.label(),
            &["Charcoal", "Medium gray", "Light gray", "White"],
        );
        map.insert(
            ColorScheme::EarthyTones.label(),
            &["Terracotta", "Forest green", "Warm brown", "Sand"],
        );
        map.insert(
            ColorScheme::PastelSoft.label(),
            &["Blush pink", "Sage green", "Lavender", "Butter yellow"],
        );
        map.insert(
            ColorScheme::BlackWhite.label(),
            &["Pure white", "Charcoal black", "Light gray", "Cream"],
        );
        map.insert(
            ColorScheme::BlueWhite.label(),
            &["Navy blue", "Sky blue", "Crisp white", "Light blue"],
        );
        map.insert(
            ColorScheme::GreenNatural.label(),
            &["Forest green", "Sage", "Natural wood", "Cream white"],
        );
        map
    }

    // Kids Room and Guest Room have no entry and get the fallback.
    fn build_furniture_map() -> Table {
        let mut map: Table = HashMap::new();
        map.insert(
            RoomType::LivingRoom.label(),
            &[
                "Comfortable sofa",
                "Coffee table",
                "Accent chairs",
                "Entertainment unit",
                "Area rug",
            ],
        );
        map.insert(
            RoomType::Bedroom.label(),
            &[
                "Platform bed",
                "Nightstands",
                "Dresser",
                "Reading chair",
                "Full-length mirror",
            ],
        );
        map.insert(
            RoomType::Kitchen.label(),
            &[
                "Kitchen island",
                "Bar stools",
                "Pendant lighting",
                "Open shelving",
                "Dining table",
            ],
        );
        map.insert(
            RoomType::Bathroom.label(),
            &[
                "Vanity cabinet",
                "Mirror with lighting",
                "Storage baskets",
                "Shower curtain",
                "Bath mat",
            ],
        );
        map.insert(
            RoomType::DiningRoom.label(),
            &[
                "Dining table",
                "Dining chairs",
                "Sideboard",
                "Chandelier",
                "Area rug",
            ],
        );
        map.insert(
            RoomType::HomeOffice.label(),
            &[
                "Ergonomic desk",
                "Office chair",
                "Bookshelf",
                "Task lighting",
                "Storage solutions",
            ],
        );
        map
    }

    fn build_layout_map() -> Table {
        let mut map: Table = HashMap::new();
        map.insert(
            RoomType::LivingRoom.label(),
            &[
                "Create conversation areas with furniture groupings",
                "Ensure clear pathways through the space",
                "Position seating to face each other or the focal point",
                "Leave 18 inches between sofa and coffee table",
            ],
        );
        map.insert(
            RoomType::Bedroom.label(),
            &[
                "Place bed away from direct sunlight",
                "Ensure bedside tables are within arm's reach",
                "Create a reading nook if space allows",
                "Keep pathways clear around the bed",
            ],
        );
        map.insert(
            RoomType::Kitchen.label(),
            &[
                "Follow the work triangle principle (sink, stove, fridge)",
                "Ensure adequate counter space for food prep",
                "Keep frequently used items within easy reach",
                "Consider traffic flow through the kitchen",
            ],
        );
        map
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}
