use std::str::FromStr;

use crate::AtriumError;

/// Find the catalog entry whose label is exactly `value`.
fn parse_label<T: Copy>(
    all: &[T],
    label: fn(&T) -> &'static str,
    field: &'static str,
    value: &str,
) -> Result<T, AtriumError> {
    all.iter()
        .find(|option| label(*option) == value)
        .copied()
        .ok_or_else(|| AtriumError::UnknownOption {
            field,
            value: value.to_string(),
        })
}

/// Types of rooms the assistant can plan for.
///
/// The labels double as the lookup keys of the recommendation tables, so
/// `Display` must stay in sync with `RecommendationEngine`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    LivingRoom,
    Bedroom,
    Kitchen,
    Bathroom,
    DiningRoom,
    HomeOffice,
    KidsRoom,
    GuestRoom,
}

impl RoomType {
    pub const ALL: [RoomType; 8] = [
        RoomType::LivingRoom,
        RoomType::Bedroom,
        RoomType::Kitchen,
        RoomType::Bathroom,
        RoomType::DiningRoom,
        RoomType::HomeOffice,
        RoomType::KidsRoom,
        RoomType::GuestRoom,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RoomType::LivingRoom => "Living Room",
            RoomType::Bedroom => "Bedroom",
            RoomType::Kitchen => "Kitchen",
            RoomType::Bathroom => "Bathroom",
            RoomType::DiningRoom => "Dining Room",
            RoomType::HomeOffice => "Home Office",
            RoomType::KidsRoom => "Kids Room",
            RoomType::GuestRoom => "Guest Room",
        }
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RoomType {
    type Err = AtriumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "room type", s)
    }
}

/// Interior design styles shown in the style guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DesignStyle {
    Modern,
    Scandinavian,
    Industrial,
    Bohemian,
    Traditional,
    Minimalist,
    MidCenturyModern,
    Farmhouse,
    ArtDeco,
    Eclectic,
}

impl DesignStyle {
    pub const ALL: [DesignStyle; 10] = [
        DesignStyle::Modern,
        DesignStyle::Scandinavian,
        DesignStyle::Industrial,
        DesignStyle::Bohemian,
        DesignStyle::Traditional,
        DesignStyle::Minimalist,
        DesignStyle::MidCenturyModern,
        DesignStyle::Farmhouse,
        DesignStyle::ArtDeco,
        DesignStyle::Eclectic,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "Modern",
            DesignStyle::Scandinavian => "Scandinavian",
            DesignStyle::Industrial => "Industrial",
            DesignStyle::Bohemian => "Bohemian",
            DesignStyle::Traditional => "Traditional",
            DesignStyle::Minimalist => "Minimalist",
            DesignStyle::MidCenturyModern => "Mid-Century Modern",
            DesignStyle::Farmhouse => "Farmhouse",
            DesignStyle::ArtDeco => "Art Deco",
            DesignStyle::Eclectic => "Eclectic",
        }
    }

    /// One-line summary of the look and feel of the style.
    pub fn description(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "Clean lines, minimal clutter, neutral colors with bold accents",
            DesignStyle::Scandinavian => "Light woods, whites, cozy textiles, functional design",
            DesignStyle::Industrial => "Raw materials, metal accents, exposed brick, urban feel",
            DesignStyle::Bohemian => {
                "Eclectic mix, vibrant colors, layered textiles, global influences"
            }
            DesignStyle::Traditional => {
                "Classic furniture, rich colors, elegant details, timeless appeal"
            }
            DesignStyle::Minimalist => {
                "Less is more, clean spaces, neutral palette, functional pieces"
            }
            DesignStyle::MidCenturyModern => {
                "Retro furniture, bold patterns, warm woods, geometric shapes"
            }
            DesignStyle::Farmhouse => {
                "Rustic charm, natural materials, vintage pieces, cozy atmosphere"
            }
            DesignStyle::ArtDeco => {
                "Glamorous details, metallic finishes, bold geometry, luxury feel"
            }
            DesignStyle::Eclectic => {
                "Mix of styles, personal collections, creative combinations, unique character"
            }
        }
    }

    /// Materials and motifs that signal the style.
    pub fn key_elements(&self) -> &'static str {
        match self {
            DesignStyle::Modern => "Glass, steel, concrete, open floor plans",
            DesignStyle::Scandinavian => "Hygge, natural light, simple forms",
            DesignStyle::Industrial => "Metal, leather, dark colors, factory elements",
            DesignStyle::Bohemian => "Patterns, plants, vintage finds, artistic pieces",
            DesignStyle::Traditional => "Symmetry, rich fabrics, antiques, formal layouts",
            DesignStyle::Minimalist => "White spaces, hidden storage, quality over quantity",
            DesignStyle::MidCenturyModern => "Teak wood, bold colors, iconic furniture",
            DesignStyle::Farmhouse => "Shiplap, barn doors, mason jars, natural textures",
            DesignStyle::ArtDeco => "Gold accents, velvet, mirrors, dramatic lighting",
            DesignStyle::Eclectic => "Personal style, mixed periods, collected over time",
        }
    }
}

impl std::fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for DesignStyle {
    type Err = AtriumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "style", s)
    }
}

/// Named color palettes a user can pick from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    NeutralWarm,
    BoldVibrant,
    Monochromatic,
    EarthyTones,
    PastelSoft,
    BlackWhite,
    BlueWhite,
    GreenNatural,
}

impl ColorScheme {
    pub const ALL: [ColorScheme; 8] = [
        ColorScheme::NeutralWarm,
        ColorScheme::BoldVibrant,
        ColorScheme::Monochromatic,
        ColorScheme::EarthyTones,
        ColorScheme::PastelSoft,
        ColorScheme::BlackWhite,
        ColorScheme::BlueWhite,
        ColorScheme::GreenNatural,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::NeutralWarm => "Neutral & Warm",
            ColorScheme::BoldVibrant => "Bold & Vibrant",
            ColorScheme::Monochromatic => "Monochromatic",
            ColorScheme::EarthyTones => "Earthy Tones",
            ColorScheme::PastelSoft => "Pastel & Soft",
            ColorScheme::BlackWhite => "Black & White",
            ColorScheme::BlueWhite => "Blue & White",
            ColorScheme::GreenNatural => "Green & Natural",
        }
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ColorScheme {
    type Err = AtriumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "color scheme", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetRange {
    Under1k,
    From1kTo5k,
    From5kTo15k,
    Over15k,
}

impl BudgetRange {
    pub const ALL: [BudgetRange; 4] = [
        BudgetRange::Under1k,
        BudgetRange::From1kTo5k,
        BudgetRange::From5kTo15k,
        BudgetRange::Over15k,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            BudgetRange::Under1k => "Under $1,000",
            BudgetRange::From1kTo5k => "$1,000-$5,000",
            BudgetRange::From5kTo15k => "$5,000-$15,000",
            BudgetRange::Over15k => "$15,000+",
        }
    }
}

impl std::fmt::Display for BudgetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for BudgetRange {
    type Err = AtriumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(&Self::ALL, Self::label, "budget", s)
    }
}

/// General advice shown next to the room planner form.
pub const DESIGN_TIPS: [&str; 6] = [
    "Consider the room's natural light when choosing colors",
    "Measure your space before selecting furniture",
    "Mix textures and patterns for visual interest",
    "Leave some negative space - don't overcrowd",
    "Invest in key pieces that will last",
    "Add personal touches that reflect your personality",
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(RoomType::ALL.len(), 8);
        assert_eq!(DesignStyle::ALL.len(), 10);
        assert_eq!(ColorScheme::ALL.len(), 8);
        assert_eq!(BudgetRange::ALL.len(), 4);
    }

    #[test]
    fn test_labels_are_unique() {
        let rooms: HashSet<_> = RoomType::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(rooms.len(), RoomType::ALL.len());

        let styles: HashSet<_> = DesignStyle::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(styles.len(), DesignStyle::ALL.len());

        let schemes: HashSet<_> = ColorScheme::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(schemes.len(), ColorScheme::ALL.len());
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(RoomType::HomeOffice.to_string(), "Home Office");
        assert_eq!(DesignStyle::MidCenturyModern.to_string(), "Mid-Century Modern");
        assert_eq!(ColorScheme::PastelSoft.to_string(), "Pastel & Soft");
        assert_eq!(BudgetRange::From1kTo5k.to_string(), "$1,000-$5,000");
    }

    #[test]
    fn test_every_style_has_guide_text() {
        for style in DesignStyle::ALL {
            assert!(!style.description().is_empty(), "{style} has no description");
            assert!(!style.key_elements().is_empty(), "{style} has no key elements");
        }
        assert_eq!(
            DesignStyle::Scandinavian.key_elements(),
            "Hygge, natural light, simple forms"
        );
    }

    #[test]
    fn test_labels_parse_back_to_variants() {
        for room in RoomType::ALL {
            assert_eq!(room.label().parse::<RoomType>().unwrap(), room);
        }
        for style in DesignStyle::ALL {
            assert_eq!(style.label().parse::<DesignStyle>().unwrap(), style);
        }
        for scheme in ColorScheme::ALL {
            assert_eq!(scheme.label().parse::<ColorScheme>().unwrap(), scheme);
        }
        for budget in BudgetRange::ALL {
            assert_eq!(budget.label().parse::<BudgetRange>().unwrap(), budget);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_inexact_labels() {
        match "Attic".parse::<RoomType>() {
            Err(AtriumError::UnknownOption { field, value }) => {
                assert_eq!(field, "room type");
                assert_eq!(value, "Attic");
            }
            other => panic!("Expected UnknownOption, got {other:?}"),
        }
        assert!("bedroom".parse::<RoomType>().is_err());
        assert!("Pastel & Soft ".parse::<ColorScheme>().is_err());
        assert!("".parse::<BudgetRange>().is_err());
        assert_eq!(
            "Cyberpunk".parse::<DesignStyle>().unwrap_err().to_string(),
            "Unknown style: Cyberpunk"
        );
    }
}
