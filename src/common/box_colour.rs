use image::Rgb;
use serde::{Deserialize, Serialize};

/// Drawing colour assigned to each detection class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoxColour {
    Khaki,
    Fuchsia,
    Silver,
    RoyalBlue,
    Green,
    DarkOrange,
    Purple,
    Gold,
    Red,
    Aquamarine,
    Lime,
    AliceBlue,
    Sienna,
    Orchid,
    Tan,
    LightPink,
    Yellow,
    HotPink,
    OliveDrab,
    SandyBrown,
}

impl BoxColour {
    pub fn name(&self) -> &'static str {
        match self {
            BoxColour::Khaki => "Khaki",
            BoxColour::Fuchsia => "Fuchsia",
            BoxColour::Silver => "Silver",
            BoxColour::RoyalBlue => "RoyalBlue",
            BoxColour::Green => "Green",
            BoxColour::DarkOrange => "DarkOrange",
            BoxColour::Purple => "Purple",
            BoxColour::Gold => "Gold",
            BoxColour::Red => "Red",
            BoxColour::Aquamarine => "Aquamarine",
            BoxColour::Lime => "Lime",
            BoxColour::AliceBlue => "AliceBlue",
            BoxColour::Sienna => "Sienna",
            BoxColour::Orchid => "Orchid",
            BoxColour::Tan => "Tan",
            BoxColour::LightPink => "LightPink",
            BoxColour::Yellow => "Yellow",
            BoxColour::HotPink => "HotPink",
            BoxColour::OliveDrab => "OliveDrab",
            BoxColour::SandyBrown => "SandyBrown",
        }
    }

    pub fn rgb(&self) -> Rgb<u8> {
        match self {
            BoxColour::Khaki => Rgb([240, 230, 140]),
            BoxColour::Fuchsia => Rgb([255, 0, 255]),
            BoxColour::Silver => Rgb([192, 192, 192]),
            BoxColour::RoyalBlue => Rgb([65, 105, 225]),
            BoxColour::Green => Rgb([0, 128, 0]),
            BoxColour::DarkOrange => Rgb([255, 140, 0]),
            BoxColour::Purple => Rgb([128, 0, 128]),
            BoxColour::Gold => Rgb([255, 215, 0]),
            BoxColour::Red => Rgb([255, 0, 0]),
            BoxColour::Aquamarine => Rgb([127, 255, 212]),
            BoxColour::Lime => Rgb([0, 255, 0]),
            BoxColour::AliceBlue => Rgb([240, 248, 255]),
            BoxColour::Sienna => Rgb([160, 82, 45]),
            BoxColour::Orchid => Rgb([218, 112, 214]),
            BoxColour::Tan => Rgb([210, 180, 140]),
            BoxColour::LightPink => Rgb([255, 182, 193]),
            BoxColour::Yellow => Rgb([255, 255, 0]),
            BoxColour::HotPink => Rgb([255, 105, 180]),
            BoxColour::OliveDrab => Rgb([107, 142, 35]),
            BoxColour::SandyBrown => Rgb([244, 164, 96]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CLASS_COLOURS;
    use std::collections::HashSet;

    #[test]
    fn palette_entries_are_distinct() {
        let names: HashSet<_> = CLASS_COLOURS.iter().map(|c| c.name()).collect();
        let rgbs: HashSet<_> = CLASS_COLOURS.iter().map(|c| c.rgb().0).collect();
        assert_eq!(names.len(), CLASS_COLOURS.len());
        assert_eq!(rgbs.len(), CLASS_COLOURS.len());
    }

    #[test]
    fn person_is_tan() {
        assert_eq!(CLASS_COLOURS[14], BoxColour::Tan);
        assert_eq!(CLASS_COLOURS[14].rgb(), Rgb([210, 180, 140]));
    }
}
