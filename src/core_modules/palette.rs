// THEORY:
// The `Palette` is the fixed list of colors the player can be asked to find.
// It is built once at startup and only ever read afterwards; the round state
// machine refers to entries by index so that "no previous round" can be
// expressed as the out-of-range index `len()`.

use crate::core_modules::color::color::{Color, NamedColorRange};
use crate::error::{GameError, Result};
use std::ops::Index;

/// Bounds and display values of the standard palette: (name, lower, nominal, upper).
const STANDARD_RANGES: [(&str, [u8; 3], [u8; 3], [u8; 3]); 15] = [
    ("black", [0, 0, 0], [0, 0, 0], [10, 10, 10]),
    ("grey", [89, 89, 89], [0, 0, 105], [119, 119, 119]),
    ("silver", [122, 122, 122], [0, 0, 149], [153, 153, 153]),
    ("white", [204, 204, 204], [0, 0, 255], [255, 255, 255]),
    ("red", [191, 0, 0], [0, 255, 255], [255, 38, 38]),
    ("brown", [99, 45, 45], [15, 170, 153], [163, 112, 46]),
    ("gold", [204, 164, 46], [22, 189, 212], [230, 193, 71]),
    ("orange", [218, 124, 0], [20, 255, 235], [255, 179, 33]),
    ("yellow", [213, 186, 0], [30, 255, 255], [217, 255, 32]),
    ("lime", [66, 82, 0], [38, 255, 110], [90, 135, 4]),
    ("green", [0, 217, 33], [60, 255, 255], [94, 255, 43]),
    ("cyan", [0, 217, 198], [90, 255, 255], [33, 230, 255]),
    ("blue", [33, 0, 217], [120, 255, 255], [43, 63, 255]),
    ("purple", [118, 0, 128], [150, 255, 128], [153, 21, 138]),
    ("violet", [186, 0, 213], [150, 255, 255], [255, 33, 217]),
];

/// An immutable, ordered table of named color ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    ranges: Vec<NamedColorRange>,
}

impl Palette {
    /// Builds a palette from custom ranges. An empty list is rejected.
    pub fn new(ranges: Vec<NamedColorRange>) -> Result<Self> {
        if ranges.is_empty() {
            return Err(GameError::EmptyPalette);
        }
        for range in ranges.iter().filter(|r| !r.is_well_formed()) {
            log::warn!("palette entry `{}` has inverted bounds and will never match", range.name);
        }
        Ok(Self { ranges })
    }

    /// The 15-color reference palette.
    pub fn standard() -> Self {
        let ranges = STANDARD_RANGES
            .iter()
            .map(|&(name, lower, nominal, upper)| {
                NamedColorRange::new(
                    name,
                    Color::from(lower),
                    Color::from(nominal),
                    Color::from(upper),
                )
            })
            .collect();
        Self { ranges }
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&NamedColorRange> {
        self.ranges.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedColorRange> {
        self.ranges.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ranges.iter().map(|r| r.name.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl Index<usize> for Palette {
    type Output = NamedColorRange;

    fn index(&self, index: usize) -> &Self::Output {
        &self.ranges[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_palette_has_fifteen_named_colors() {
        let palette = Palette::standard();
        assert_eq!(palette.len(), 15);
        assert_eq!(palette[0].name, "black");
        assert_eq!(palette[14].name, "violet");
        assert!(palette.get(15).is_none());
    }

    #[test]
    fn standard_entries_keep_bounds_and_nominal_apart() {
        let palette = Palette::standard();
        let grey = palette.iter().find(|r| r.name == "grey").expect("grey is in the palette");
        assert_eq!(grey.lower, Color::gray(89));
        assert_eq!(grey.upper, Color::gray(119));
        assert_eq!(grey.nominal, Color::new(0, 0, 105));
    }

    #[test]
    fn names_follow_table_order() {
        let palette = Palette::standard();
        let names: Vec<&str> = palette.names().take(4).collect();
        assert_eq!(names, ["black", "grey", "silver", "white"]);
    }

    #[test]
    fn empty_custom_palette_is_rejected() {
        assert!(matches!(Palette::new(Vec::new()), Err(GameError::EmptyPalette)));
    }

    #[test]
    fn custom_palette_keeps_its_entries() {
        let ranges = vec![
            NamedColorRange::new("dark", Color::gray(0), Color::gray(0), Color::gray(100)),
            NamedColorRange::new("light", Color::gray(150), Color::gray(255), Color::gray(255)),
        ];
        let palette = Palette::new(ranges.clone()).expect("two ranges form a palette");
        assert_eq!(palette.len(), 2);
        assert_eq!(palette[1], ranges[1]);
    }
}
