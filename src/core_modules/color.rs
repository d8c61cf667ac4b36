// THEORY:
// The `color` module holds the two "dumb" data containers the game is built
// on: a three-channel `Color` and a `NamedColorRange` that gives a human name
// to an open box in RGB space.
//
// Key architectural principles:
// 1.  **No ordering**: Colors are never ordered. The only relation between a
//     color and its bounds is the `in_range` predicate, which tests each
//     channel on its own. Two colors can be neither inside nor outside each
//     other, so a `PartialOrd` would lie; none is provided.
// 2.  **Open bounds**: Membership is strict on every channel. A pixel sitting
//     exactly on a bound does not belong to the range.
// 3.  **Display value**: Every range carries a `nominal` color, the value the
//     palette advertises for that name. It plays no part in matching.

pub mod color {
    use serde::{Deserialize, Serialize};

    pub type Channel = u8;

    /// A single pixel value with three 8-bit channels.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(from = "[Channel; 3]", into = "[Channel; 3]")]
    pub struct Color {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
    }

    impl Color {
        pub const fn new(red: Channel, green: Channel, blue: Channel) -> Self {
            Color { red, green, blue }
        }

        /// A gray pixel: the single intensity replicated into all three channels.
        pub const fn gray(intensity: Channel) -> Self {
            Color::new(intensity, intensity, intensity)
        }
    }

    impl From<[Channel; 3]> for Color {
        fn from([red, green, blue]: [Channel; 3]) -> Self {
            Color::new(red, green, blue)
        }
    }

    impl From<Color> for [Channel; 3] {
        fn from(color: Color) -> Self {
            [color.red, color.green, color.blue]
        }
    }

    /// Strict per-channel membership test: every channel of `color` must lie
    /// strictly between the matching channels of `lower` and `upper`.
    #[inline]
    pub fn in_range(color: Color, lower: Color, upper: Color) -> bool {
        color.red > lower.red
            && color.red < upper.red
            && color.green > lower.green
            && color.green < upper.green
            && color.blue > lower.blue
            && color.blue < upper.blue
    }

    /// A named, open box of RGB values.
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct NamedColorRange {
        /// The name shown to the player, e.g. "orange".
        pub name: String,
        /// Exclusive lower bound, channel by channel.
        pub lower: Color,
        /// Exclusive upper bound, channel by channel.
        pub upper: Color,
        /// The canonical display value for this name.
        pub nominal: Color,
    }

    impl NamedColorRange {
        pub fn new(name: impl Into<String>, lower: Color, nominal: Color, upper: Color) -> Self {
            Self {
                name: name.into(),
                lower,
                upper,
                nominal,
            }
        }

        #[inline]
        pub fn contains(&self, color: Color) -> bool {
            in_range(color, self.lower, self.upper)
        }

        /// A range is well formed when every lower channel is at most the upper one.
        pub fn is_well_formed(&self) -> bool {
            self.lower.red <= self.upper.red
                && self.lower.green <= self.upper.green
                && self.lower.blue <= self.upper.blue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::color::*;

    fn white() -> NamedColorRange {
        NamedColorRange::new(
            "white",
            Color::gray(204),
            Color::new(0, 0, 255),
            Color::gray(255),
        )
    }

    #[test]
    fn bounds_are_exclusive() {
        let range = white();
        assert!(!range.contains(Color::gray(204)));
        assert!(!range.contains(Color::gray(255)));
        assert!(range.contains(Color::gray(205)));
        assert!(range.contains(Color::gray(254)));
    }

    #[test]
    fn every_channel_must_match() {
        let range = white();
        assert!(!range.contains(Color::new(230, 230, 100)));
        assert!(!range.contains(Color::new(100, 230, 230)));
        assert!(!range.contains(Color::new(230, 100, 230)));
        assert!(range.contains(Color::new(210, 230, 250)));
    }

    #[test]
    fn in_range_is_not_an_ordering() {
        // Neither color is inside the other's box, yet they are not equal.
        let a = Color::new(10, 200, 10);
        let b = Color::new(200, 10, 200);
        assert!(!in_range(a, b, b));
        assert!(!in_range(b, a, a));
        assert_ne!(a, b);
    }

    #[test]
    fn degenerate_range_matches_nothing() {
        let black = NamedColorRange::new("black", Color::gray(0), Color::gray(0), Color::gray(10));
        assert!(black.is_well_formed());
        assert!(!black.contains(Color::gray(0)));
        assert!(black.contains(Color::gray(5)));

        let inverted =
            NamedColorRange::new("bad", Color::gray(50), Color::gray(0), Color::gray(10));
        assert!(!inverted.is_well_formed());
        assert!(!inverted.contains(Color::gray(30)));
    }

    #[test]
    fn color_converts_to_and_from_arrays() {
        let color = Color::from([1, 2, 3]);
        assert_eq!(color, Color::new(1, 2, 3));
        let back: [Channel; 3] = color.into();
        assert_eq!(back, [1, 2, 3]);
    }
}
