// THEORY:
// The `ColorPicker` chooses the next target color. Its one rule is that the
// player is never asked for the same color twice in a row.
//
// Key architectural principles:
// 1.  **Rejection Sampling**: Draw uniformly from the palette and redraw while the
//     draw equals the previous index. With at least two colors each draw succeeds
//     with probability >= 1/2, so the loop ends quickly.
// 2.  **Guarded at Construction**: A palette with fewer than two colors would make
//     the loop spin forever. Such a picker can't be built, so `pick_next` never
//     needs to check.
// 3.  **One Generator**: The picker owns a single generator, seeded once, for its
//     whole life. A fixed seed gives a reproducible sequence of targets.
// 4.  **Sentinel Friendly**: The out-of-range index `palette_size` is a valid
//     "previous" value. No draw can equal it, so the first pick is unconstrained.

use crate::error::{GameError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks palette indices without immediate repeats.
#[derive(Debug, Clone)]
pub struct ColorPicker<R = StdRng> {
    rng: R,
    palette_size: usize,
}

impl ColorPicker<StdRng> {
    /// A picker seeded once from the operating system.
    pub fn new(palette_size: usize) -> Result<Self> {
        Self::with_rng(palette_size, StdRng::from_os_rng())
    }

    /// A picker with a fixed seed, for reproducible games and tests.
    pub fn with_seed(palette_size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(palette_size, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ColorPicker<R> {
    pub fn with_rng(palette_size: usize, rng: R) -> Result<Self> {
        if palette_size <= 1 {
            return Err(GameError::DegeneratePaletteSize(palette_size));
        }
        Ok(Self { rng, palette_size })
    }

    pub fn palette_size(&self) -> usize {
        self.palette_size
    }

    /// The "no previous round" index.
    pub fn sentinel(&self) -> usize {
        self.palette_size
    }

    /// Uniform draw over `[0, palette_size)` that never equals `previous`.
    pub fn pick_next(&mut self, previous: usize) -> usize {
        loop {
            let index = self.rng.random_range(0..self.palette_size);
            if index != previous {
                return index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_palettes() {
        assert!(matches!(ColorPicker::new(0), Err(GameError::DegeneratePaletteSize(0))));
        assert!(matches!(ColorPicker::with_seed(1, 7), Err(GameError::DegeneratePaletteSize(1))));
        assert!(ColorPicker::with_seed(2, 7).is_ok());
    }

    #[test]
    fn never_repeats_the_previous_index() {
        let mut picker = ColorPicker::with_seed(15, 42).unwrap();
        let mut previous = picker.sentinel();
        for _ in 0..10_000 {
            let next = picker.pick_next(previous);
            assert_ne!(next, previous);
            assert!(next < 15);
            previous = next;
        }
    }

    #[test]
    fn two_colors_alternate() {
        let mut picker = ColorPicker::with_seed(2, 3).unwrap();
        let first = picker.pick_next(picker.sentinel());
        let mut previous = first;
        for _ in 0..100 {
            let next = picker.pick_next(previous);
            assert_eq!(next, 1 - previous);
            previous = next;
        }
    }

    #[test]
    fn sentinel_leaves_first_pick_unconstrained() {
        let mut picker = ColorPicker::with_seed(4, 11).unwrap();
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            seen[picker.pick_next(picker.sentinel())] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = ColorPicker::with_seed(15, 99).unwrap();
        let mut b = ColorPicker::with_seed(15, 99).unwrap();
        let (mut pa, mut pb) = (15, 15);
        for _ in 0..50 {
            pa = a.pick_next(pa);
            pb = b.pick_next(pb);
            assert_eq!(pa, pb);
        }
    }
}
