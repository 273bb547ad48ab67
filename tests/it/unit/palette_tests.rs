//! Unit tests for palette generation.

use proptest::prelude::*;
use sheetchart::chart::{
    PaletteGenerator, PaletteMode, Rgba, base_palette_entry, deterministic_palette,
};
use sheetchart::constants::{BASE_PALETTE_LEN, BASE_PALETTE_RGB};

#[test]
fn test_first_base_color_is_blue() {
    let entry = base_palette_entry(0);
    assert_eq!(entry.background.to_string(), "rgba(54, 162, 235, 0.6)");
    assert_eq!(entry.border.to_string(), "rgba(54, 162, 235, 1)");
}

#[test]
fn test_deterministic_palette_is_repeatable() {
    let mut a = PaletteGenerator::seeded(1);
    let mut b = PaletteGenerator::seeded(2);
    assert_eq!(
        a.generate(12, PaletteMode::Deterministic),
        b.generate(12, PaletteMode::Deterministic)
    );
}

#[test]
fn test_randomized_entries_use_fixed_alphas() {
    let mut generator = PaletteGenerator::seeded(7);
    let palette = generator.generate(20, PaletteMode::Randomized);
    assert_eq!(palette.len(), 20);
    for entry in &palette {
        assert_eq!(entry.background.a, 0.7);
        assert_eq!(entry.border, entry.background.with_alpha(1.0));
    }
}

proptest! {
    #[test]
    fn deterministic_palette_cycles_base_colors(count in 0usize..64) {
        let palette = deterministic_palette(count);
        prop_assert_eq!(palette.len(), count);
        for (i, entry) in palette.iter().enumerate() {
            let (r, g, b) = BASE_PALETTE_RGB[i % BASE_PALETTE_LEN];
            prop_assert_eq!(entry.background, Rgba::new(r, g, b, 0.6));
            prop_assert_eq!(entry.border, Rgba::new(r, g, b, 1.0));
        }
    }
}
