//! Integration tests for the deltae crates.
//!
//! End-to-end checks across crate boundaries: RGB through XYZ and Lab to
//! CIEDE2000, the published reference pairs, and palette generation driven
//! by configuration.

pub mod reference;

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use deltae_color::prelude::*;
    use deltae_color::SRGB_TO_XYZ;
    use deltae_palette::{LchFilter, PaletteConfig, PaletteGenerator};
    use deltae_transfer::srgb_eotf;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_rgb(rng: &mut StdRng) -> Rgb {
        Rgb::new(
            rng.gen_range(0.0..=255.0),
            rng.gen_range(0.0..=255.0),
            rng.gen_range(0.0..=255.0),
        )
    }

    /// Black and white through the whole chain
    #[test]
    fn test_pipeline_endpoints() {
        let black = xyz_to_lab(rgb_to_xyz(Rgb::BLACK), WhitePoint::D65);
        assert_abs_diff_eq!(black.l, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(black.a, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(black.b, 0.0, epsilon = 1e-9);

        let white = xyz_to_lab(rgb_to_xyz(Rgb::WHITE), WhitePoint::D65);
        assert_abs_diff_eq!(white.l, 100.0, epsilon = 1e-6);
        assert_abs_diff_eq!(white.a, 0.0, epsilon = 0.02);
        assert_abs_diff_eq!(white.b, 0.0, epsilon = 0.02);

        let de = ciede2000_default(black, white);
        assert!(de > 99.0 && de < 101.0, "black/white ΔE00 = {}", de);
    }

    /// rgb_to_xyz is the sRGB decode followed by the matrix
    #[test]
    fn test_pipeline_matches_manual_composition() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let rgb = random_rgb(&mut rng);
            let linear = rgb.to_array().map(|c| 100.0 * srgb_eotf(c / 255.0));
            let manual = SRGB_TO_XYZ.transform(linear);
            let xyz = rgb_to_xyz(rgb);
            assert_abs_diff_eq!(xyz.x, manual[0], epsilon = 1e-9);
            assert_abs_diff_eq!(xyz.y, manual[1], epsilon = 1e-9);
            assert_abs_diff_eq!(xyz.z, manual[2], epsilon = 1e-9);
        }
    }

    /// Lightness and distance from black both grow along the gray ramp
    #[test]
    fn test_gray_ramp() {
        let black = Rgb::BLACK.to_lab_d65();
        let mut prev_l = -1.0;
        let mut prev_de = -1.0;
        for v in 0..=255u8 {
            let lab = Rgb::from([v, v, v]).to_lab_d65();
            let de = ciede2000_default(black, lab);
            assert!(lab.l > prev_l, "L* not increasing at {}", v);
            assert!(de > prev_de, "ΔE00 from black not increasing at {}", v);
            prev_l = lab.l;
            prev_de = de;
        }
    }

    #[test]
    fn test_random_rgb_properties() {
        let mut rng = StdRng::seed_from_u64(2000);
        for _ in 0..10_000 {
            let c1 = random_rgb(&mut rng);
            let c2 = random_rgb(&mut rng);
            let lab1 = c1.to_lab_d65();
            let lab2 = c2.to_lab_d65();

            assert!(lab1.l >= -1e-9 && lab1.l <= 100.0 + 1e-6, "L* out of range for {}", c1);

            let d12 = delta_e_rgb(c1, c2);
            let d21 = delta_e_rgb(c2, c1);
            assert!(d12 >= 0.0);
            assert_abs_diff_eq!(d12, d21, epsilon = 1e-9);
            assert_abs_diff_eq!(delta_e_rgb(c1, c1), 0.0, epsilon = 1e-9);
            assert_eq!(d12, lab1.delta_e(lab2));
        }
    }

    #[test]
    fn test_weights_scale_lightness_only_pairs() {
        let a = Rgb::new(60.0, 60.0, 60.0).to_lab_d65();
        let b = Rgb::new(200.0, 200.0, 200.0).to_lab_d65();
        // Grays carry a tiny a*/b* from the four-digit matrix
        let unit = ciede2000(a, b, Weights::UNIT);
        let textile = ciede2000(a, b, Weights::TEXTILE);
        assert_abs_diff_eq!(textile, unit / 2.0, epsilon = 0.05);
    }

    #[test]
    fn test_checked_inputs() {
        assert!(Rgb::try_new(0.0, 128.0, 255.0).is_ok());
        assert!(Rgb::try_new(-1.0, 0.0, 0.0).is_err());
        assert!(WhitePoint::try_new(0.0, 100.0, 100.0).is_err());
        assert!(Weights::try_new(1.0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_value_types_yaml_roundtrip() {
        let lab = Rgb::new(12.0, 200.0, 97.0).to_lab(WhitePoint::D50);
        let yaml = serde_yaml::to_string(&lab).unwrap();
        let back: Lab = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, lab);
    }

    /// YAML config through the generator
    #[test]
    fn test_palette_from_yaml() {
        let config = PaletteConfig::from_yaml(
            "
filter:
  lightness: [25, 85]
  chroma: [30, 150]
seeds:
  - [255, 255, 255]
",
        )
        .unwrap();

        let mut generator = PaletteGenerator::from_grid(12).unwrap();
        let palette = generator.generate(&config, 12);
        assert_eq!(palette.len(), 12);

        for swatch in &palette {
            assert!(swatch.is_active(), "ran out of candidates: {}", swatch);
            assert!(config.filter.accepts(&swatch.lab), "{} outside filter", swatch);
        }

        // Picks are distinct and at least their recorded distance apart
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert!(a.rgb != b.rgb);
                assert!(a.lab.delta_e(b.lab) >= b.min_delta - 1e-9);
            }
        }
    }

    /// Plain config with a wrapping hue range
    #[test]
    fn test_palette_from_plain_hue_wrap() {
        let config = PaletteConfig::from_plain("0 100  20 150  330 30").unwrap();
        let expected = LchFilter {
            chroma: (20.0, 150.0),
            hue: (330.0, 30.0),
            ..LchFilter::ALL
        };
        assert_eq!(config.filter, expected);

        let mut generator = PaletteGenerator::from_grid(10).unwrap();
        for swatch in generator.generate(&config, 6) {
            let hue = swatch.lab.hue();
            assert!(hue >= 330.0 || hue <= 30.0, "{} has hue {}", swatch, hue);
        }
    }

    #[test]
    fn test_palette_is_reproducible() {
        let config = PaletteConfig::default();
        let mut generator = PaletteGenerator::from_grid(9).unwrap();
        let first = generator.generate(&config, 15);
        let second = generator.generate(&config, 15);
        assert_eq!(first, second);

        let colors = generator.candidates().iter().map(|s| s.rgb);
        let from_colors = PaletteGenerator::from_colors(colors).generate(&config, 15);
        assert_eq!(first, from_colors);
    }
}
