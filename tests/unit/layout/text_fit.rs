use super::*;

/// Deterministic measurer: 10px per character wide, ascent equal to the
/// font size, configurable left extent.
struct FakeMeasurer {
    left: f64,
}

impl TextMeasurer for FakeMeasurer {
    fn measure(&mut self, line: &str, font_size: f32) -> crate::CardResult<LineMetrics> {
        Ok(LineMetrics {
            right: 10.0 * line.chars().count() as f64 * f64::from(font_size) / 42.0,
            left: self.left,
            ascent: f64::from(font_size),
        })
    }
}

#[test]
fn fitted_block_stays_inside_the_padded_box() {
    let mut measurer = FakeMeasurer { left: 0.0 };
    let line_sets: &[&[&str]] = &[
        &["hello"],
        &["a somewhat longer headline", "short"],
        &["one", "two", "three", "four"],
        &["x"],
    ];

    for lines in line_sets {
        let fit = fit_text_block(lines, 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();

        assert_eq!(fit.origin, Point::new(10.0, 10.0));
        for (line, &baseline) in lines.iter().zip(&fit.baselines) {
            let right = fit.origin.x + 10.0 * line.chars().count() as f64 * fit.scale;
            assert!(right <= 390.0 + 1e-6, "line {line:?} exceeds right bound");
            let top = baseline - fit.line_advance;
            assert!(top >= 10.0 - 1e-6, "line {line:?} exceeds top bound");
            assert!(baseline <= 190.0 + 1e-6, "line {line:?} exceeds bottom bound");
        }
    }
}

#[test]
fn scale_is_the_minimum_of_both_axes() {
    let mut measurer = FakeMeasurer { left: 0.0 };

    // One short line: the vertical axis constrains. block_h = 42,
    // vscale = 180/42, hscale = 380/50.
    let fit = fit_text_block(&["hello"], 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();
    assert!((fit.scale - 180.0 / 42.0).abs() < 1e-9);
    assert_eq!(fit.font_size, 180.0);

    // One long line: the horizontal axis constrains.
    let long = "a headline wide enough to hit the horizontal limit";
    let fit = fit_text_block(&[long], 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();
    let right = 10.0 * long.chars().count() as f64;
    assert!((fit.scale - 380.0 / right).abs() < 1e-9);
}

#[test]
fn font_size_is_floored() {
    let mut measurer = FakeMeasurer { left: 0.0 };
    let fit = fit_text_block(&["floor me"], 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();
    assert_eq!(fit.font_size, fit.font_size.floor());
    assert!(f64::from(fit.font_size) <= fit.scale * 42.0);
}

#[test]
fn baselines_advance_with_line_spacing() {
    let mut measurer = FakeMeasurer { left: 0.0 };
    let fit = fit_text_block(&["aa", "bb", "cc"], 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();

    assert_eq!(fit.baselines.len(), 3);
    assert!((fit.baselines[0] - (10.0 + fit.line_advance)).abs() < 1e-9);
    let step = fit.baselines[1] - fit.baselines[0];
    assert!((step - fit.line_advance * 1.3).abs() < 1e-9);
    assert!((fit.baselines[2] - fit.baselines[1] - step).abs() < 1e-9);
}

#[test]
fn negative_left_extent_shifts_the_origin() {
    let mut measurer = FakeMeasurer { left: -2.0 };
    let fit = fit_text_block(&["overhang"], 400.0, 200.0, 10.0, 42.0, &mut measurer).unwrap();
    assert!((fit.origin.x - (10.0 - 2.0 * fit.scale)).abs() < 1e-9);
    assert_eq!(fit.origin.y, 10.0);
}

#[test]
fn degenerate_inputs_are_rejected() {
    let mut measurer = FakeMeasurer { left: 0.0 };
    assert!(fit_text_block(&[], 400.0, 200.0, 10.0, 42.0, &mut measurer).is_err());
    assert!(fit_text_block(&["x"], 0.0, 200.0, 10.0, 42.0, &mut measurer).is_err());
    assert!(fit_text_block(&["x"], 400.0, 200.0, -1.0, 42.0, &mut measurer).is_err());
    assert!(fit_text_block(&["x"], 400.0, 200.0, 10.0, 0.0, &mut measurer).is_err());
    // Lines with no measurable ink make the fit ill-defined.
    assert!(fit_text_block(&["", ""], 400.0, 200.0, 10.0, 42.0, &mut measurer).is_err());
}
