use super::*;

#[test]
fn landscape_image_fits_square_box() {
    let s = fit_within(600.0, 300.0, 300.0, 300.0).unwrap();
    assert_eq!(s, ScaledSize {
        width: 300.0,
        height: 150.0
    });
}

#[test]
fn portrait_image_fits_square_box() {
    let s = fit_within(300.0, 600.0, 300.0, 300.0).unwrap();
    assert_eq!(s, ScaledSize {
        width: 150.0,
        height: 300.0
    });
}

#[test]
fn small_images_upscale_to_touch_the_box() {
    let s = fit_within(10.0, 10.0, 70.0, 40.0).unwrap();
    assert_eq!(s, ScaledSize {
        width: 40.0,
        height: 40.0
    });
}

#[test]
fn aspect_is_preserved_and_box_is_touched() {
    let cases = [
        (123.0, 77.0, 300.0, 300.0),
        (1920.0, 1080.0, 300.0, 300.0),
        (7.0, 900.0, 42.0, 42.0),
        (50.0, 50.0, 10.0, 90.0),
    ];
    for (nw, nh, mw, mh) in cases {
        let s = fit_within(nw, nh, mw, mh).unwrap();
        assert!(s.width <= mw + 1e-9 && s.height <= mh + 1e-9);
        assert!(
            (s.width / s.height - nw / nh).abs() < 1e-9,
            "aspect drifted for {nw}x{nh}"
        );
        let touches_w = (s.width - mw).abs() < 1e-9;
        let touches_h = (s.height - mh).abs() < 1e-9;
        assert!(touches_w || touches_h, "no axis touched for {nw}x{nh}");
    }
}

#[test]
fn non_positive_inputs_are_contract_violations() {
    assert!(fit_within(0.0, 10.0, 10.0, 10.0).is_err());
    assert!(fit_within(10.0, -1.0, 10.0, 10.0).is_err());
    assert!(fit_within(10.0, 10.0, 0.0, 10.0).is_err());
    assert!(fit_within(10.0, 10.0, 10.0, 0.0).is_err());
}
