use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn hero_parallax_is_centred_and_cycles_factors() {
    assert_eq!(hero_parallax(0.5, 0.5, 0), Offset::default());

    let first = hero_parallax(1.0, 1.0, 0);
    assert!(close(first.x, 7.5));
    assert!(close(first.y, 7.5));

    let third = hero_parallax(1.0, 0.0, 2);
    assert!(close(third.x, 22.5));
    assert!(close(third.y, -7.5));

    // index 3 wraps back to the first horizontal factor
    assert!(close(hero_parallax(1.0, 1.0, 3).x, 7.5));
}

#[test]
fn layer_parallax_alternates_direction() {
    let even = layer_parallax(1500.0, 1000.0, 0, false);
    let odd = layer_parallax(1500.0, 1000.0, 1, false);

    assert!(close(even, 100.0));
    assert!(close(odd, -100.0));
    assert!(close(layer_parallax(1500.0, 1000.0, 2, true), 90.0));
}

#[test]
fn staff_parallax_only_in_range() {
    assert_eq!(staff_parallax(0.0, 3000.0, 600.0, 800.0, 0), None);

    let offset = staff_parallax(2400.0, 3000.0, 600.0, 800.0, 1).expect("in range");
    // (2400 - 2200) * 0.1 * 0.07
    assert!(close(offset, 1.4));
}

#[test]
fn about_parallax_window() {
    assert_eq!(about_parallax(0.0, 1000.0, 0), None);
    assert_eq!(about_parallax(2000.0, 1000.0, 0), None);

    let o = about_parallax(1100.0, 1000.0, 1).expect("inside window");
    assert!(close(o.x, -7.0));
    assert!(close(o.y, 3.5));
}

#[test]
fn pointer_parallax_grows_with_index() {
    let section = Rect::new(0.0, 0.0, 1000.0, 500.0);

    let centre = about_pointer_parallax(&section, 500.0, 250.0, 3);
    assert!(close(centre.x, 0.0) && close(centre.y, 0.0));

    let corner0 = about_pointer_parallax(&section, 1000.0, 500.0, 0);
    let corner2 = about_pointer_parallax(&section, 1000.0, 500.0, 2);
    assert!(close(corner0.x, 7.5));
    assert!(corner2.x > corner0.x);
}

#[test]
fn tilt_leans_towards_pointer_up_to_max() {
    let card = Rect::new(100.0, 100.0, 200.0, 100.0);

    let centre = Tilt::compute(&TiltProfile::STAFF, &card, 200.0, 150.0);
    assert!(close(centre.rotate_x, 0.0) && close(centre.rotate_y, 0.0));
    assert!(close(centre.intensity, 1.0));
    assert!(close(centre.glare_x, 50.0));

    let right_edge = Tilt::compute(&TiltProfile::STAFF, &card, 300.0, 150.0);
    assert!(close(right_edge.rotate_y, 5.0));

    let top_edge = Tilt::compute(&TiltProfile::ABOUT, &card, 200.0, 100.0);
    assert!(close(top_edge.rotate_x, 8.0));

    let corner = Tilt::compute(&TiltProfile::ABOUT, &card, 300.0, 200.0);
    assert!(close(corner.intensity, 0.0));
}

#[test]
fn tilt_on_degenerate_card_is_neutral() {
    let tilt = Tilt::compute(&TiltProfile::STAFF, &Rect::default(), 10.0, 10.0);
    assert_eq!(tilt, Tilt::default());
}

#[test]
fn transforms_include_profile_lift() {
    let tilt = Tilt::default();

    assert!(tilt.transform(&TiltProfile::STAFF).ends_with("translateY(-5px)"));
    assert!(!tilt.transform(&TiltProfile::ABOUT).contains("translateY"));
    assert!(tilt.transform(&TiltProfile::ABOUT).starts_with("perspective(800px)"));
}

#[test]
fn ripple_is_centred_on_click() {
    let button = Rect::new(10.0, 20.0, 120.0, 40.0);
    let ripple = Ripple::at(&button, 70.0, 40.0);

    assert!(close(ripple.size, 120.0));
    assert!(close(ripple.left, 0.0));
    assert!(close(ripple.top, -40.0));
}
