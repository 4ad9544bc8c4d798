use poolguide_core::data::table_frame::rotations_equivalent;
use poolguide_core::{GeometryError, GeometryProfile, Modifiers, Point, TableFrame};
use poolguide_overlay::{ManipulationController, ManipulationState, TableTransform};

fn profile_at_origin() -> GeometryProfile {
    GeometryProfile::from_frame(TableFrame::new(Point::new(0.0, 0.0), 800.0, 400.0))
}

fn rotate_gesture(profile: &mut GeometryProfile, from: Point, to: Point) {
    let mut controller = ManipulationController::new();
    controller.press(from, Modifiers::CTRL_ALT, profile).unwrap();
    controller.drag_to(to, profile).unwrap();
    assert!(controller.release());
}

#[test]
fn test_scale_gesture_pins_at_bounds() {
    let mut profile = profile_at_origin();
    let pivot = profile.frame.pivot();
    let mut controller = ManipulationController::new();

    controller
        .press(pivot.offset(10.0, 0.0), Modifiers::CTRL, &profile)
        .unwrap();
    for step in 1..20 {
        let distance = 10.0 * 2f64.powi(step);
        controller
            .drag_to(pivot.offset(distance, 0.0), &mut profile)
            .unwrap();
    }
    assert_eq!(profile.frame.scale(), 5.0);

    controller.release();
    controller
        .press(pivot.offset(1000.0, 0.0), Modifiers::CTRL, &profile)
        .unwrap();
    for step in 1..20 {
        let distance = 1000.0 / 2f64.powi(step);
        controller
            .drag_to(pivot.offset(distance, 0.0), &mut profile)
            .unwrap();
    }
    assert_eq!(profile.frame.scale(), 0.1);
}

#[test]
fn test_wheel_pins_at_bounds() {
    let mut profile = profile_at_origin();
    for _ in 0..100 {
        ManipulationController::wheel(5.0, Modifiers::CTRL, &mut profile);
    }
    assert_eq!(profile.frame.scale(), 5.0);
    for _ in 0..100 {
        ManipulationController::wheel(-5.0, Modifiers::CTRL, &mut profile);
    }
    assert_eq!(profile.frame.scale(), 0.1);
}

#[test]
fn test_three_quarter_turns_equal_one_three_quarter_turn() {
    let mut stepped = profile_at_origin();
    let pivot = stepped.frame.pivot();
    for _ in 0..3 {
        rotate_gesture(&mut stepped, pivot.offset(100.0, 0.0), pivot.offset(0.0, 100.0));
    }

    let mut single = profile_at_origin();
    let mut controller = ManipulationController::new();
    controller
        .press(pivot.offset(100.0, 0.0), Modifiers::CTRL_ALT, &single)
        .unwrap();
    for to in [
        pivot.offset(0.0, 100.0),
        pivot.offset(-100.0, 0.0),
        pivot.offset(0.0, -100.0),
    ] {
        controller.drag_to(to, &mut single).unwrap();
    }
    controller.release();

    assert!(rotations_equivalent(
        stepped.frame.rotation(),
        single.frame.rotation(),
        1e-9
    ));
    assert!(rotations_equivalent(stepped.frame.rotation(), 270.0, 1e-9));

    let a = TableTransform::new(&stepped.frame).unwrap();
    let b = TableTransform::new(&single.frame).unwrap();
    let sample = Point::new(37.0, 11.0);
    assert!(a.to_screen(sample).approx_eq(&b.to_screen(sample), 1e-9));
}

#[test]
fn test_snap_pocket_drag() {
    let mut profile = profile_at_origin();
    profile.snap_to_grid = true;
    let mut controller = ManipulationController::new();

    let state = controller
        .press(Point::new(5.0, 5.0), Modifiers::ALT, &profile)
        .unwrap();
    assert_eq!(state, ManipulationState::MovingPocket(0));

    controller
        .drag_to(Point::new(53.0, 77.0), &mut profile)
        .unwrap();
    assert_eq!(profile.pockets()[0], Point::new(50.0, 80.0));
}

#[test]
fn test_snap_pocket_drag_on_transformed_table() {
    let mut profile = GeometryProfile::from_frame(
        TableFrame::new(Point::new(0.0, 0.0), 800.0, 400.0)
            .with_scale(1.7)
            .with_rotation(33.0),
    );
    profile.snap_to_grid = true;
    let transform = TableTransform::new(&profile.frame).unwrap();
    let mut controller = ManipulationController::new();

    let press_at = transform.to_screen(profile.pockets()[4]);
    controller.press(press_at, Modifiers::ALT, &profile).unwrap();
    assert_eq!(controller.active_pocket(), Some(4));

    controller
        .drag_to(transform.to_screen(Point::new(53.0, 77.0)), &mut profile)
        .unwrap();
    assert!(profile.pockets()[4].approx_eq(&Point::new(50.0, 80.0), 1e-9));
}

#[test]
fn test_unsnapped_pocket_drag_truncates_to_pixels() {
    let mut profile = profile_at_origin();
    let mut controller = ManipulationController::new();
    controller
        .press(Point::new(0.0, 0.0), Modifiers::ALT, &profile)
        .unwrap();
    controller
        .drag_to(Point::new(53.5, 77.25), &mut profile)
        .unwrap();
    assert_eq!(profile.pockets()[0], Point::new(53.0, 77.0));
}

#[test]
fn test_table_drag_keeps_whole_pixels() {
    let mut profile = profile_at_origin();
    let pocket = profile.pockets()[2];
    let mut controller = ManipulationController::new();
    controller
        .press(Point::new(10.0, 10.0), Modifiers::SHIFT, &profile)
        .unwrap();

    controller.drag_to(Point::new(10.5, 10.0), &mut profile).unwrap();
    assert_eq!(profile.frame.origin().x.fract(), 0.0);

    for step in 2..=4 {
        let step = f64::from(step);
        controller
            .drag_to(Point::new(10.0 + 0.5 * step, 10.25 * step), &mut profile)
            .unwrap();
        let origin = profile.frame.origin();
        assert_eq!((origin.x.fract(), origin.y.fract()), (0.0, 0.0));
        assert!(profile.pockets().iter().all(|p| p.x.fract() == 0.0 && p.y.fract() == 0.0));
    }

    // Pointer moved (2, 31) in total
    controller.drag_to(Point::new(12.0, 41.0), &mut profile).unwrap();
    assert_eq!(profile.frame.origin(), Point::new(2.0, 31.0));
    assert_eq!(profile.pockets()[2], pocket.offset(2.0, 31.0));
}

#[test]
fn test_shift_alt_prefers_pocket_move() {
    let profile = profile_at_origin();
    let mut controller = ManipulationController::new();
    let modifiers = Modifiers {
        ctrl: false,
        alt: true,
        shift: true,
    };
    let state = controller
        .press(Point::new(2.0, 2.0), modifiers, &profile)
        .unwrap();
    assert_eq!(state, ManipulationState::MovingPocket(0));
    assert_eq!(controller.state(), ManipulationState::MovingPocket(0));
}

#[test]
fn test_press_during_drag_is_rejected() {
    let profile = profile_at_origin();
    let mut controller = ManipulationController::new();
    controller
        .press(Point::new(2.0, 2.0), Modifiers::ALT, &profile)
        .unwrap();
    let err = controller
        .press(Point::new(2.0, 2.0), Modifiers::SHIFT, &profile)
        .unwrap_err();
    assert!(matches!(err, GeometryError::InvalidTransition { .. }));
    assert_eq!(controller.state(), ManipulationState::MovingPocket(0));

    controller.release();
    let state = controller
        .press(Point::new(2.0, 2.0), Modifiers::SHIFT, &profile)
        .unwrap();
    assert_eq!(state, ManipulationState::MovingTable);
}

#[test]
fn test_table_move_keeps_pocket_count() {
    let mut profile = profile_at_origin();
    profile.set_pockets(vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]);
    let mut controller = ManipulationController::new();
    controller
        .press(Point::new(0.0, 0.0), Modifiers::SHIFT, &profile)
        .unwrap();
    controller
        .drag_to(Point::new(30.0, 40.0), &mut profile)
        .unwrap();
    assert_eq!(profile.pockets().len(), 2);
    assert_eq!(profile.pockets()[1], Point::new(50.0, 60.0));
}
