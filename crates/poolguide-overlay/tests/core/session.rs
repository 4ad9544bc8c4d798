use std::thread;

use poolguide_core::{
    intent_queue, GeometryProfile, HotkeyAction, Intent, KeyChord, MemoryProfileStore, Modifiers,
    Point, PointerEvent, ProfileError, ProfileStore, TableFrame,
};
use poolguide_overlay::{ChangeNotice, ManipulationState, OverlayMode, OverlaySession};

fn session() -> OverlaySession<MemoryProfileStore> {
    let profile =
        GeometryProfile::from_frame(TableFrame::new(Point::new(100.0, 100.0), 800.0, 400.0));
    OverlaySession::new(MemoryProfileStore::new(), profile)
}

fn editing_session() -> OverlaySession<MemoryProfileStore> {
    let mut s = session();
    s.toggle_editing();
    s.take_notices();
    s
}

fn press(x: f64, y: f64, modifiers: Modifiers) -> PointerEvent {
    PointerEvent::Press {
        position: Point::new(x, y),
        modifiers,
    }
}

fn move_to(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move {
        position: Point::new(x, y),
    }
}

fn release(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Release {
        position: Point::new(x, y),
    }
}

#[test]
fn test_starts_click_through_and_ignores_pointer() {
    let mut s = session();
    assert_eq!(
        s.mode(),
        OverlayMode {
            editing: false,
            visible: true
        }
    );

    let before = s.profile().clone();
    assert!(!s.handle_pointer(press(500.0, 300.0, Modifiers::SHIFT)).unwrap());
    assert!(!s.handle_pointer(move_to(600.0, 300.0)).unwrap());
    assert_eq!(s.state(), ManipulationState::Idle);
    assert_eq!(s.profile(), &before);
    assert_eq!(s.pointer(), Some(Point::new(600.0, 300.0)));
}

#[test]
fn test_drag_table_and_release_notifies() {
    let mut s = editing_session();
    s.handle_pointer(press(500.0, 300.0, Modifiers::SHIFT)).unwrap();
    assert!(s.handle_pointer(move_to(520.0, 310.0)).unwrap());
    assert!(s.take_notices().is_empty());

    assert!(s.handle_pointer(release(520.0, 310.0)).unwrap());
    assert_eq!(s.profile().frame.origin(), Point::new(120.0, 110.0));
    assert_eq!(s.take_notices(), vec![ChangeNotice::GeometryChanged]);
    assert_eq!(s.state(), ManipulationState::Idle);
}

#[test]
fn test_wheel_scale_notifies() {
    let mut s = editing_session();
    let changed = s
        .handle_pointer(PointerEvent::Wheel {
            steps: 4.0,
            modifiers: Modifiers::CTRL,
        })
        .unwrap();
    assert!(changed);
    assert!((s.profile().frame.scale() - 1.2).abs() < 1e-12);
    assert_eq!(s.take_notices(), vec![ChangeNotice::GeometryChanged]);
}

#[test]
fn test_leaving_editing_releases_drag() {
    let mut s = editing_session();
    s.handle_pointer(press(105.0, 100.0, Modifiers::ALT)).unwrap();
    assert_eq!(s.state(), ManipulationState::MovingPocket(0));

    s.toggle_editing();
    assert_eq!(s.state(), ManipulationState::Idle);
    let notices = s.take_notices();
    assert_eq!(notices[0], ChangeNotice::GeometryChanged);
    assert!(matches!(notices[1], ChangeNotice::ModeChanged(mode) if !mode.editing));
}

#[test]
fn test_save_and_load_round_trip() {
    let mut s = editing_session();
    s.profile_mut().snap_to_grid = true;
    s.profile_mut().frame.set_rotation(12.5);
    let saved = s.profile().clone();
    s.save("club").unwrap();
    assert_eq!(s.profile_name(), "club");

    s.profile_mut().frame.set_scale(3.0);
    s.reset_pockets();
    s.load("club").unwrap();

    assert_eq!(s.profile(), &saved);
    let notices = s.take_notices();
    assert!(notices.contains(&ChangeNotice::ProfileSaved("club".to_string())));
    assert!(notices.contains(&ChangeNotice::ProfileLoaded("club".to_string())));
}

#[test]
fn test_failed_load_leaves_profile_untouched() {
    let mut s = editing_session();
    s.handle_pointer(press(500.0, 300.0, Modifiers::SHIFT)).unwrap();
    s.handle_pointer(move_to(510.0, 300.0)).unwrap();
    let before = s.profile().clone();

    let err = s.load("missing").unwrap_err();
    assert!(matches!(err, ProfileError::NotFound { .. }));
    assert_eq!(s.profile(), &before);
    assert_eq!(s.profile_name(), "default");
    assert_eq!(s.state(), ManipulationState::MovingTable);
    assert!(matches!(
        s.take_notices().as_slice(),
        [ChangeNotice::StoreFailed { name, .. }] if name == "missing"
    ));
}

#[test]
fn test_save_and_load_intents_need_editing() {
    let mut s = session();
    s.apply(Intent::Save("ignored".to_string())).unwrap();
    assert!(s.store().is_empty());

    s.apply(Intent::ToggleEditing).unwrap();
    s.apply(Intent::Save("kept".to_string())).unwrap();
    assert_eq!(s.list_profiles().unwrap(), vec!["kept".to_string()]);
}

#[test]
fn test_hotkeys_resolve_through_keybindings() {
    let mut s = session();
    s.apply(Intent::Hotkey("F8".parse().unwrap())).unwrap();
    assert!(s.mode().editing);

    s.apply(Intent::Hotkey("ctrl+s".parse().unwrap())).unwrap();
    assert_eq!(s.list_profiles().unwrap(), vec!["default".to_string()]);

    s.take_notices();
    s.apply(Intent::Hotkey("Ctrl+O".parse().unwrap())).unwrap();
    assert_eq!(
        s.take_notices(),
        vec![ChangeNotice::LoadPickerRequested(vec!["default".to_string()])]
    );

    // unbound chords are ignored
    s.apply(Intent::Hotkey("ctrl+shift+q".parse().unwrap())).unwrap();
    assert!(s.take_notices().is_empty());
}

#[test]
fn test_custom_keybindings() {
    let mut bindings = std::collections::HashMap::new();
    bindings.insert(KeyChord::key("f2"), HotkeyAction::ToggleOverlay);
    let mut s = session().with_keybindings(bindings);

    s.apply(Intent::Hotkey(KeyChord::key("F8"))).unwrap();
    assert!(!s.mode().editing);
    s.apply(Intent::Hotkey(KeyChord::key("F2"))).unwrap();
    assert!(!s.mode().visible);
}

#[test]
fn test_hidden_overlay_draws_nothing() {
    let mut s = editing_session();
    s.handle_pointer(move_to(400.0, 300.0)).unwrap();
    assert!(!s.scene().unwrap().is_empty());

    s.toggle_visibility();
    assert!(s.scene().unwrap().is_empty());
}

#[test]
fn test_cue_ball_follows_table_until_pinned() {
    let mut s = editing_session();
    assert_eq!(s.cue_ball(), Point::new(300.0, 300.0));

    s.profile_mut().translate_rigid(50.0, 0.0);
    assert_eq!(s.cue_ball(), Point::new(350.0, 300.0));

    s.set_cue_ball(Some(Point::new(10.0, 10.0)));
    s.profile_mut().translate_rigid(50.0, 0.0);
    assert_eq!(s.cue_ball(), Point::new(10.0, 10.0));
}

#[test]
fn test_reset_during_pocket_drag() {
    let mut s = editing_session();
    let mut pockets = s.profile().pockets().to_vec();
    pockets.push(Point::new(500.0, 300.0));
    s.profile_mut().set_pockets(pockets);

    s.handle_pointer(press(500.0, 300.0, Modifiers::ALT)).unwrap();
    assert_eq!(s.state(), ManipulationState::MovingPocket(6));

    s.apply(Intent::ResetPockets).unwrap();
    assert_eq!(s.state(), ManipulationState::Idle);
    assert_eq!(s.profile().pockets().len(), 6);
    assert!(!s.handle_pointer(move_to(510.0, 300.0)).unwrap());
}

#[test]
fn test_intents_from_other_threads_apply_in_order() {
    let (sender, mut receiver) = intent_queue(64);
    let mut s = session();

    let producer = sender.clone();
    thread::spawn(move || {
        producer.send(Intent::ToggleEditing).unwrap();
        producer
            .send(Intent::Pointer(press(500.0, 300.0, Modifiers::SHIFT)))
            .unwrap();
        producer.send(Intent::Pointer(move_to(530.0, 300.0))).unwrap();
        producer.send(Intent::Pointer(release(530.0, 300.0))).unwrap();
        producer.send(Intent::Save("after-drag".to_string())).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(s.process(&mut receiver), 5);
    assert_eq!(s.profile().frame.origin(), Point::new(130.0, 100.0));
    let stored = s.store().load("after-drag").unwrap();
    assert_eq!(stored, *s.profile());
}

#[test]
fn test_failing_intent_does_not_stop_queue() {
    let (sender, mut receiver) = intent_queue(8);
    let mut s = editing_session();

    sender.send(Intent::Load("nope".to_string())).unwrap();
    sender.send(Intent::ToggleOverlay).unwrap();

    assert_eq!(s.process(&mut receiver), 2);
    assert!(!s.mode().visible);
}
