use swipedeck_core::*;

fn dealt(count: usize, seed: u64) -> SwipeSession {
    let mut session = SwipeSession::with_seed(DeckConfig::default(), seed);
    session.reset_with(count, 1_700_000_000_000.0);
    session
}

/// Press, drag by (`dx`, `dy`) and release `held_ms` later.
fn gesture(session: &mut SwipeSession, at_ms: f64, dx: f64, dy: f64, held_ms: f64) -> GestureOutcome {
    let pointer = 1;
    if !session.pointer_down(pointer, 200.0, 300.0, at_ms) {
        return GestureOutcome::Ignored;
    }
    if dx != 0.0 || dy != 0.0 {
        session.pointer_move(pointer, 200.0 + dx / 2.0, 300.0 + dy / 2.0);
        session.pointer_move(pointer, 200.0 + dx, 300.0 + dy);
    }
    session.pointer_up(pointer, at_ms + held_ms)
}

fn finish(session: &mut SwipeSession, outcome: GestureOutcome, signal: ExitSignal) -> Option<Profile> {
    match outcome {
        GestureOutcome::Dispatched(_, Some(ticket)) => session.complete_exit(ticket, signal),
        other => panic!("expected a dispatched exit, got {:?}", other),
    }
}

#[test]
fn test_swipes_map_to_actions_and_shrink_deck() {
    let mut s = dealt(5, 1);

    let left = gesture(&mut s, 0.0, -80.0, 0.0, 300.0);
    assert!(matches!(left, GestureOutcome::Dispatched(Action::Reject, Some(_))));
    finish(&mut s, left, ExitSignal::TransitionEnd);
    assert_eq!(s.deck().len(), 4);

    let right = gesture(&mut s, 1_000.0, 120.0, 30.0, 300.0);
    assert!(matches!(right, GestureOutcome::Dispatched(Action::Like, Some(_))));
    finish(&mut s, right, ExitSignal::Timeout);
    assert_eq!(s.deck().len(), 3);

    let up = gesture(&mut s, 2_000.0, 0.0, -70.0, 300.0);
    assert!(matches!(up, GestureOutcome::Dispatched(Action::SuperLike, Some(_))));
    finish(&mut s, up, ExitSignal::TransitionEnd);
    assert_eq!(s.deck().len(), 2);
}

#[test]
fn test_both_completion_signals_remove_once() {
    let mut s = dealt(3, 2);
    let ids: Vec<ProfileId> = s.deck().iter().map(|p| p.id.clone()).collect();

    let ticket = s.dispatch(Action::Like).unwrap();
    let first = s.complete_exit(ticket, ExitSignal::TransitionEnd);
    let second = s.complete_exit(ticket, ExitSignal::Timeout);

    assert_eq!(first.map(|p| p.id), Some(ids[0].clone()));
    assert!(second.is_none());
    assert_eq!(s.front().map(|p| p.id.clone()), Some(ids[1].clone()));
}

#[test]
fn test_buttons_on_empty_deck_are_noops() {
    let mut s = dealt(1, 3);
    let ticket = s.dispatch(Action::Reject).unwrap();
    s.complete_exit(ticket, ExitSignal::Timeout);
    assert!(s.deck().is_empty());

    for action in [Action::Reject, Action::Like, Action::SuperLike] {
        assert!(s.dispatch(action).is_none());
    }
    assert_eq!(s.deck().len(), 0);
    assert_eq!(gesture(&mut s, 0.0, -100.0, 0.0, 100.0), GestureOutcome::Ignored);
}

#[test]
fn test_double_tap_opens_gallery_once() {
    let mut s = dealt(2, 4);
    let front_images = s.front().unwrap().images.clone();

    assert_eq!(gesture(&mut s, 0.0, 3.0, -2.0, 80.0), GestureOutcome::Released);
    assert!(!s.gallery().is_open());

    assert_eq!(gesture(&mut s, 300.0, 0.0, 0.0, 60.0), GestureOutcome::GalleryOpened);
    assert!(s.gallery().is_open());
    assert_eq!(s.gallery().images(), front_images.as_slice());
    assert_eq!(s.gallery().dot_states().iter().filter(|d| **d).count(), 1);

    // Gallery open: the deck does not take new drags.
    assert_eq!(gesture(&mut s, 500.0, 0.0, 0.0, 60.0), GestureOutcome::Ignored);

    s.close_gallery();
    // Tracker was consumed by the double-tap, so one more tap is a single tap.
    assert_eq!(gesture(&mut s, 600.0, 0.0, 0.0, 60.0), GestureOutcome::Released);
    assert!(!s.gallery().is_open());
}

#[test]
fn test_isolated_taps_never_open_gallery() {
    let mut s = dealt(2, 5);
    for i in 0..5 {
        let outcome = gesture(&mut s, i as f64 * 1_000.0, 1.0, 1.0, 50.0);
        assert_eq!(outcome, GestureOutcome::Released);
    }
    assert!(!s.gallery().is_open());
}

#[test]
fn test_slow_press_is_not_a_tap() {
    let mut s = dealt(2, 6);
    assert_eq!(gesture(&mut s, 0.0, 0.0, 0.0, 300.0), GestureOutcome::Released);
    assert_eq!(gesture(&mut s, 350.0, 0.0, 0.0, 20.0), GestureOutcome::Released);
    assert!(!s.gallery().is_open());
}

#[test]
fn test_swipe_between_taps_breaks_double_tap() {
    let mut s = dealt(3, 7);
    gesture(&mut s, 0.0, 0.0, 0.0, 50.0);
    let swipe = gesture(&mut s, 100.0, 90.0, 0.0, 100.0);
    finish(&mut s, swipe, ExitSignal::Timeout);
    assert_eq!(gesture(&mut s, 250.0, 0.0, 0.0, 50.0), GestureOutcome::Released);
    assert!(!s.gallery().is_open());
}

#[test]
fn test_reset_deals_requested_count() {
    let mut s = dealt(3, 8);
    let old: Vec<ProfileId> = s.deck().iter().map(|p| p.id.clone()).collect();

    s.reset_with(12, 1_700_000_999_999.0);
    assert_eq!(s.deck().len(), 12);
    assert!(s.deck().iter().all(|p| !old.contains(&p.id)));
}

#[test]
fn test_gallery_scroll_moves_active_dot() {
    let mut s = dealt(1, 9);
    assert!(s.open_gallery());
    let count = s.gallery().images().len();
    let last = count - 1;

    assert_eq!(s.gallery_scrolled(last as f64 * 320.0, 320.0), last);
    let dots = s.gallery().dot_states();
    assert_eq!(dots.len(), count);
    for (i, active) in dots.iter().enumerate() {
        assert_eq!(*active, i == last);
    }
}

#[test]
fn test_drag_preview_follows_pointer() {
    let mut s = dealt(1, 10);
    assert!(s.pointer_down(9, 0.0, 0.0, 0.0));
    let t = s.pointer_move(9, 240.0, 40.0).unwrap();
    assert_eq!(t.rotation_deg, 12.0);
    assert_eq!(t.dy, 40.0);
    assert!(s.pointer_move(3, 10.0, 10.0).is_none());
    assert_eq!(s.drag_transform(), Some(t));
}
