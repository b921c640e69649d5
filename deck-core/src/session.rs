//! The swipe session: single owner of the deck, gesture state, the in-flight
//! exit and the gallery. Views read from it and feed pointer, button and
//! animation events back in.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, trace};

use crate::action::Action;
use crate::config::DeckConfig;
use crate::deck::Deck;
use crate::gallery::GalleryState;
use crate::gesture::{DragTransform, GestureRecognizer, Release};
use crate::profile::{self, Profile, ProfileId};

/// Identifies one exit animation. Completions carrying an older ticket are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitTicket(u64);

/// Which of the two racing completion paths fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    TransitionEnd,
    Timeout,
}

/// The front card's exit, between dispatch and removal.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingExit {
    pub ticket: ExitTicket,
    pub profile_id: ProfileId,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// Event from an untracked pointer, or a pointer-down that could not start
    /// a drag.
    Ignored,
    /// The card settled back without an action.
    Released,
    /// A swipe was recognised. The ticket is `None` when the dispatch itself
    /// was a no-op.
    Dispatched(Action, Option<ExitTicket>),
    GalleryOpened,
}

pub struct SwipeSession {
    config: DeckConfig,
    deck: Deck,
    gestures: GestureRecognizer,
    exit: Option<PendingExit>,
    next_ticket: u64,
    /// Batch tag of the last deal; strictly increasing so card ids never repeat.
    last_batch: Option<u64>,
    /// Bumped whenever the set of cards changes (deal or removal).
    revision: u64,
    gallery: GalleryState,
    rng: StdRng,
}

impl SwipeSession {
    /// Empty session seeded from the OS; call [`reset`](Self::reset) to deal.
    pub fn new(config: DeckConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    pub fn with_seed(config: DeckConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: DeckConfig, rng: StdRng) -> Self {
        Self {
            config,
            deck: Deck::default(),
            gestures: GestureRecognizer::new(),
            exit: None,
            next_ticket: 0,
            last_batch: None,
            revision: 0,
            gallery: GalleryState::default(),
            rng,
        }
    }

    pub fn config(&self) -> &DeckConfig {
        &self.config
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn front(&self) -> Option<&Profile> {
        self.deck.front()
    }

    pub fn is_animating(&self) -> bool {
        self.exit.is_some()
    }

    pub fn pending_exit(&self) -> Option<&PendingExit> {
        self.exit.as_ref()
    }

    /// Changes exactly when cards are dealt or removed; drags and gallery
    /// scrolling leave it alone.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    /// Live card offset while a drag is in progress.
    pub fn drag_transform(&self) -> Option<DragTransform> {
        self.gestures.drag_transform(&self.config)
    }

    pub fn gestures(&self) -> &GestureRecognizer {
        &self.gestures
    }

    /// Replace the deck with `deck_size` fresh profiles.
    pub fn reset(&mut self, now_ms: f64) {
        let count = self.config.deck_size;
        self.reset_with(count, now_ms);
    }

    /// Replace the deck with `count` fresh profiles. Any in-flight exit is
    /// abandoned; its late completion becomes a no-op.
    pub fn reset_with(&mut self, count: usize, now_ms: f64) {
        // Two deals in the same millisecond, or a clock that steps back,
        // still get a fresh batch.
        let clock = now_ms.max(0.0) as u64;
        let batch = match self.last_batch {
            Some(last) if clock <= last => last + 1,
            _ => clock,
        };
        self.last_batch = Some(batch);
        let profiles = profile::generate(&mut self.rng, count, batch);
        self.deck = Deck::new(profiles);
        self.exit = None;
        self.gestures = GestureRecognizer::new();
        self.revision += 1;
        info!("Dealt a fresh deck of {} profiles", self.deck.len());
    }

    /// Start the exit of the front card. No-op while another exit is running
    /// or when the deck is empty.
    pub fn dispatch(&mut self, action: Action) -> Option<ExitTicket> {
        if let Some(pending) = &self.exit {
            trace!(
                "Ignoring {} while {} is still exiting",
                action.label(),
                pending.profile_id
            );
            return None;
        }
        let profile_id = match self.deck.front() {
            Some(front) => front.id.clone(),
            None => {
                trace!("Ignoring {} on an empty deck", action.label());
                return None;
            }
        };

        let ticket = ExitTicket(self.next_ticket);
        self.next_ticket += 1;
        debug!("{} on {} ({:?})", action.label(), profile_id, ticket);

        self.gestures.clear_taps();
        self.exit = Some(PendingExit {
            ticket,
            profile_id,
            action,
        });
        Some(ticket)
    }

    /// Finish the exit identified by `ticket`. The first signal removes the
    /// front profile and returns it; the losing signal, and any ticket from an
    /// abandoned deck, gets `None`.
    pub fn complete_exit(&mut self, ticket: ExitTicket, signal: ExitSignal) -> Option<Profile> {
        match &self.exit {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                trace!("{:?} for {:?} arrived after completion", signal, ticket);
                return None;
            }
        }
        self.exit = None;
        let removed = self.deck.pop_front();
        if let Some(profile) = &removed {
            self.revision += 1;
            debug!(
                "Removed {} via {:?}, {} left",
                profile.id,
                signal,
                self.deck.len()
            );
        }
        removed
    }

    /// Begin a drag on the top card. Refused mid-exit, on an empty deck and
    /// while the gallery is showing.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) -> bool {
        if self.is_animating() || self.deck.is_empty() || self.gallery.is_open() {
            trace!("Pointer {} down ignored", pointer_id);
            return false;
        }
        self.gestures.pointer_down(pointer_id, x, y, now_ms);
        true
    }

    pub fn pointer_move(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<DragTransform> {
        self.gestures.pointer_move(pointer_id, x, y, &self.config)
    }

    pub fn pointer_up(&mut self, pointer_id: i32, now_ms: f64) -> GestureOutcome {
        match self.gestures.pointer_up(pointer_id, now_ms, &self.config) {
            Release::Ignored => GestureOutcome::Ignored,
            Release::Settled => GestureOutcome::Released,
            Release::Swipe(action) => GestureOutcome::Dispatched(action, self.dispatch(action)),
            Release::DoubleTap => {
                if self.open_gallery() {
                    GestureOutcome::GalleryOpened
                } else {
                    GestureOutcome::Released
                }
            }
        }
    }

    /// Cancellation is classified exactly like a release.
    pub fn pointer_cancel(&mut self, pointer_id: i32, now_ms: f64) -> GestureOutcome {
        self.pointer_up(pointer_id, now_ms)
    }

    /// Open the gallery for the front profile.
    pub fn open_gallery(&mut self) -> bool {
        match self.deck.front() {
            Some(front) => self.gallery.open(front),
            None => false,
        }
    }

    pub fn close_gallery(&mut self) {
        self.gallery.close();
    }

    pub fn gallery_scrolled(&mut self, scroll_left: f64, viewport_width: f64) -> usize {
        self.gallery.on_scroll(scroll_left, viewport_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(count: usize) -> SwipeSession {
        let mut s = SwipeSession::with_seed(DeckConfig::default(), 7);
        s.reset_with(count, 1_000.0);
        s
    }

    #[test]
    fn test_dispatch_removes_exactly_one() {
        let mut s = session(3);
        let ticket = s.dispatch(Action::Like).expect("front card exists");
        assert!(s.is_animating());
        assert_eq!(s.deck().len(), 3);

        assert!(s.complete_exit(ticket, ExitSignal::TransitionEnd).is_some());
        assert!(s.complete_exit(ticket, ExitSignal::Timeout).is_none());
        assert_eq!(s.deck().len(), 2);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_timeout_first_then_transition_is_noop() {
        let mut s = session(2);
        let first = s.front().map(|p| p.id.clone());
        let ticket = s.dispatch(Action::Reject).unwrap();
        let removed = s.complete_exit(ticket, ExitSignal::Timeout);
        assert_eq!(removed.map(|p| p.id), first);
        assert!(s.complete_exit(ticket, ExitSignal::TransitionEnd).is_none());
        assert_eq!(s.deck().len(), 1);
    }

    #[test]
    fn test_reentrant_dispatch_is_noop() {
        let mut s = session(3);
        let ticket = s.dispatch(Action::SuperLike).unwrap();
        assert!(s.dispatch(Action::Like).is_none());
        assert_eq!(s.pending_exit().map(|p| p.action), Some(Action::SuperLike));
        s.complete_exit(ticket, ExitSignal::Timeout);
        assert_eq!(s.deck().len(), 2);
    }

    #[test]
    fn test_dispatch_on_empty_deck() {
        let mut s = session(0);
        assert!(s.dispatch(Action::Like).is_none());
        assert_eq!(s.deck().len(), 0);
        assert!(!s.is_animating());
    }

    #[test]
    fn test_no_drag_during_exit() {
        let mut s = session(2);
        s.dispatch(Action::Like);
        assert!(!s.pointer_down(1, 0.0, 0.0, 0.0));
        assert!(s.drag_transform().is_none());
    }

    #[test]
    fn test_reset_abandons_in_flight_exit() {
        let mut s = session(4);
        let ticket = s.dispatch(Action::Like).unwrap();
        s.reset_with(12, 2_000.0);
        assert!(!s.is_animating());
        assert!(s.complete_exit(ticket, ExitSignal::TransitionEnd).is_none());
        assert_eq!(s.deck().len(), 12);
    }

    #[test]
    fn test_reset_uses_configured_size() {
        let mut s = SwipeSession::with_seed(DeckConfig::default(), 1);
        assert!(s.deck().is_empty());
        s.reset(5_000.0);
        assert_eq!(s.deck().len(), 12);
    }

    #[test]
    fn test_same_millisecond_deals_get_distinct_ids() {
        let mut s = session(12);
        let first: Vec<ProfileId> = s.deck().iter().map(|p| p.id.clone()).collect();

        s.reset_with(12, 1_000.0);
        let second: Vec<ProfileId> = s.deck().iter().map(|p| p.id.clone()).collect();
        assert!(second.iter().all(|id| !first.contains(id)));

        // Clock stepping backwards.
        s.reset_with(12, 10.0);
        assert!(s
            .deck()
            .iter()
            .all(|p| !first.contains(&p.id) && !second.contains(&p.id)));
    }

    #[test]
    fn test_revision_tracks_card_changes_only() {
        let mut s = session(3);
        let dealt = s.revision();

        s.pointer_down(1, 0.0, 0.0, 0.0);
        s.pointer_move(1, 30.0, 0.0);
        s.pointer_up(1, 400.0);
        assert!(s.open_gallery());
        s.gallery_scrolled(400.0, 400.0);
        s.close_gallery();
        let ticket = s.dispatch(Action::Like).unwrap();
        assert_eq!(s.revision(), dealt);

        s.complete_exit(ticket, ExitSignal::TransitionEnd);
        assert_eq!(s.revision(), dealt + 1);
        s.complete_exit(ticket, ExitSignal::Timeout);
        assert_eq!(s.revision(), dealt + 1);

        s.reset_with(3, 2_000.0);
        assert_eq!(s.revision(), dealt + 2);
    }

    #[test]
    fn test_cancel_behaves_like_release() {
        let mut s = session(2);
        assert!(s.pointer_down(4, 100.0, 100.0, 0.0));
        s.pointer_move(4, 20.0, 100.0);
        assert!(matches!(
            s.pointer_cancel(4, 500.0),
            GestureOutcome::Dispatched(Action::Reject, Some(_))
        ));
    }

    #[test]
    fn test_drag_transform_resets_after_release() {
        let mut s = session(1);
        s.pointer_down(1, 0.0, 0.0, 0.0);
        s.pointer_move(1, 30.0, 10.0);
        assert_eq!(s.drag_transform().map(|t| t.dx), Some(30.0));
        assert_eq!(s.pointer_up(1, 400.0), GestureOutcome::Released);
        assert!(s.drag_transform().is_none());
    }
}
