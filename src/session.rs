use std::time::Duration;

use leptos::prelude::*;
use swipedeck_core::{
    Action, DeckConfig, DragTransform, ExitSignal, ExitTicket, GalleryState, PendingExit, Profile,
    ProfileId, SwipeSession,
};

/// Shared handle on the swipe session plus memoised projections the views
/// subscribe to, so a pointer move only re-renders what the drag touches.
#[derive(Clone, Copy)]
pub struct DeckContext {
    pub session: RwSignal<SwipeSession>,
    pub cards: Memo<Vec<Profile>>,
    pub front_id: Memo<Option<ProfileId>>,
    pub drag: Memo<Option<DragTransform>>,
    pub exit: Memo<Option<PendingExit>>,
    pub gallery: Memo<GalleryState>,
    /// Only flips on open/close; scrolling between photos leaves it alone.
    pub gallery_open: Memo<bool>,
    /// Deck revision; moves only when cards are dealt or removed.
    pub revision: Memo<u64>,
    /// Set while a fresh deck is being laid out.
    pub dealing: RwSignal<bool>,
}

impl DeckContext {
    pub fn new(config: DeckConfig) -> Self {
        let ctx = Self::from_session(RwSignal::new(SwipeSession::new(config)));
        ctx.shuffle();
        ctx
    }

    fn from_session(session: RwSignal<SwipeSession>) -> Self {
        let revision = Memo::new(move |_| session.with(|s| s.revision()));
        let gallery = Memo::new(move |_| session.with(|s| s.gallery().clone()));
        Self {
            session,
            cards: on_revision(session, revision, |s| s.deck().iter().cloned().collect()),
            front_id: Memo::new(move |_| session.with(|s| s.front().map(|p| p.id.clone()))),
            drag: Memo::new(move |_| session.with(|s| s.drag_transform())),
            exit: Memo::new(move |_| session.with(|s| s.pending_exit().cloned())),
            gallery,
            gallery_open: Memo::new(move |_| gallery.with(|g| g.is_open())),
            revision,
            dealing: RwSignal::new(false),
        }
    }

    /// Deal a fresh deck, replacing every card on screen.
    pub fn shuffle(self) {
        self.dealing.set(true);
        self.session.update(|s| s.reset(js_sys::Date::now()));
        request_animation_frame(move || self.dealing.set(false));
    }

    /// Start dismissing the front card and arm the fallback timer that races
    /// the card's `transitionend`.
    pub fn dispatch(self, action: Action) {
        if let Some(ticket) = self.session.try_update(|s| s.dispatch(action)).flatten() {
            self.arm_exit_timeout(ticket);
        }
    }

    pub fn arm_exit_timeout(self, ticket: ExitTicket) {
        let timeout = self
            .session
            .with_untracked(|s| u64::from(s.config().exit_timeout_ms));
        set_timeout(
            move || self.finish_exit(ticket, ExitSignal::Timeout),
            Duration::from_millis(timeout),
        );
    }

    pub fn finish_exit(self, ticket: ExitTicket, signal: ExitSignal) {
        let still_pending = self
            .session
            .with_untracked(|s| s.pending_exit().map(|p| p.ticket) == Some(ticket));
        if still_pending {
            self.session.update(|s| {
                s.complete_exit(ticket, signal);
            });
        }
    }

    pub fn close_gallery(self) {
        self.session.update(|s| s.close_gallery());
    }
}

/// Memo over `read` that re-runs only when the deck revision moves, so drag
/// frames and gallery scrolls never copy the deck.
fn on_revision<T>(
    session: RwSignal<SwipeSession>,
    revision: Memo<u64>,
    read: impl Fn(&SwipeSession) -> T + Send + Sync + 'static,
) -> Memo<T>
where
    T: PartialEq + Send + Sync + 'static,
{
    Memo::new(move |_| {
        revision.track();
        session.with_untracked(|s| read(s))
    })
}
