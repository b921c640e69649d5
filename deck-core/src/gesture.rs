//! Pointer gesture recognition for the top card.
//!
//! A pointer session runs `Idle -> Dragging -> Idle`. On release the final
//! offset and duration are classified into a swipe (one of the three actions),
//! a candidate tap, or a plain drag that settles back. Candidate taps feed a
//! [`TapTracker`] that survives across pointer sessions and reports double-taps.

use tracing::{debug, trace};

use crate::action::Action;
use crate::config::DeckConfig;

/// Live state of the single tracked pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureSession {
    pub pointer_id: i32,
    pub start_x: f64,
    pub start_y: f64,
    pub dx: f64,
    pub dy: f64,
    pub started_at_ms: f64,
}

/// Visual offset of the card while it follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTransform {
    pub dx: f64,
    pub dy: f64,
    pub rotation_deg: f64,
}

impl DragTransform {
    pub fn new(dx: f64, dy: f64, config: &DeckConfig) -> Self {
        let rotation_deg = if dx == 0.0 {
            0.0
        } else {
            dx.signum() * (dx.abs() / config.rotation_divisor).min(config.max_rotation_deg)
        };
        Self { dx, dy, rotation_deg }
    }

    /// Value for the card's `transform` style.
    pub fn css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            self.dx, self.dy, self.rotation_deg
        )
    }
}

/// Classification of a finished pointer session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Swipe(Action),
    /// Small and quick enough to count towards a double-tap.
    Tap,
    /// Below the swipe threshold but too long or too far for a tap.
    Drag,
}

/// Deterministic classification from the final offset and press duration.
pub fn classify(dx: f64, dy: f64, duration_ms: f64, config: &DeckConfig) -> Gesture {
    let threshold = config.swipe_threshold_px;

    if dx.abs() >= threshold && dx.abs() >= dy.abs() {
        return Gesture::Swipe(if dx < 0.0 { Action::Reject } else { Action::Like });
    }
    if dy <= -threshold {
        return Gesture::Swipe(Action::SuperLike);
    }

    let tolerance = config.tap_move_tolerance_px;
    let moved = dx.abs() > tolerance || dy.abs() > tolerance;
    if !moved && duration_ms < config.tap_max_duration_ms {
        Gesture::Tap
    } else {
        Gesture::Drag
    }
}

/// Remembers the last candidate tap for double-tap detection.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    last_tap_ms: Option<f64>,
}

impl TapTracker {
    /// Record a candidate tap at `now_ms`. Returns `true` when it completes a
    /// double-tap, in which case the tracker is cleared; otherwise this tap
    /// becomes the pending one.
    pub fn register(&mut self, now_ms: f64, window_ms: f64) -> bool {
        match self.last_tap_ms {
            Some(last) if now_ms - last <= window_ms => {
                self.last_tap_ms = None;
                true
            }
            _ => {
                self.last_tap_ms = Some(now_ms);
                false
            }
        }
    }

    pub fn clear(&mut self) {
        self.last_tap_ms = None;
    }

    pub fn pending(&self) -> Option<f64> {
        self.last_tap_ms
    }
}

/// What a pointer release amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Not the captured pointer, or no session in progress.
    Ignored,
    Swipe(Action),
    DoubleTap,
    /// The card settles back; possibly a single tap was remembered.
    Settled,
}

#[derive(Debug, Clone, Default)]
pub struct GestureRecognizer {
    session: Option<GestureSession>,
    taps: TapTracker,
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&GestureSession> {
        self.session.as_ref()
    }

    pub fn taps(&self) -> &TapTracker {
        &self.taps
    }

    pub fn clear_taps(&mut self) {
        self.taps.clear();
    }

    /// Start tracking `pointer_id`. A second pointer replaces the first.
    pub fn pointer_down(&mut self, pointer_id: i32, x: f64, y: f64, now_ms: f64) {
        if let Some(previous) = &self.session {
            trace!(
                "Pointer {} replaces active pointer {}",
                pointer_id,
                previous.pointer_id
            );
        }
        self.session = Some(GestureSession {
            pointer_id,
            start_x: x,
            start_y: y,
            dx: 0.0,
            dy: 0.0,
            started_at_ms: now_ms,
        });
    }

    /// Update the offset for the captured pointer; moves from any other pointer
    /// are dropped.
    pub fn pointer_move(
        &mut self,
        pointer_id: i32,
        x: f64,
        y: f64,
        config: &DeckConfig,
    ) -> Option<DragTransform> {
        let session = self.session.as_mut()?;
        if session.pointer_id != pointer_id {
            trace!("Ignoring move from stale pointer {}", pointer_id);
            return None;
        }
        session.dx = x - session.start_x;
        session.dy = y - session.start_y;
        Some(DragTransform::new(session.dx, session.dy, config))
    }

    /// End the session for `pointer_id` using the offset of the last move.
    /// Pointer-cancel goes through here too.
    pub fn pointer_up(&mut self, pointer_id: i32, now_ms: f64, config: &DeckConfig) -> Release {
        let session = match self.session.take() {
            Some(s) if s.pointer_id == pointer_id => s,
            other => {
                self.session = other;
                trace!("Ignoring release from untracked pointer {}", pointer_id);
                return Release::Ignored;
            }
        };

        let duration = now_ms - session.started_at_ms;
        let gesture = classify(session.dx, session.dy, duration, config);
        debug!(
            "Pointer {} released: dx={:.1} dy={:.1} after {:.0}ms -> {:?}",
            pointer_id, session.dx, session.dy, duration, gesture
        );

        match gesture {
            Gesture::Swipe(action) => {
                self.taps.clear();
                Release::Swipe(action)
            }
            Gesture::Tap => {
                if self.taps.register(now_ms, config.double_tap_window_ms) {
                    Release::DoubleTap
                } else {
                    Release::Settled
                }
            }
            // A slow or wandering press leaves any pending tap untouched.
            Gesture::Drag => Release::Settled,
        }
    }

    pub fn drag_transform(&self, config: &DeckConfig) -> Option<DragTransform> {
        self.session
            .as_ref()
            .map(|s| DragTransform::new(s.dx, s.dy, config))
    }
}
