//! Fire-once reveal marker for sections entering the viewport.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::Cell;

/// Element that can receive its permanent reveal marker.
pub trait RevealTarget {
    fn mark_visible(&self);
}

/// Result of feeding one intersection signal to a [`Reveal`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStep {
    /// Not intersecting yet; keep observing.
    Pending,
    /// Marker applied by this signal; the caller should stop observing.
    Revealed,
    /// Marker was already applied earlier; nothing changes.
    AlreadyRevealed,
}

/// One observed section.
pub struct Reveal<T> {
    target: T,
    revealed: Cell<bool>,
}

impl<T: RevealTarget> Reveal<T> {
    pub fn new(target: T) -> Self {
        Self { target, revealed: Cell::new(false) }
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed.get()
    }

    /// Feed an "is intersecting now" signal. The marker is never removed.
    pub fn on_intersection(&self, is_intersecting: bool) -> RevealStep {
        if self.revealed.get() {
            return RevealStep::AlreadyRevealed;
        }
        if !is_intersecting {
            return RevealStep::Pending;
        }
        self.reveal_now();
        RevealStep::Revealed
    }

    /// Apply the marker unconditionally (no observer available).
    pub fn reveal_now(&self) {
        if self.revealed.replace(true) {
            return;
        }
        self.target.mark_visible();
    }
}
