//! The interest-card overlay, modelled as an explicit state machine.
//!
//! Two orthogonal axes: the content axis (`Idle | Loading | Confirmed |
//! Error`) and the visibility axis (`Hidden | Visible | Exiting |
//! Dismissed`). The templates in [`crate::views`] and the inline page script
//! are both derived from this model and its constants, so the numbers here
//! are the single source of truth for the card's timing behavior.

use std::time::Duration;

/// Reveal the card after this long with no qualifying scroll.
pub const REVEAL_DELAY: Duration = Duration::from_secs(8);
/// Reveal the card once scroll position crosses this fraction of the
/// scrollable page height.
pub const SCROLL_REVEAL_FRACTION: f64 = 0.35;
/// Length of the exit animation between "dismiss" and unmount.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Idle,
    Loading,
    Confirmed,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
    Exiting,
    Dismissed,
}

/// Outcome of asking the card to submit interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    /// Issue the upstream notification; the card is now `Loading`.
    Notify,
    /// No correlation id: open the studio site instead, no state change.
    OpenExternal,
    /// Not in a state that accepts a submission (already in flight,
    /// already resolved, or dismissed).
    Refused,
}

#[derive(Debug, Clone)]
pub struct InterestCard {
    pub business_name: String,
    pub prospect_id: Option<String>,
    pub decision_maker_name: Option<String>,
    state: CardState,
    visibility: Visibility,
}

impl InterestCard {
    pub fn new(
        business_name: impl Into<String>,
        prospect_id: Option<String>,
        decision_maker_name: Option<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            prospect_id,
            decision_maker_name,
            state: CardState::Idle,
            visibility: Visibility::Hidden,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Decision maker's first name, for the confirmation copy.
    pub fn first_name(&self) -> Option<&str> {
        self.decision_maker_name
            .as_deref()
            .and_then(|name| name.split_whitespace().next())
    }

    /// Timer leg of the reveal trigger.
    pub fn tick(&mut self, elapsed: Duration) {
        if elapsed >= REVEAL_DELAY {
            self.reveal();
        }
    }

    /// Scroll leg of the reveal trigger. `scrolled` and `total` are pixel
    /// measures of scroll position and total scrollable height; a page with
    /// nothing to scroll never triggers.
    pub fn scrolled(&mut self, scrolled: f64, total: f64) {
        if total > 0.0 && scrolled / total >= SCROLL_REVEAL_FRACTION {
            self.reveal();
        }
    }

    // Reveal fires only from Hidden. Once the user has started or finished
    // dismissing, no trigger brings the card back for the session.
    fn reveal(&mut self) {
        if self.visibility == Visibility::Hidden {
            self.visibility = Visibility::Visible;
        }
    }

    /// First phase of dismissal: play the exit animation.
    pub fn begin_dismiss(&mut self) {
        if self.visibility == Visibility::Visible {
            self.visibility = Visibility::Exiting;
        }
    }

    /// Second phase, after [`EXIT_ANIMATION`]: unmount permanently.
    pub fn finish_dismiss(&mut self) {
        if self.visibility == Visibility::Exiting {
            self.visibility = Visibility::Dismissed;
        }
    }

    /// Attempt to submit interest. Succeeds only from `Idle` on a card that
    /// is not being dismissed; `Loading` acts as the single-flight guard.
    pub fn begin_submit(&mut self) -> SubmitAction {
        if matches!(self.visibility, Visibility::Exiting | Visibility::Dismissed) {
            return SubmitAction::Refused;
        }
        if self.state != CardState::Idle {
            return SubmitAction::Refused;
        }
        if self.prospect_id.is_none() {
            return SubmitAction::OpenExternal;
        }
        self.state = CardState::Loading;
        SubmitAction::Notify
    }

    /// Resolve an in-flight submission. A response that lands after the card
    /// was dismissed has no visible effect.
    pub fn complete_submit(&mut self, success: bool) {
        if self.visibility == Visibility::Dismissed {
            return;
        }
        if self.state == CardState::Loading {
            self.state = if success {
                CardState::Confirmed
            } else {
                CardState::Error
            };
        }
    }
}
