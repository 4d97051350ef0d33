//! Expand/collapse state machine for the mobile menu.
//!
//! The only stateful element around the engine. Two states, single writer,
//! instantaneous flips. Collapsing on outside interaction is delayed by a
//! fixed short interval so a simultaneous navigation click is not fought
//! with; an expand arriving before the deadline cancels the collapse.
//!
//! No timers run here: the owner passes the current time in and calls
//! [`MenuState::tick`] when it wants due transitions applied, which keeps
//! the machine deterministic and testable.

use chrono::{DateTime, TimeDelta, Utc};

/// How long an outside interaction waits before collapsing the menu.
pub const COLLAPSE_DELAY_MS: i64 = 200;

/// The mobile menu, initially collapsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
  #[default]
  Collapsed,
  Expanded {
    /// A scheduled collapse from an outside interaction, if any.
    pending_collapse: Option<DateTime<Utc>>,
  },
}

impl MenuState {
  pub fn new() -> Self { Self::default() }

  pub fn is_expanded(&self) -> bool {
    matches!(self, Self::Expanded { .. })
  }

  /// Explicit user toggle: flips the state. Expanding clears any pending
  /// collapse left over from a previous expansion.
  pub fn toggle(&mut self) {
    *self = match self {
      Self::Collapsed => Self::Expanded { pending_collapse: None },
      Self::Expanded { .. } => Self::Collapsed,
    };
  }

  /// An interaction outside the menu while it is expanded schedules a
  /// collapse shortly after `now`. No-op while collapsed.
  pub fn outside_interaction(&mut self, now: DateTime<Utc>) {
    if let Self::Expanded { pending_collapse } = self {
      *pending_collapse =
        Some(now + TimeDelta::milliseconds(COLLAPSE_DELAY_MS));
    }
  }

  /// Apply a due pending collapse; otherwise no-op.
  pub fn tick(&mut self, now: DateTime<Utc>) {
    if let Self::Expanded { pending_collapse: Some(deadline) } = self
      && now >= *deadline
    {
      *self = Self::Collapsed;
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
