//! Overflow menu composition.
//!
//! Whatever is not promoted to a prominent button is routed to a collapsible
//! actions menu. On wide layouts the promoted entries are excluded so they
//! never appear twice; on narrow layouts the menu is the only actions
//! surface and lists everything active, promoted entries included.

use serde::{Deserialize, Serialize};

use crate::action::{CtaKey, CtaSet, NavbarAction};

/// The layout the menu is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
  Wide,
  Narrow,
}

/// The menu entries for the merged CTA mapping, in insertion order.
pub fn overflow_menu(
  ctas: &CtaSet,
  primary: Option<NavbarAction>,
  secondary: Option<NavbarAction>,
  layout: Layout,
) -> Vec<CtaKey> {
  let promoted = |key: &CtaKey| {
    key.action().is_some_and(|action| {
      Some(action) == primary || Some(action) == secondary
    })
  };

  ctas
    .active()
    .into_iter()
    .filter(|key| layout == Layout::Narrow || !promoted(key))
    .collect()
}

// ─── Tests ───────────────────────────────────────────────────────────────────
