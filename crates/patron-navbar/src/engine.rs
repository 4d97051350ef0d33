//! Top-level resolution: collective + viewer role → promoted buttons and
//! overflow actions.
//!
//! Wires the pipeline in order: defaults → override merge → active filter →
//! primary selection → secondary selection. Synchronous, pure, and safe to
//! call concurrently; given identical inputs the output is identical.

use patron_core::{Collective, ViewerRole};
use serde::{Deserialize, Serialize};

use crate::{
  action::{CtaKey, CtaSet},
  defaults::default_ctas,
  resolve::{ActionDescriptor, select_main, select_secondary},
  sections::SectionSet,
};

/// The full outcome of one resolution, handed to the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarResolution {
  /// The merged CTA mapping (defaults + overrides), for menu rendering.
  pub ctas:      CtaSet,
  /// Truthy keys in insertion order.
  pub active:    Vec<CtaKey>,
  pub primary:   Option<ActionDescriptor>,
  pub secondary: Option<ActionDescriptor>,
}

impl NavbarResolution {
  /// The resolution for a loading or absent collective: no actions at all.
  pub fn empty() -> Self { Self::default() }
}

/// Resolve the navbar actions for `collective` as seen by `role`.
///
/// - `sections`: the enabled sections; `None` falls back to the stock
///   sections for the collective's kind.
/// - `overrides`: caller-supplied CTA overrides; keys present always win.
///
/// A `None` collective (still loading, or none at all) resolves to
/// [`NavbarResolution::empty`].
pub fn resolve(
  collective: Option<&Collective>,
  sections: Option<&SectionSet>,
  role: ViewerRole,
  overrides: Option<&CtaSet>,
) -> NavbarResolution {
  let Some(collective) = collective else {
    return NavbarResolution::empty();
  };

  let stock_sections;
  let sections = match sections {
    Some(sections) => sections,
    None => {
      stock_sections = SectionSet::default_for(collective.kind);
      &stock_sections
    }
  };

  let defaults = default_ctas(Some(collective), sections, role);
  let ctas = match overrides {
    Some(overrides) => defaults.merge(overrides),
    None => defaults,
  };

  let active = ctas.active();
  let primary = select_main(Some(collective), &active);
  let secondary =
    select_secondary(Some(collective), &active, primary.as_ref().map(|d| d.action));

  tracing::debug!(
    collective = %collective.slug,
    active = ?active,
    primary = ?primary.as_ref().map(|d| d.action),
    secondary = ?secondary.as_ref().map(|d| d.action),
    "resolved navbar actions"
  );

  NavbarResolution { ctas, active, primary, secondary }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
