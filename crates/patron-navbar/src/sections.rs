//! Navbar section visibility.
//!
//! Sections are the navigational categories of a collective page. The CTA
//! engine consults them for exactly one rule: the contribute button only
//! shows when the contribute section is enabled for this viewer.

use patron_core::CollectiveKind;
use serde::{Deserialize, Serialize};

// ─── Sections ────────────────────────────────────────────────────────────────

/// A navigational category on the collective page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavbarSection {
  About,
  Contribute,
  Budget,
  Connect,
  Updates,
}

/// One section entry, possibly restricted to admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
  pub section:    NavbarSection,
  #[serde(default)]
  pub admin_only: bool,
}

// ─── SectionSet ──────────────────────────────────────────────────────────────

/// The sections enabled for one collective page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionSet {
  entries: Vec<SectionEntry>,
}

impl SectionSet {
  pub fn new() -> Self { Self::default() }

  pub fn with(mut self, section: NavbarSection, admin_only: bool) -> Self {
    self.entries.push(SectionEntry { section, admin_only });
    self
  }

  /// A section is enabled iff it is listed and either unrestricted or the
  /// viewer is an admin.
  pub fn is_enabled(&self, section: NavbarSection, is_admin: bool) -> bool {
    self
      .entries
      .iter()
      .any(|entry| entry.section == section && (!entry.admin_only || is_admin))
  }

  /// The stock sections for a collective kind, used when the caller does not
  /// supply a filtered list of its own.
  pub fn default_for(kind: CollectiveKind) -> Self {
    match kind {
      CollectiveKind::Collective => Self::new()
        .with(NavbarSection::Contribute, false)
        .with(NavbarSection::Budget, false)
        .with(NavbarSection::Updates, false)
        .with(NavbarSection::Connect, false)
        .with(NavbarSection::About, false),
      CollectiveKind::Fund | CollectiveKind::Project => Self::new()
        .with(NavbarSection::Contribute, false)
        .with(NavbarSection::Budget, false)
        .with(NavbarSection::About, false),
      CollectiveKind::Event => Self::new()
        .with(NavbarSection::Contribute, false)
        .with(NavbarSection::Connect, false)
        .with(NavbarSection::About, false),
      CollectiveKind::Organization => Self::new()
        .with(NavbarSection::Connect, false)
        .with(NavbarSection::Budget, true)
        .with(NavbarSection::About, false),
      CollectiveKind::User | CollectiveKind::Vendor => {
        Self::new().with(NavbarSection::About, false)
      }
    }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn unlisted_section_is_disabled() {
    let sections = SectionSet::default_for(CollectiveKind::User);
    assert!(!sections.is_enabled(NavbarSection::Contribute, true));
  }

  #[test]
  fn admin_only_section_is_gated() {
    let sections = SectionSet::default_for(CollectiveKind::Organization);
    assert!(!sections.is_enabled(NavbarSection::Budget, false));
    assert!(sections.is_enabled(NavbarSection::Budget, true));
  }

  #[test]
  fn fund_gets_the_contribute_section() {
    let sections = SectionSet::default_for(CollectiveKind::Fund);
    assert!(sections.is_enabled(NavbarSection::Contribute, false));
  }
}
