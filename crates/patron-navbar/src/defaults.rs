//! Default CTA computation.
//!
//! Each flag is derived by its own pure predicate over the collective, the
//! enabled sections, and the viewer's capabilities. The predicates are
//! exported individually so each rule can be tested on its own.

use patron_core::{
  Collective, CollectiveKind, Feature, FeatureStatus, ViewerRole,
};

use crate::{
  action::{CtaSet, NavbarAction},
  sections::{NavbarSection, SectionSet},
};

// ─── Predicates ──────────────────────────────────────────────────────────────

/// Whether a contribution route can be generated for this collective.
/// Collectives that disable custom contributions have no generic route to
/// point the button at.
pub fn has_contribute_route(collective: &Collective) -> bool {
  !collective.settings.disable_custom_contributions
}

/// Funds and projects show the contribute button while active, reachable,
/// and with the contribute section enabled for this viewer.
pub fn has_contribute(
  collective: &Collective,
  sections: &SectionSet,
  is_admin: bool,
) -> bool {
  matches!(collective.kind, CollectiveKind::Fund | CollectiveKind::Project)
    && collective.is_active
    && has_contribute_route(collective)
    && sections.is_enabled(NavbarSection::Contribute, is_admin)
}

pub fn has_contact(collective: &Collective) -> bool {
  collective.features.is_available(Feature::ContactForm)
}

pub fn has_apply(collective: &Collective) -> bool {
  collective.features.is_available(Feature::ReceiveHostApplications)
}

pub fn has_submit_expense(collective: &Collective) -> bool {
  collective.features.is_available(Feature::ReceiveExpenses)
}

/// Stricter than the general availability check: `AVAILABLE` does not
/// qualify, the feature must actually be in use.
pub fn has_manage_subscriptions(
  collective: &Collective,
  is_admin: bool,
) -> bool {
  is_admin
    && collective.features.status(Feature::RecurringContributions)
      == Some(FeatureStatus::Active)
}

pub fn has_dashboard(collective: &Collective, is_admin: bool) -> bool {
  is_admin && collective.features.is_available(Feature::HostDashboard)
}

pub fn has_request_grant(collective: &Collective) -> bool {
  collective.kind == CollectiveKind::Fund
    || collective.settings.funding_request
}

pub fn has_add_prepaid_budget(collective: &Collective, is_root: bool) -> bool {
  is_root && collective.kind == CollectiveKind::Organization
}

// ─── Defaults ────────────────────────────────────────────────────────────────

/// Compute the default CTA mapping for `collective` as seen by a viewer with
/// `role`. A loading or absent collective yields an empty mapping.
///
/// The insertion order here is the order the overflow menu lists actions in;
/// the prominent-button priority is a separate table
/// ([`crate::resolve::PRIORITY`]).
pub fn default_ctas(
  collective: Option<&Collective>,
  sections: &SectionSet,
  role: ViewerRole,
) -> CtaSet {
  let Some(collective) = collective else {
    return CtaSet::new();
  };

  CtaSet::new()
    .with(
      NavbarAction::Contribute,
      has_contribute(collective, sections, role.is_admin),
    )
    .with(NavbarAction::Contact, has_contact(collective))
    .with(NavbarAction::Apply, has_apply(collective))
    .with(NavbarAction::SubmitExpense, has_submit_expense(collective))
    .with(
      NavbarAction::ManageSubscriptions,
      has_manage_subscriptions(collective, role.is_admin),
    )
    .with(NavbarAction::Dashboard, has_dashboard(collective, role.is_admin))
    .with(NavbarAction::RequestGrant, has_request_grant(collective))
    .with(
      NavbarAction::AddPrepaidBudget,
      has_add_prepaid_budget(collective, role.is_root),
    )
    .with(NavbarAction::AddFunds, role.is_host_admin)
    .with(NavbarAction::Settings, role.is_admin)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
