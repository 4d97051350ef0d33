//! Primary and secondary action selection.
//!
//! The priority over active actions is a fixed, total order encoded as data
//! (one table, one loop) rather than as a chain of branches, so the order
//! can be unit-tested and amended without touching unrelated rules. Priority
//! must be stable across renders; both selectors are pure functions.

use patron_core::{Collective, collective::HostSummary};
use serde::{Deserialize, Serialize};

use crate::action::{CtaKey, NavbarAction};

// ─── Priority table ──────────────────────────────────────────────────────────

/// A structural precondition a priority rule may impose beyond the flag
/// being active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precondition {
  None,
  /// The collective must have a resolvable host reference.
  HostPresent,
}

/// One row of the priority table.
#[derive(Debug, Clone, Copy)]
pub struct PriorityRule {
  pub action:       NavbarAction,
  pub precondition: Precondition,
}

const fn rule(action: NavbarAction, precondition: Precondition) -> PriorityRule {
  PriorityRule { action, precondition }
}

/// The fixed priority order for promoting an action to a prominent button.
/// First match wins. Every [`NavbarAction`] appears exactly once.
pub const PRIORITY: [PriorityRule; 10] = [
  rule(NavbarAction::Settings, Precondition::None),
  rule(NavbarAction::Dashboard, Precondition::None),
  rule(NavbarAction::Contribute, Precondition::None),
  rule(NavbarAction::Apply, Precondition::None),
  rule(NavbarAction::RequestGrant, Precondition::None),
  rule(NavbarAction::SubmitExpense, Precondition::None),
  rule(NavbarAction::ManageSubscriptions, Precondition::None),
  rule(NavbarAction::Contact, Precondition::None),
  rule(NavbarAction::AddFunds, Precondition::HostPresent),
  rule(NavbarAction::AddPrepaidBudget, Precondition::None),
];

// ─── Descriptors ─────────────────────────────────────────────────────────────

/// The presentation payload attached to a promoted action. Opaque to the
/// engine; the renderer turns it into a concrete button. No URLs are built
/// here, only the semantic data the renderer needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderDirective {
  Settings { slug: String },
  Dashboard { slug: String },
  Contribute { slug: String },
  #[serde(rename_all = "camelCase")]
  Apply {
    host_slug:         String,
    /// Whether the host can still accept collectives under its plan.
    host_within_limit: bool,
  },
  RequestGrant { slug: String },
  SubmitExpense { slug: String },
  ManageSubscriptions { slug: String },
  Contact { slug: String },
  AddFunds { host: HostSummary },
  AddPrepaidBudget { slug: String },
}

/// A promoted action: its type plus the rendering directive.
/// Produced only for the primary and secondary slots; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
  pub action:    NavbarAction,
  pub directive: RenderDirective,
}

/// The directive for `action` on `collective`, or `None` when the collective
/// lacks the structure the directive needs (add-funds without a host).
fn directive_for(
  collective: &Collective,
  action: NavbarAction,
) -> Option<RenderDirective> {
  let slug = collective.slug.clone();
  Some(match action {
    NavbarAction::Settings => RenderDirective::Settings { slug },
    NavbarAction::Dashboard => RenderDirective::Dashboard { slug },
    NavbarAction::Contribute => RenderDirective::Contribute { slug },
    NavbarAction::Apply => RenderDirective::Apply {
      host_slug:         slug,
      host_within_limit: collective.within_hosting_limit(),
    },
    NavbarAction::RequestGrant => RenderDirective::RequestGrant { slug },
    NavbarAction::SubmitExpense => RenderDirective::SubmitExpense { slug },
    NavbarAction::ManageSubscriptions => {
      RenderDirective::ManageSubscriptions { slug }
    }
    NavbarAction::Contact => RenderDirective::Contact { slug },
    NavbarAction::AddFunds => {
      RenderDirective::AddFunds { host: collective.host.clone()? }
    }
    NavbarAction::AddPrepaidBudget => RenderDirective::AddPrepaidBudget { slug },
  })
}

// ─── Selection ───────────────────────────────────────────────────────────────

/// Pick the single main action: the first priority-table row whose action is
/// active and whose precondition holds. Returns `None` for an absent
/// collective, an empty active set, or when no active action matches a rule.
pub fn select_main(
  collective: Option<&Collective>,
  active: &[CtaKey],
) -> Option<ActionDescriptor> {
  let collective = collective?;

  for rule in &PRIORITY {
    if !active.contains(&CtaKey::Known(rule.action)) {
      continue;
    }
    let precondition_holds = match rule.precondition {
      Precondition::None => true,
      Precondition::HostPresent => collective.host.is_some(),
    };
    if !precondition_holds {
      continue;
    }
    if let Some(directive) = directive_for(collective, rule.action) {
      return Some(ActionDescriptor { action: rule.action, directive });
    }
  }
  None
}

/// Pick the secondary action: only when exactly two actions are active, the
/// one that is not primary is resolved through the same priority order. For
/// any other active count the non-primary actions live in the overflow menu
/// only.
pub fn select_secondary(
  collective: Option<&Collective>,
  active: &[CtaKey],
  primary: Option<NavbarAction>,
) -> Option<ActionDescriptor> {
  if active.len() != 2 {
    return None;
  }
  let residual: Vec<CtaKey> = active
    .iter()
    .filter(|key| primary.is_none() || key.action() != primary)
    .cloned()
    .collect();
  select_main(collective, &residual)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use patron_core::{CollectiveKind, FeatureSet, collective::CollectiveSettings};
  use strum::IntoEnumIterator;
  use uuid::Uuid;

  use super::*;

  fn collective() -> Collective {
    Collective {
      id:        Uuid::new_v4(),
      slug:      "osf".to_string(),
      name:      "Open Science Fund".to_string(),
      kind:      CollectiveKind::Fund,
      is_active: true,
      features:  FeatureSet::new(),
      settings:  CollectiveSettings::default(),
      host:      None,
      parent:    None,
      plan:      None,
    }
  }

  fn keys(actions: &[NavbarAction]) -> Vec<CtaKey> {
    actions.iter().copied().map(CtaKey::Known).collect()
  }

  #[test]
  fn priority_table_is_total() {
    for action in NavbarAction::iter() {
      let count =
        PRIORITY.iter().filter(|rule| rule.action == action).count();
      assert_eq!(count, 1, "{action} must appear exactly once");
    }
  }

  #[test]
  fn absent_collective_selects_nothing() {
    let active = keys(&[NavbarAction::Settings]);
    assert_eq!(select_main(None, &active), None);
  }

  #[test]
  fn empty_active_set_selects_nothing() {
    assert_eq!(select_main(Some(&collective()), &[]), None);
  }

  #[test]
  fn settings_outranks_everything() {
    let c = collective();
    for other in NavbarAction::iter().filter(|a| *a != NavbarAction::Settings)
    {
      let active = keys(&[other, NavbarAction::Settings]);
      let main = select_main(Some(&c), &active).unwrap();
      assert_eq!(main.action, NavbarAction::Settings);
    }
  }

  #[test]
  fn selection_ignores_insertion_order() {
    let c = collective();
    let forward = keys(&[NavbarAction::Contact, NavbarAction::SubmitExpense]);
    let backward = keys(&[NavbarAction::SubmitExpense, NavbarAction::Contact]);
    let a = select_main(Some(&c), &forward).unwrap();
    let b = select_main(Some(&c), &backward).unwrap();
    assert_eq!(a.action, NavbarAction::SubmitExpense);
    assert_eq!(a, b);
  }

  #[test]
  fn selection_is_idempotent() {
    let c = collective();
    let active = keys(&[NavbarAction::Contribute, NavbarAction::Contact]);
    assert_eq!(
      select_main(Some(&c), &active),
      select_main(Some(&c), &active)
    );
  }

  #[test]
  fn add_funds_requires_a_host() {
    let mut c = collective();
    let active = keys(&[NavbarAction::AddFunds]);
    assert_eq!(select_main(Some(&c), &active), None);

    c.host = Some(HostSummary {
      id:   Uuid::new_v4(),
      slug: "fiscal-host".to_string(),
      name: "Fiscal Host".to_string(),
    });
    let main = select_main(Some(&c), &active).unwrap();
    assert_eq!(main.action, NavbarAction::AddFunds);
    assert!(matches!(
      main.directive,
      RenderDirective::AddFunds { ref host } if host.slug == "fiscal-host"
    ));
  }

  #[test]
  fn hostless_add_funds_falls_through_to_lower_priority() {
    let c = collective();
    let active = keys(&[NavbarAction::AddFunds, NavbarAction::AddPrepaidBudget]);
    let main = select_main(Some(&c), &active).unwrap();
    assert_eq!(main.action, NavbarAction::AddPrepaidBudget);
  }

  #[test]
  fn custom_keys_are_never_promoted() {
    let c = collective();
    let active = vec![CtaKey::Custom("hasTimeTravel".to_string())];
    assert_eq!(select_main(Some(&c), &active), None);
  }

  #[test]
  fn apply_directive_carries_the_plan_limit() {
    let mut c = collective();
    c.plan = Some(patron_core::collective::Plan {
      hosted_collectives:       10,
      hosted_collectives_limit: Some(10),
    });
    let main =
      select_main(Some(&c), &keys(&[NavbarAction::Apply])).unwrap();
    assert_eq!(
      main.directive,
      RenderDirective::Apply {
        host_slug:         "osf".to_string(),
        host_within_limit: false,
      }
    );
  }

  #[test]
  fn secondary_only_when_exactly_two_active() {
    let c = collective();
    for active in [
      keys(&[]),
      keys(&[NavbarAction::Contact]),
      keys(&[
        NavbarAction::Contact,
        NavbarAction::SubmitExpense,
        NavbarAction::Contribute,
      ]),
    ] {
      let primary = select_main(Some(&c), &active).map(|d| d.action);
      assert_eq!(select_secondary(Some(&c), &active, primary), None);
    }
  }

  #[test]
  fn secondary_is_the_non_primary_of_a_pair() {
    let c = collective();
    let active = keys(&[NavbarAction::Contact, NavbarAction::SubmitExpense]);
    let primary = select_main(Some(&c), &active).unwrap();
    assert_eq!(primary.action, NavbarAction::SubmitExpense);

    let secondary =
      select_secondary(Some(&c), &active, Some(primary.action)).unwrap();
    assert_eq!(secondary.action, NavbarAction::Contact);
  }
}
