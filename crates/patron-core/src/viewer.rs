//! Viewer capabilities.
//!
//! The navbar engine never inspects a logged-in user object. Capabilities
//! are computed here, once, from the raw identity record and the collective
//! being viewed; the engine only ever sees the three booleans.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collective::Collective;

// ─── Identity ────────────────────────────────────────────────────────────────

/// The role an identity holds on a collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MembershipRole {
  Admin,
  Member,
}

/// One membership edge between an identity and a collective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Membership {
  pub collective_id: Uuid,
  pub role:          MembershipRole,
}

/// The raw identity record supplied by the authentication collaborator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
  pub id: Option<Uuid>,
  /// Platform superuser.
  #[serde(default)]
  pub is_root:     bool,
  #[serde(default)]
  pub memberships: Vec<Membership>,
}

impl Identity {
  fn is_admin_of(&self, collective_id: Uuid) -> bool {
    self.memberships.iter().any(|m| {
      m.collective_id == collective_id && m.role == MembershipRole::Admin
    })
  }
}

// ─── ViewerRole ──────────────────────────────────────────────────────────────

/// Derived facts about the current actor relative to a collective.
/// Booleans, not identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerRole {
  #[serde(default)]
  pub is_admin:      bool,
  #[serde(default)]
  pub is_host_admin: bool,
  #[serde(default)]
  pub is_root:       bool,
}

impl ViewerRole {
  /// An anonymous viewer with no capabilities.
  pub const ANONYMOUS: Self =
    Self { is_admin: false, is_host_admin: false, is_root: false };

  /// Compute the viewer's capabilities for `collective`.
  ///
  /// - admin: holds an Admin membership on the collective itself or on its
  ///   parent (events and projects are administered by their parent).
  /// - host admin: holds an Admin membership on the collective's host.
  /// - root: passthrough from the identity record.
  pub fn derive(
    identity: Option<&Identity>,
    collective: Option<&Collective>,
  ) -> Self {
    let (Some(identity), Some(collective)) = (identity, collective) else {
      return Self::ANONYMOUS;
    };

    let is_admin = identity.is_admin_of(collective.id)
      || collective
        .parent
        .as_ref()
        .is_some_and(|parent| identity.is_admin_of(parent.id));

    let is_host_admin = collective
      .host
      .as_ref()
      .is_some_and(|host| identity.is_admin_of(host.id));

    Self { is_admin, is_host_admin, is_root: identity.is_root }
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
