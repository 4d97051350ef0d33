//! Collective — the platform's core organizational entity.
//!
//! A collective is the immutable input to the navbar engine. It is owned by
//! the data layer; this crate only mirrors the fields the navbar consumes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::feature::FeatureSet;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The kind of entity a collective profile represents.
/// Wire values match the platform API (`USER`, `ORGANIZATION`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CollectiveKind {
  User,
  Organization,
  Collective,
  Fund,
  Event,
  Project,
  Vendor,
}

// ─── Summaries ───────────────────────────────────────────────────────────────

/// The fiscal host holding funds on behalf of a collective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostSummary {
  pub id:   Uuid,
  pub slug: String,
  pub name: String,
}

/// The parent collective of an event or project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentSummary {
  pub id:   Uuid,
  pub slug: String,
  pub name: String,
}

// ─── Plan ────────────────────────────────────────────────────────────────────

/// Hosting plan limits for a fiscal host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
  #[serde(default)]
  pub hosted_collectives:       u32,
  /// `None` means the plan is unmetered.
  #[serde(default)]
  pub hosted_collectives_limit: Option<u32>,
}

impl Plan {
  /// Whether the host can still accept new collectives under its plan.
  pub fn within_hosting_limit(&self) -> bool {
    match self.hosted_collectives_limit {
      Some(limit) => self.hosted_collectives < limit,
      None => true,
    }
  }
}

// ─── Settings ────────────────────────────────────────────────────────────────

/// Typed view over the platform's free-form settings blob. Keys the navbar
/// does not consult are preserved untouched in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectiveSettings {
  /// Opt-in flag letting non-fund collectives receive grant requests.
  #[serde(default)]
  pub funding_request:              bool,
  /// Set by collectives that only accept contributions through tiers.
  #[serde(default)]
  pub disable_custom_contributions: bool,
  #[serde(flatten)]
  pub extra: serde_json::Map<String, serde_json::Value>,
}

// ─── Collective ──────────────────────────────────────────────────────────────

/// A collective profile as consumed by the navbar. Field names follow the
/// platform's JSON shape (`type`, `isActive`, `parentCollective`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collective {
  pub id:   Uuid,
  pub slug: String,
  pub name: String,
  #[serde(rename = "type")]
  pub kind: CollectiveKind,
  #[serde(default)]
  pub is_active: bool,
  #[serde(default)]
  pub features:  FeatureSet,
  #[serde(default)]
  pub settings:  CollectiveSettings,
  #[serde(default)]
  pub host:      Option<HostSummary>,
  #[serde(default, rename = "parentCollective")]
  pub parent:    Option<ParentSummary>,
  #[serde(default)]
  pub plan:      Option<Plan>,
}

impl Collective {
  /// Whether the host can still accept new collectives; collectives without
  /// a plan are treated as unmetered.
  pub fn within_hosting_limit(&self) -> bool {
    self.plan.map_or(true, |plan| plan.within_hosting_limit())
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
