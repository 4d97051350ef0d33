//! Per-collective feature flags.
//!
//! Each feature the navbar consults carries a status set by the platform.
//! Lookups are degrade-safe: a missing or unrecognised entry is simply
//! unavailable, never an error.

use std::{collections::BTreeMap, fmt};

use serde::{
  Deserialize, Deserializer, Serialize,
  de::{MapAccess, Visitor},
};

// ─── Feature names ───────────────────────────────────────────────────────────

/// The feature flags the navbar consults.
/// Wire values match the platform API (`CONTACT_FORM`, …).
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Feature {
  ContactForm,
  ReceiveHostApplications,
  ReceiveExpenses,
  RecurringContributions,
  HostDashboard,
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// The status of a feature for a given collective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureStatus {
  /// Enabled and in use.
  Active,
  /// Offered but not yet used.
  Available,
  /// Switched off for this collective.
  Disabled,
  /// Not applicable to this collective kind.
  Unsupported,
}

// ─── FeatureSet ──────────────────────────────────────────────────────────────

/// The feature → status mapping for one collective.
///
/// The platform's wire map carries many more flags than the navbar consults;
/// deserialization keeps the entries it recognises and silently drops the
/// rest, so an unknown feature name or status string ends up unavailable
/// rather than failing the whole record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FeatureSet {
  statuses: BTreeMap<Feature, FeatureStatus>,
}

impl FeatureSet {
  pub fn new() -> Self { Self::default() }

  pub fn with(mut self, feature: Feature, status: FeatureStatus) -> Self {
    self.statuses.insert(feature, status);
    self
  }

  pub fn set(&mut self, feature: Feature, status: FeatureStatus) {
    self.statuses.insert(feature, status);
  }

  /// The raw status of `feature`, or `None` if the platform sent nothing.
  pub fn status(&self, feature: Feature) -> Option<FeatureStatus> {
    self.statuses.get(&feature).copied()
  }

  /// A feature is available iff its status is exactly `Active` or
  /// `Available`. Missing entries and every other status are unavailable.
  pub fn is_available(&self, feature: Feature) -> bool {
    matches!(
      self.status(feature),
      Some(FeatureStatus::Active | FeatureStatus::Available)
    )
  }
}

impl<'de> Deserialize<'de> for FeatureSet {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct FeatureSetVisitor;

    impl<'de> Visitor<'de> for FeatureSetVisitor {
      type Value = FeatureSet;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of feature names to statuses")
      }

      fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
      ) -> Result<Self::Value, A::Error> {
        let mut set = FeatureSet::new();
        while let Some((name, status)) =
          access.next_entry::<String, serde_json::Value>()?
        {
          // Unconsulted flags and unrecognised statuses are dropped, which
          // leaves them unavailable.
          let (Ok(feature), Ok(status)) = (
            serde_json::from_value::<Feature>(name.into()),
            serde_json::from_value::<FeatureStatus>(status),
          ) else {
            continue;
          };
          set.set(feature, status);
        }
        Ok(set)
      }
    }

    deserializer.deserialize_map(FeatureSetVisitor)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn missing_feature_is_unavailable() {
    let features = FeatureSet::new();
    assert!(!features.is_available(Feature::ContactForm));
    assert_eq!(features.status(Feature::ContactForm), None);
  }

  #[test]
  fn active_and_available_both_count() {
    let features = FeatureSet::new()
      .with(Feature::ContactForm, FeatureStatus::Active)
      .with(Feature::ReceiveExpenses, FeatureStatus::Available)
      .with(Feature::HostDashboard, FeatureStatus::Disabled);

    assert!(features.is_available(Feature::ContactForm));
    assert!(features.is_available(Feature::ReceiveExpenses));
    assert!(!features.is_available(Feature::HostDashboard));
  }

  #[test]
  fn deserialises_platform_wire_map() {
    let features: FeatureSet = serde_json::from_value(serde_json::json!({
      "CONTACT_FORM": "AVAILABLE",
      "RECURRING_CONTRIBUTIONS": "ACTIVE",
    }))
    .unwrap();

    assert!(features.is_available(Feature::ContactForm));
    assert_eq!(
      features.status(Feature::RecurringContributions),
      Some(FeatureStatus::Active)
    );
  }

  #[test]
  fn unconsulted_wire_flags_do_not_fail_the_map() {
    let features: FeatureSet = serde_json::from_value(serde_json::json!({
      "CONTACT_FORM": "AVAILABLE",
      "RECEIVE_FINANCIAL_CONTRIBUTIONS": "ACTIVE",
      "ALIPAY": "DISABLED",
    }))
    .unwrap();

    assert!(features.is_available(Feature::ContactForm));
  }

  #[test]
  fn unrecognised_status_leaves_the_feature_unavailable() {
    let features: FeatureSet = serde_json::from_value(serde_json::json!({
      "RECURRING_CONTRIBUTIONS": "SOMEDAY",
      "RECEIVE_EXPENSES": null,
    }))
    .unwrap();

    assert!(!features.is_available(Feature::RecurringContributions));
    assert_eq!(features.status(Feature::RecurringContributions), None);
    assert!(!features.is_available(Feature::ReceiveExpenses));
  }
}
