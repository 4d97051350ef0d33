//! The call-to-action vocabulary and the boolean mapping over it.
//!
//! A CTA is a named, boolean-gated user action surfaced as a button or menu
//! entry. The set of names is closed; unrecognised names supplied by callers
//! are carried inertly as [`CtaKey::Custom`] and can never be promoted to a
//! prominent button.

use std::fmt;

use serde::{
  Deserialize, Deserializer, Serialize, Serializer,
  de::{MapAccess, Visitor},
  ser::SerializeMap,
};
use strum::{Display, EnumIter, EnumString};

// ─── Actions ─────────────────────────────────────────────────────────────────

/// The closed set of navbar actions. String forms match the platform's
/// override keys (`hasContribute`, `addFunds`, …).
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumIter,
  EnumString,
)]
pub enum NavbarAction {
  #[serde(rename = "hasContribute")]
  #[strum(serialize = "hasContribute")]
  Contribute,
  #[serde(rename = "hasContact")]
  #[strum(serialize = "hasContact")]
  Contact,
  #[serde(rename = "hasApply")]
  #[strum(serialize = "hasApply")]
  Apply,
  #[serde(rename = "hasSubmitExpense")]
  #[strum(serialize = "hasSubmitExpense")]
  SubmitExpense,
  #[serde(rename = "hasManageSubscriptions")]
  #[strum(serialize = "hasManageSubscriptions")]
  ManageSubscriptions,
  #[serde(rename = "hasDashboard")]
  #[strum(serialize = "hasDashboard")]
  Dashboard,
  #[serde(rename = "hasRequestGrant")]
  #[strum(serialize = "hasRequestGrant")]
  RequestGrant,
  #[serde(rename = "addPrepaidBudget")]
  #[strum(serialize = "addPrepaidBudget")]
  AddPrepaidBudget,
  #[serde(rename = "addFunds")]
  #[strum(serialize = "addFunds")]
  AddFunds,
  #[serde(rename = "hasSettings")]
  #[strum(serialize = "hasSettings")]
  Settings,
}

// ─── Keys ────────────────────────────────────────────────────────────────────

/// A key in a [`CtaSet`]: either a recognised action or an arbitrary name
/// passed through from a caller override.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CtaKey {
  Known(NavbarAction),
  Custom(String),
}

impl CtaKey {
  /// The recognised action, if this key is one.
  pub fn action(&self) -> Option<NavbarAction> {
    match self {
      Self::Known(action) => Some(*action),
      Self::Custom(_) => None,
    }
  }
}

impl From<NavbarAction> for CtaKey {
  fn from(action: NavbarAction) -> Self { Self::Known(action) }
}

impl From<&str> for CtaKey {
  fn from(name: &str) -> Self {
    match name.parse::<NavbarAction>() {
      Ok(action) => Self::Known(action),
      Err(_) => Self::Custom(name.to_string()),
    }
  }
}

impl fmt::Display for CtaKey {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Known(action) => write!(f, "{action}"),
      Self::Custom(name) => f.write_str(name),
    }
  }
}

impl Serialize for CtaKey {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for CtaKey {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let name = String::deserialize(deserializer)?;
    Ok(Self::from(name.as_str()))
  }
}

// ─── CtaSet ──────────────────────────────────────────────────────────────────

/// An insertion-ordered mapping of CTA names to booleans.
///
/// Insertion order is preserved because the active-action sequence handed to
/// the overflow menu follows it; it is deliberately *not* the priority order
/// used to pick the prominent button (see [`crate::resolve::PRIORITY`]).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CtaSet {
  entries: Vec<(CtaKey, bool)>,
}

impl CtaSet {
  pub fn new() -> Self { Self::default() }

  /// Set `key` to `enabled`. An existing key keeps its position; a new key
  /// is appended.
  pub fn set(&mut self, key: impl Into<CtaKey>, enabled: bool) {
    let key = key.into();
    match self.entries.iter_mut().find(|(k, _)| *k == key) {
      Some((_, value)) => *value = enabled,
      None => self.entries.push((key, enabled)),
    }
  }

  /// Builder-style [`CtaSet::set`].
  pub fn with(mut self, key: impl Into<CtaKey>, enabled: bool) -> Self {
    self.set(key, enabled);
    self
  }

  pub fn get(&self, key: &CtaKey) -> Option<bool> {
    self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
  }

  /// Whether a recognised action is present and truthy.
  pub fn enabled(&self, action: NavbarAction) -> bool {
    self.get(&CtaKey::Known(action)).unwrap_or(false)
  }

  /// Shallow-merge `overrides` on top of `self`. A key present in the
  /// overrides always wins, including an explicit `false`; unknown keys pass
  /// through untouched.
  pub fn merge(mut self, overrides: &Self) -> Self {
    for (key, enabled) in &overrides.entries {
      self.set(key.clone(), *enabled);
    }
    self
  }

  /// The keys whose value is truthy, in insertion order. Feeds both the
  /// primary selector and the overflow menu.
  pub fn active(&self) -> Vec<CtaKey> {
    self
      .entries
      .iter()
      .filter(|(_, enabled)| *enabled)
      .map(|(key, _)| key.clone())
      .collect()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&CtaKey, bool)> {
    self.entries.iter().map(|(key, enabled)| (key, *enabled))
  }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}

impl Serialize for CtaSet {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for (key, enabled) in &self.entries {
      map.serialize_entry(key, enabled)?;
    }
    map.end()
  }
}

impl<'de> Deserialize<'de> for CtaSet {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct CtaSetVisitor;

    impl<'de> Visitor<'de> for CtaSetVisitor {
      type Value = CtaSet;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of CTA names to booleans")
      }

      fn visit_map<A: MapAccess<'de>>(
        self,
        mut access: A,
      ) -> Result<Self::Value, A::Error> {
        let mut set = CtaSet::new();
        while let Some((key, enabled)) = access.next_entry::<CtaKey, bool>()? {
          set.set(key, enabled);
        }
        Ok(set)
      }
    }

    deserializer.deserialize_map(CtaSetVisitor)
  }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
