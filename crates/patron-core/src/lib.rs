//! Core domain types for the Patron navbar.
//!
//! This crate is deliberately free of HTTP dependencies. It defines the
//! collective profile record, feature flags, viewer capabilities, and the
//! directory lookup abstraction. All other crates depend on it; it depends
//! on nothing proprietary.

pub mod collective;
pub mod directory;
pub mod feature;
pub mod viewer;

pub use collective::{Collective, CollectiveKind};
pub use directory::CollectiveDirectory;
pub use feature::{Feature, FeatureSet, FeatureStatus};
pub use viewer::{Identity, ViewerRole};
