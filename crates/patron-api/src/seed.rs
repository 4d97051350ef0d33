//! In-memory collective directory seeded from a JSON file.
//!
//! Production deployments back [`CollectiveDirectory`] with the platform's
//! data layer; this implementation serves demos and tests from a flat list
//! of collective records.

use std::{collections::HashMap, convert::Infallible, path::Path};

use patron_core::{Collective, directory::CollectiveDirectory};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("cannot read seed file: {0}")]
  Io(#[from] std::io::Error),

  #[error("cannot parse seed file: {0}")]
  Parse(#[from] serde_json::Error),
}

/// A directory backed by an in-memory slug → collective map.
#[derive(Debug, Clone, Default)]
pub struct SeedDirectory {
  collectives: HashMap<String, Collective>,
}

impl SeedDirectory {
  /// Build a directory from collective records. Later duplicates of a slug
  /// replace earlier ones.
  pub fn from_collectives(
    collectives: impl IntoIterator<Item = Collective>,
  ) -> Self {
    Self {
      collectives: collectives
        .into_iter()
        .map(|c| (c.slug.clone(), c))
        .collect(),
    }
  }

  /// Load a directory from a JSON file holding an array of collectives.
  pub fn load(path: &Path) -> Result<Self, SeedError> {
    let raw = std::fs::read_to_string(path)?;
    let collectives: Vec<Collective> = serde_json::from_str(&raw)?;
    tracing::info!(count = collectives.len(), ?path, "loaded seed directory");
    Ok(Self::from_collectives(collectives))
  }

  pub fn len(&self) -> usize { self.collectives.len() }

  pub fn is_empty(&self) -> bool { self.collectives.is_empty() }
}

impl CollectiveDirectory for SeedDirectory {
  type Error = Infallible;

  async fn collective_by_slug(
    &self,
    slug: &str,
  ) -> Result<Option<Collective>, Infallible> {
    Ok(self.collectives.get(slug).cloned())
  }
}
