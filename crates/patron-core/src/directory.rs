//! The `CollectiveDirectory` trait — the data-layer boundary.
//!
//! The navbar engine never fetches data itself. Whatever supplies the
//! [`Collective`] input (GraphQL in production, an in-memory seed in tests)
//! implements this trait; higher layers depend on the abstraction.

use std::future::Future;

use crate::collective::Collective;

/// Abstraction over the collective lookup backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait CollectiveDirectory: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Look up a collective by its URL slug. Returns `None` if unknown.
  fn collective_by_slug<'a>(
    &'a self,
    slug: &'a str,
  ) -> impl Future<Output = Result<Option<Collective>, Self::Error>> + Send + 'a;
}
