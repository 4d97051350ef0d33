//! JSON HTTP surface for the Patron navbar engine.
//!
//! Exposes an axum [`Router`] backed by any
//! [`patron_core::directory::CollectiveDirectory`]. Auth, TLS, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", patron_api::api_router(directory.clone()))
//! ```

pub mod error;
pub mod navbar;
pub mod seed;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post},
};
use patron_core::directory::CollectiveDirectory;
use serde::Deserialize;

pub use error::ApiError;
pub use seed::{SeedDirectory, SeedError};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:      String,
  pub port:      u16,
  /// JSON file holding the array of collectives to serve.
  pub seed_path: PathBuf,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `directory`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<D>(directory: Arc<D>) -> Router<()>
where
  D: CollectiveDirectory + 'static,
  D::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/collectives/{slug}/navbar", get(navbar::for_collective::<D>))
    .route("/navbar/resolve", post(navbar::resolve_inline))
    .with_state(directory)
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use patron_core::{
    Collective, CollectiveKind, Feature, FeatureSet, FeatureStatus,
  };
  use tower::ServiceExt as _;
  use uuid::Uuid;

  use super::*;

  fn fund() -> Collective {
    Collective {
      id:        Uuid::new_v4(),
      slug:      "open-science-fund".to_string(),
      name:      "Open Science Fund".to_string(),
      kind:      CollectiveKind::Fund,
      is_active: true,
      features:  FeatureSet::new()
        .with(Feature::ReceiveExpenses, FeatureStatus::Active),
      settings:  Default::default(),
      host:      None,
      parent:    None,
      plan:      None,
    }
  }

  fn router() -> Router<()> {
    api_router(Arc::new(SeedDirectory::from_collectives([fund()])))
  }

  async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes =
      axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  #[tokio::test]
  async fn navbar_for_seeded_fund() {
    let resp = router()
      .oneshot(
        Request::builder()
          .uri("/collectives/open-science-fund/navbar")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["primary"]["action"], "hasContribute");
    assert!(json["ctas"]["hasSubmitExpense"].as_bool().unwrap());
  }

  #[tokio::test]
  async fn admin_roles_come_from_the_query() {
    let resp = router()
      .oneshot(
        Request::builder()
          .uri("/collectives/open-science-fund/navbar?admin=true")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    // Settings outranks contribute once the viewer is an admin.
    assert_eq!(json["primary"]["action"], "hasSettings");
  }

  #[tokio::test]
  async fn unknown_slug_is_404() {
    let resp = router()
      .oneshot(
        Request::builder()
          .uri("/collectives/nope/navbar")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json = body_json(resp).await;
    assert!(json["error"].as_str().unwrap().contains("nope"));
  }

  #[tokio::test]
  async fn inline_null_collective_resolves_to_nothing() {
    let resp = router()
      .oneshot(
        Request::builder()
          .method("POST")
          .uri("/navbar/resolve")
          .header(header::CONTENT_TYPE, "application/json")
          .body(Body::from(r#"{"collective": null}"#))
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert!(json["active"].as_array().unwrap().is_empty());
    assert!(json["primary"].is_null());
  }

  #[tokio::test]
  async fn inline_overrides_win() {
    let body = serde_json::json!({
      "collective": fund(),
      "viewer": { "isAdmin": true },
      "overrides": { "hasSettings": false },
    });
    let resp = router()
      .oneshot(
        Request::builder()
          .method("POST")
          .uri("/navbar/resolve")
          .header(header::CONTENT_TYPE, "application/json")
          .body(Body::from(body.to_string()))
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["ctas"]["hasSettings"], serde_json::json!(false));
    assert_ne!(json["primary"]["action"], "hasSettings");
  }
}
