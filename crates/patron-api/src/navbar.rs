//! Handlers for navbar resolution endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/collectives/{slug}/navbar` | Roles via `?admin=&hostAdmin=&root=`, default false |
//! | `POST` | `/navbar/resolve` | Inline collective, roles, and overrides in the body |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
};
use patron_core::{Collective, ViewerRole, directory::CollectiveDirectory};
use patron_navbar::{CtaSet, NavbarResolution, SectionSet, resolve};
use serde::Deserialize;

use crate::error::ApiError;

// ─── By slug ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoleParams {
  #[serde(default)]
  pub admin:      bool,
  #[serde(default)]
  pub host_admin: bool,
  #[serde(default)]
  pub root:       bool,
}

impl RoleParams {
  fn role(&self) -> ViewerRole {
    ViewerRole {
      is_admin:      self.admin,
      is_host_admin: self.host_admin,
      is_root:       self.root,
    }
  }
}

/// `GET /collectives/{slug}/navbar[?admin=true][&hostAdmin=true][&root=true]`
pub async fn for_collective<D>(
  State(directory): State<Arc<D>>,
  Path(slug): Path<String>,
  Query(params): Query<RoleParams>,
) -> Result<Json<NavbarResolution>, ApiError>
where
  D: CollectiveDirectory,
  D::Error: std::error::Error + Send + Sync + 'static,
{
  let collective = directory
    .collective_by_slug(&slug)
    .await
    .map_err(|e| ApiError::Directory(Box::new(e)))?
    .ok_or(ApiError::UnknownCollective(slug))?;

  Ok(Json(resolve(Some(&collective), None, params.role(), None)))
}

// ─── Inline ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ResolveBody {
  /// `null` (or absent) means the collective is still loading; the
  /// resolution is empty, not an error.
  #[serde(default)]
  pub collective: Option<Collective>,
  #[serde(default)]
  pub viewer:     ViewerRole,
  /// Enabled sections; absent falls back to the stock sections for the
  /// collective kind.
  #[serde(default)]
  pub sections:   Option<SectionSet>,
  #[serde(default)]
  pub overrides:  Option<CtaSet>,
}

/// `POST /navbar/resolve` — resolve for a collective supplied inline.
pub async fn resolve_inline(
  Json(body): Json<ResolveBody>,
) -> Json<NavbarResolution> {
  Json(resolve(
    body.collective.as_ref(),
    body.sections.as_ref(),
    body.viewer,
    body.overrides.as_ref(),
  ))
}
