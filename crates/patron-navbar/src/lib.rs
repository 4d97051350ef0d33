//! Call-to-action resolution engine for the Patron collective navbar.
//!
//! Given a collective and the viewer's capabilities, decides which actions
//! are eligible, which single one is promoted to the prominent button,
//! whether a second one joins it, and what the overflow menu lists. Pure and
//! synchronous throughout; rendering, routing, and data fetching live with
//! the callers.
//!
//! # Quick start
//!
//! ```no_run
//! use patron_core::ViewerRole;
//! use patron_navbar::resolve;
//!
//! # let collective = None;
//! let resolution = resolve(collective, None, ViewerRole::ANONYMOUS, None);
//! println!("primary: {:?}", resolution.primary.map(|d| d.action));
//! ```

pub mod action;
pub mod defaults;
pub mod engine;
pub mod menu;
pub mod menu_state;
pub mod resolve;
pub mod sections;

pub use action::{CtaKey, CtaSet, NavbarAction};
pub use engine::{NavbarResolution, resolve};
pub use menu::{Layout, overflow_menu};
pub use menu_state::MenuState;
pub use resolve::{ActionDescriptor, RenderDirective, select_main, select_secondary};
pub use sections::{NavbarSection, SectionSet};
