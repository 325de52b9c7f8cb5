//! # gate
//!
//! Page-load guard for the ECOPS static pages. Blocks a page until the
//! login flow has left a presence flag in `localStorage`, and forces a
//! logout whenever the page is reloaded.
//!
//! The decision logic in [`guard`] is written against three small
//! capabilities ([`session::SessionStore`], [`navigation::NavigationContext`],
//! [`page::PageSurface`]) so it runs natively under `cargo test`. The
//! `browser` feature adds the `web-sys` adapters and the WASM entry points.

pub mod config;
pub mod error;
pub mod guard;
pub mod navigation;
pub mod page;
pub mod session;

#[cfg(feature = "browser")]
pub mod browser;

pub use config::GuardConfig;
pub use error::GateError;
pub use guard::{Outcome, PageGuard, RedirectReason};
