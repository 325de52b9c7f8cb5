//! Page-load guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once when a gated page finishes loading. Without the presence flag
//! the visitor is told to log in and sent to the landing page. With it, the
//! body is revealed. A reload always ends the session: the flag is cleared
//! and the visitor is sent to the landing page.
//!
//! TRADE-OFFS
//! ==========
//! The flag is client-controlled, so this gate is a courtesy, not access
//! control. Capability failures are logged and never surfaced; the only
//! observable results are "content shown" and "redirected".

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GuardConfig;
use crate::navigation::{self, NavigationContext};
use crate::page::PageSurface;
use crate::session::{self, SessionStore};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectReason {
    /// No presence flag was stored.
    Unauthenticated,
    /// The page was reloaded, which logs the visitor out.
    Reload,
}

/// What a guard run did to the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Revealed,
    Redirected { url: String, reason: RedirectReason },
}

impl Outcome {
    /// Content is shown and the visitor stays on the page.
    pub fn is_revealed(&self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirected { .. })
    }

    pub fn redirect_url(&self) -> Option<&str> {
        match self {
            Self::Redirected { url, .. } => Some(url),
            Self::Revealed => None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct PageGuard {
    config: GuardConfig,
}

impl PageGuard {
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    /// Apply the gate to the current page.
    pub fn run(
        &self,
        session: &dyn SessionStore,
        navigation: &dyn NavigationContext,
        page: &dyn PageSurface,
    ) -> Outcome {
        let key = self.config.storage_key.as_str();
        let reload = navigation::is_reload(navigation);

        if !session::is_present(session, key) {
            page.notify(&self.config.notice);
            if reload {
                clear_flag(session, key);
            }
            let url = self.fallback_url(page);
            log::info!("no session flag, redirecting to {url}");
            go(page, &url);
            return Outcome::Redirected { url, reason: RedirectReason::Unauthenticated };
        }

        if let Err(e) = page.reveal(&self.config.content_display) {
            log::warn!("failed to reveal page content: {e}");
        }

        if reload {
            clear_flag(session, key);
            let url = self.fallback_url(page);
            log::info!("reload detected, session cleared, redirecting to {url}");
            go(page, &url);
            return Outcome::Redirected { url, reason: RedirectReason::Reload };
        }

        Outcome::Revealed
    }

    /// Landing page under the current origin, or root-relative when the
    /// origin cannot be read.
    fn fallback_url(&self, page: &dyn PageSurface) -> String {
        match page.origin() {
            Ok(origin) => self.config.fallback_url(&origin),
            Err(e) => {
                log::warn!("origin unavailable ({e}), using root-relative fallback");
                self.config.fallback_url("")
            }
        }
    }
}

fn clear_flag(session: &dyn SessionStore, key: &str) {
    if let Err(e) = session.clear(key) {
        log::warn!("failed to clear session flag {key}: {e}");
    }
}

fn go(page: &dyn PageSurface, url: &str) {
    if let Err(e) = page.navigate(url) {
        log::warn!("navigation to {url} failed: {e}");
    }
}
