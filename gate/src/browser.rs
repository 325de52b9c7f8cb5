//! `web-sys` adapters and WASM entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated pages load the generated `gate.js` bundle and call [`install`].
//! Everything here is thin glue: each adapter maps one browser facility
//! onto a guard capability and converts thrown JS values into
//! [`GateError::Js`].

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Window;

use crate::config::GuardConfig;
use crate::error::GateError;
use crate::guard::PageGuard;
use crate::navigation::{NavigationContext, NavigationKind};
use crate::page::{self, PageSurface};
use crate::session::SessionStore;

/// Element id of the optional inline JSON configuration block.
const CONFIG_ELEMENT_ID: &str = "gate-config";

impl From<JsValue> for GateError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

fn window() -> Result<Window, GateError> {
    web_sys::window().ok_or(GateError::Unavailable("window"))
}

// =============================================================================
// SESSION
// =============================================================================

/// Origin-scoped `localStorage`.
#[derive(Debug, Default)]
pub struct LocalStorageSession;

impl LocalStorageSession {
    fn storage() -> Result<web_sys::Storage, GateError> {
        window()?.local_storage()?.ok_or(GateError::Unavailable("localStorage"))
    }
}

impl SessionStore for LocalStorageSession {
    fn get(&self, key: &str) -> Result<Option<String>, GateError> {
        Ok(Self::storage()?.get_item(key)?)
    }

    fn clear(&self, key: &str) -> Result<(), GateError> {
        Ok(Self::storage()?.remove_item(key)?)
    }
}

// =============================================================================
// NAVIGATION
// =============================================================================

/// Reads the first `PerformanceNavigationTiming` entry.
#[derive(Debug, Default)]
pub struct TimingNavigation;

impl TimingNavigation {
    fn timing_type() -> Result<Option<String>, GateError> {
        let performance = window()?.performance().ok_or(GateError::Unavailable("performance"))?;
        let entry = performance.get_entries_by_type("navigation").get(0);
        if entry.is_undefined() {
            return Ok(None);
        }
        let kind = js_sys::Reflect::get(&entry, &JsValue::from_str("type"))?;
        Ok(kind.as_string())
    }
}

impl NavigationContext for TimingNavigation {
    fn kind(&self) -> Option<NavigationKind> {
        match Self::timing_type() {
            Ok(raw) => raw.as_deref().and_then(NavigationKind::parse),
            Err(e) => {
                log::debug!("navigation timing unavailable: {e}");
                None
            }
        }
    }
}

// =============================================================================
// PAGE
// =============================================================================

/// The live document and its location.
#[derive(Debug, Default)]
pub struct DocumentPage;

impl PageSurface for DocumentPage {
    fn origin(&self) -> Result<String, GateError> {
        Ok(window()?.location().origin()?)
    }

    fn notify(&self, message: &str) {
        let shown = window().and_then(|w| w.alert_with_message(message).map_err(GateError::from));
        if let Err(e) = shown {
            log::warn!("failed to show notice: {e}");
        }
    }

    fn reveal(&self, display: &str) -> Result<(), GateError> {
        let body = window()?
            .document()
            .and_then(|d| d.body())
            .ok_or(GateError::Unavailable("document body"))?;
        Ok(body.style().set_property("display", display)?)
    }

    fn navigate(&self, url: &str) -> Result<(), GateError> {
        Ok(window()?.location().set_href(url)?)
    }
}

// =============================================================================
// ENTRY POINTS
// =============================================================================

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        log::debug!("console logger already installed: {e}");
    }
}

/// Guard configuration from the page's inline block, or defaults.
fn page_config() -> GuardConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());
    GuardConfig::from_block(raw.as_deref())
}

/// Run the guard against the live page. Returns `true` when the content
/// was revealed and the visitor stays on the page.
#[wasm_bindgen(js_name = runNow)]
pub fn run_now() -> bool {
    let guard = PageGuard::new(page_config());
    let outcome = guard.run(&LocalStorageSession, &TimingNavigation, &DocumentPage);
    outcome.is_revealed()
}

/// Run the guard once the page has loaded; immediately if it already has.
///
/// # Errors
///
/// Returns the thrown value if there is no window or document.
#[wasm_bindgen]
pub fn install() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is unavailable"))?;
    let document = window.document().ok_or_else(|| JsValue::from_str("document is unavailable"))?;

    if page::is_loaded(&document.ready_state()) {
        run_now();
        return Ok(());
    }

    let on_load = Closure::once_into_js(move || {
        run_now();
    });
    window.add_event_listener_with_callback("load", on_load.unchecked_ref())
}
