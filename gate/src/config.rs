//! Guard configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The key name and landing path are a convention shared with the login
//! page. Pages may override any field with an inline JSON block; absent
//! fields keep the defaults below.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::GateError;

pub const DEFAULT_STORAGE_KEY: &str = "loggedIn";
pub const DEFAULT_FALLBACK_PATH: &str = "/ECOPS_webpage/index0.html";
pub const DEFAULT_NOTICE: &str = "로그인 후 이용 가능합니다.";
pub const DEFAULT_CONTENT_DISPLAY: &str = "block";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// `localStorage` key holding the presence flag.
    pub storage_key: String,
    /// Absolute path, relative to the current origin, of the landing page.
    pub fallback_path: String,
    /// Text of the blocking notice shown before an unauthenticated redirect.
    pub notice: String,
    /// CSS `display` value applied to `<body>` once access is granted.
    pub content_display: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            fallback_path: DEFAULT_FALLBACK_PATH.to_owned(),
            notice: DEFAULT_NOTICE.to_owned(),
            content_display: DEFAULT_CONTENT_DISPLAY.to_owned(),
        }
    }
}

impl GuardConfig {
    /// Parse a JSON object, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Config`] if `raw` is not a JSON object of the
    /// expected shape.
    pub fn from_json(raw: &str) -> Result<Self, GateError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Configuration from a page's inline block.
    ///
    /// A missing block or one that fails to parse yields the defaults; the
    /// parse failure is logged.
    pub fn from_block(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match Self::from_json(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring inline guard config: {e}");
                Self::default()
            }
        }
    }

    /// Landing page URL under `origin`.
    ///
    /// Exactly one `/` separates the origin from the path, whatever
    /// trailing or leading slashes either side carries.
    pub fn fallback_url(&self, origin: &str) -> String {
        let origin = origin.trim_end_matches('/');
        let path = self.fallback_path.trim_start_matches('/');
        format!("{origin}/{path}")
    }
}
