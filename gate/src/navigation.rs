//! How the current document was loaded.
//!
//! Mirrors the Navigation Timing `type` values. Hosts that cannot report
//! them return `None`, which the guard treats as an ordinary navigation.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationKind {
    Navigate,
    Reload,
    BackForward,
    Prerender,
}

impl NavigationKind {
    /// Parse a Navigation Timing `type` string.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "navigate" => Some(Self::Navigate),
            "reload" => Some(Self::Reload),
            "back_forward" => Some(Self::BackForward),
            "prerender" => Some(Self::Prerender),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Navigate => "navigate",
            Self::Reload => "reload",
            Self::BackForward => "back_forward",
            Self::Prerender => "prerender",
        }
    }
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the current page's navigation kind.
pub trait NavigationContext {
    fn kind(&self) -> Option<NavigationKind>;
}

/// Whether the page was loaded by a reload.
pub fn is_reload(ctx: &dyn NavigationContext) -> bool {
    ctx.kind() == Some(NavigationKind::Reload)
}

/// Navigation context with a preset answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FixedNavigation(pub Option<NavigationKind>);

impl FixedNavigation {
    pub fn reload() -> Self {
        Self(Some(NavigationKind::Reload))
    }

    pub fn navigate() -> Self {
        Self(Some(NavigationKind::Navigate))
    }

    /// No timing information available.
    pub fn unknown() -> Self {
        Self(None)
    }
}

impl NavigationContext for FixedNavigation {
    fn kind(&self) -> Option<NavigationKind> {
        self.0
    }
}
