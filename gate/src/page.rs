//! The host page as the guard sees it.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::cell::RefCell;

use crate::error::GateError;

/// Side effects the guard performs on the current page.
pub trait PageSurface {
    /// Scheme, host and port of the current document.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be read.
    fn origin(&self) -> Result<String, GateError>;

    /// Show a blocking notice; returns once the user dismissed it.
    fn notify(&self, message: &str);

    /// Make the page body visible using the given CSS `display` value.
    ///
    /// # Errors
    ///
    /// Returns an error if the body element cannot be styled.
    fn reveal(&self, display: &str) -> Result<(), GateError>;

    /// Send the browser to `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location cannot be assigned.
    fn navigate(&self, url: &str) -> Result<(), GateError>;
}

/// Whether a `document.readyState` value means the `load` event has
/// already fired, so waiting for it would never run the guard.
pub fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Notified(String),
    Revealed(String),
    Navigated(String),
}

/// Page double that records every side effect in order.
#[derive(Debug)]
pub struct RecordingPage {
    origin: Option<String>,
    events: RefCell<Vec<PageEvent>>,
}

impl RecordingPage {
    pub fn new(origin: &str) -> Self {
        Self { origin: Some(origin.to_owned()), events: RefCell::new(Vec::new()) }
    }

    /// Page whose location cannot be read.
    pub fn without_origin() -> Self {
        Self { origin: None, events: RefCell::new(Vec::new()) }
    }

    pub fn events(&self) -> Vec<PageEvent> {
        self.events.borrow().clone()
    }

    pub fn revealed(&self) -> bool {
        self.events.borrow().iter().any(|e| matches!(e, PageEvent::Revealed(_)))
    }

    /// Last URL navigated to, if any.
    pub fn location(&self) -> Option<String> {
        self.events.borrow().iter().rev().find_map(|e| match e {
            PageEvent::Navigated(url) => Some(url.clone()),
            _ => None,
        })
    }

    fn push(&self, event: PageEvent) {
        self.events.borrow_mut().push(event);
    }
}

impl PageSurface for RecordingPage {
    fn origin(&self) -> Result<String, GateError> {
        self.origin.clone().ok_or(GateError::Unavailable("location"))
    }

    fn notify(&self, message: &str) {
        self.push(PageEvent::Notified(message.to_owned()));
    }

    fn reveal(&self, display: &str) -> Result<(), GateError> {
        self.push(PageEvent::Revealed(display.to_owned()));
        Ok(())
    }

    fn navigate(&self, url: &str) -> Result<(), GateError> {
        self.push(PageEvent::Navigated(url.to_owned()));
        Ok(())
    }
}
