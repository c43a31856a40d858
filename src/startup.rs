//! Startup decisions shared by the browser entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! `wiring` consults these before touching the page, so the once-only start
//! and the readiness check run the same way on the host as in the browser.

#[cfg(test)]
#[path = "startup_test.rs"]
mod startup_test;

use std::cell::Cell;

/// `document.readyState` while the markup is still being parsed.
pub const LOADING: &str = "loading";

/// Whether the initial switch sync can run now.
///
/// `DOMContentLoaded` has already fired once the document is past
/// `loading`, so waiting for it would never run the sync.
pub fn sync_now(ready_state: &str) -> bool {
    ready_state != LOADING
}

/// Guard letting exactly one `start` register page listeners.
#[derive(Debug, Default)]
pub struct StartGuard {
    claimed: Cell<bool>,
}

impl StartGuard {
    pub const fn new() -> Self {
        Self {
            claimed: Cell::new(false),
        }
    }

    /// Claim the page. Returns `false` when an earlier start already did.
    ///
    /// The claim holds even if the claiming start later fails, so a retry
    /// can never stack a second set of listeners on the page.
    pub fn claim(&self) -> bool {
        !self.claimed.replace(true)
    }

    pub fn is_claimed(&self) -> bool {
        self.claimed.get()
    }
}
