//! Screen state machines
//!
//! The two screens are independent; they coordinate only through the shared
//! remote collection. Each one is a plain `&mut self` state machine meant to
//! be driven by a single-threaded UI event loop.

mod create_screen;
mod list_screen;

pub use create_screen::CreateScreen;
pub use list_screen::{ListScreen, EMPTY_MESSAGE};

use std::sync::Arc;

use medico_roster_api::DoctorApi;

use crate::traits::{ConfirmDialog, Notifier};

/// Shared screen dependencies.
///
/// The UI shell creates this once, injecting the platform-specific alert
/// and confirmation implementations, and hands it to every screen.
pub struct ScreenContext {
    /// Remote doctor collection.
    pub api: Arc<dyn DoctorApi>,
    /// Platform alert surface.
    pub notifier: Arc<dyn Notifier>,
    /// Destructive-confirmation prompt.
    pub confirm: Arc<dyn ConfirmDialog>,
}

impl ScreenContext {
    #[must_use]
    pub fn new(
        api: Arc<dyn DoctorApi>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmDialog>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
        }
    }
}
