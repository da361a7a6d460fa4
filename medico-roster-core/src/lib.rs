//! # medico-roster-core
//!
//! Screen state machines for a doctor-roster management app:
//! - a creation screen (draft → validate → submit → reset),
//! - a list screen (fetch on focus → render → confirm-delete → refetch),
//! - a pure record-card summary for rendering one doctor.
//!
//! This library is platform-independent: the HTTP transport, the alert
//! surface and the confirmation prompt are abstracted through traits, so
//! any single-threaded UI shell can drive the screens. The screens assume a
//! cooperative event loop; they are `&mut self` state machines whose only
//! outputs are their own state and [`Notification`]s.
//!
//! The two screens never talk to each other. They coordinate exclusively
//! through the shared remote collection, each holding its own ephemeral
//! state (a draft, a list mirror) that is discarded on unmount.

pub mod card;
pub mod error;
pub mod screens;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use card::DoctorCard;
pub use error::{CoreError, CoreResult};
pub use screens::{CreateScreen, ListScreen, ScreenContext, EMPTY_MESSAGE};
pub use traits::{ConfirmDialog, Notifier};
pub use types::{Notification, NotificationKind};
