//! Platform abstraction traits
//!
//! The screens never touch a rendering toolkit or platform dialog API
//! directly; the UI shell injects implementations of these seams.

mod confirm;
mod notifier;

pub use confirm::ConfirmDialog;
pub use notifier::Notifier;
