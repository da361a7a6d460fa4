//! # medico-roster-api
//!
//! HTTP client for the medico-roster backend: a single remote collection of
//! doctor records exposed over REST.
//!
//! | Operation | Method | Path | Body | Success shape |
//! |-----------|--------|------|------|---------------|
//! | Create | POST | `/doctors` | draft fields as a flat object | record or `{ datos: record }` |
//! | List | GET | `/doctors` | none | list or `{ datos: list }` |
//! | Delete | DELETE | `/doctors/{id}` | none | empty/ack |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use medico_roster_api::{ApiConfig, DoctorApi, RestDoctorApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = RestDoctorApi::new(ApiConfig::new("http://localhost:3000/api"))?;
//!
//!     for doctor in api.list_doctors().await? {
//!         println!("{} {} ({})", doctor.name, doctor.surname, doctor.specialty);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Response tolerance
//!
//! The backend is loose about response shapes: the list endpoint may answer
//! with a `{ "datos": [...] }` wrapper or a bare array. Decoding goes
//! through an explicit untagged union ([`ListPayload`]) with a catch-all
//! branch, so an unrecognized shape degrades to an empty collection instead
//! of erroring.
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Server-side
//! rejections carry the backend's optional `mensaje` text, available via
//! [`ApiError::server_message`]; transient transport failures (`Network`,
//! `Timeout`) are retried with exponential backoff on the read path only.

mod client;
mod error;
mod http;
mod types;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its seam
pub use client::{ApiConfig, DoctorApi, RestDoctorApi};

// Re-export types
pub use types::{CreatePayload, Doctor, DoctorDraft, DraftField, ListPayload};
