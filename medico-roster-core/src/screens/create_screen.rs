//! Doctor creation screen

use std::sync::Arc;

use medico_roster_api::{DoctorDraft, DraftField};

use crate::error::{CoreError, CoreResult};
use crate::screens::ScreenContext;
use crate::types::Notification;

const ERROR_TITLE: &str = "Error";
const SUCCESS_TITLE: &str = "Éxito";
/// One combined message for any number of empty fields.
const VALIDATION_MESSAGE: &str = "Por favor, debes rellenar cada uno de los campos.";
const CREATED_MESSAGE: &str = "Medico creado correctamente";
/// Fallback when the server provides no message of its own.
const CREATE_FAILED_MESSAGE: &str = "No se pudo crear el medico";

/// Owns a single draft record and its submission state.
///
/// Lifecycle: `idle → submitting → idle`. A successful submission resets
/// the draft to empty; a failed one leaves it untouched so the user keeps
/// their input. The draft is never persisted.
pub struct CreateScreen {
    ctx: Arc<ScreenContext>,
    draft: DoctorDraft,
    submitting: bool,
}

impl CreateScreen {
    /// New screen with an empty draft.
    #[must_use]
    pub fn new(ctx: Arc<ScreenContext>) -> Self {
        Self {
            ctx,
            draft: DoctorDraft::default(),
            submitting: false,
        }
    }

    /// The current draft.
    #[must_use]
    pub fn draft(&self) -> &DoctorDraft {
        &self.draft
    }

    /// Whether a create request is in flight. The UI disables the submit
    /// control while this holds.
    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Replace one field's value. Always succeeds.
    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Validate the draft and submit it.
    ///
    /// Any empty field fails with [`CoreError::Validation`] before a single
    /// byte hits the network; the user sees one combined message, no
    /// per-field detail. On request success the draft resets; on failure it
    /// is retained and the notification carries the server's message when
    /// present, else a generic fallback.
    pub async fn submit(&mut self) -> CoreResult<()> {
        if self.submitting {
            // The submit control is disabled while a request is in flight;
            // a re-entrant call is a no-op, not an error.
            return Ok(());
        }

        if !self.draft.is_complete() {
            log::warn!(
                "Submission rejected, empty fields: {:?}",
                self.draft.missing_fields()
            );
            self.ctx
                .notifier
                .notify(Notification::error(ERROR_TITLE, VALIDATION_MESSAGE));
            return Err(CoreError::Validation(VALIDATION_MESSAGE.to_string()));
        }

        self.submitting = true;
        let result = self.ctx.api.create_doctor(&self.draft).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                log::debug!("Doctor created, resetting draft");
                self.draft = DoctorDraft::default();
                self.ctx
                    .notifier
                    .notify(Notification::success(SUCCESS_TITLE, CREATED_MESSAGE));
                Ok(())
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Create failed: {e}");
                } else {
                    log::error!("Create failed: {e}");
                }
                let message = e
                    .server_message()
                    .unwrap_or(CREATE_FAILED_MESSAGE)
                    .to_string();
                self.ctx
                    .notifier
                    .notify(Notification::error(ERROR_TITLE, message));
                Err(e.into())
            }
        }
    }
}
