//! Doctor list screen

use std::sync::Arc;

use medico_roster_api::Doctor;

use crate::error::CoreResult;
use crate::screens::ScreenContext;
use crate::types::Notification;

const ERROR_TITLE: &str = "Error";
const SUCCESS_TITLE: &str = "Éxito";
/// Fallback when the server provides no message of its own.
const FETCH_FAILED_MESSAGE: &str = "No se pudieron cargar los médicos";
const DELETE_TITLE: &str = "Eliminar";
const DELETE_PROMPT: &str = "¿Estás seguro de que quieres eliminar este médico?";
const DELETED_MESSAGE: &str = "Médico eliminado";
/// Deliberately generic: a failed delete must not pretend to know more
/// than "the record was not removed".
const DELETE_FAILED_MESSAGE: &str = "No se pudo eliminar el registro";

/// Shown by the UI when the collection is empty and nothing is loading.
pub const EMPTY_MESSAGE: &str = "No hay médicos disponibles";

/// Owns the local mirror of the remote collection.
///
/// The collection is fully replaced on every successful fetch and never
/// merged or spliced; after a delete, consistency is restored by refetching
/// rather than by removing the row locally. Overlapping fetches are applied
/// in arrival order (last response wins) — an accepted race, there is no
/// de-duplication of triggers.
pub struct ListScreen {
    ctx: Arc<ScreenContext>,
    doctors: Vec<Doctor>,
    loading: bool,
}

impl ListScreen {
    /// New screen with an empty collection. Nothing is fetched until the
    /// screen gains focus or is refreshed.
    #[must_use]
    pub fn new(ctx: Arc<ScreenContext>) -> Self {
        Self {
            ctx,
            doctors: Vec::new(),
            loading: false,
        }
    }

    /// The currently displayed collection.
    #[must_use]
    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    /// Whether a fetch is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the UI should show a full-screen loading indicator.
    ///
    /// Only when there is nothing to display yet; with a previous
    /// collection on screen, a fetch is non-blocking and the stale list
    /// stays visible.
    #[must_use]
    pub fn is_blocking_load(&self) -> bool {
        self.loading && self.doctors.is_empty()
    }

    /// Focus trigger: the screen became visible again (e.g. returning from
    /// the create screen).
    pub async fn on_focus(&mut self) -> CoreResult<()> {
        self.fetch_all().await
    }

    /// Manual refresh trigger. Identical path to the focus trigger.
    pub async fn refresh(&mut self) -> CoreResult<()> {
        self.fetch_all().await
    }

    /// Fetch the full collection and replace the local mirror.
    ///
    /// On failure the previously displayed collection is left unchanged
    /// and the user is notified; the screen itself never enters a fatal
    /// state from a data error.
    pub async fn fetch_all(&mut self) -> CoreResult<()> {
        self.loading = true;
        let result = self.ctx.api.list_doctors().await;
        self.loading = false;

        match result {
            Ok(doctors) => {
                log::debug!("Fetched {} doctors", doctors.len());
                self.doctors = doctors;
                Ok(())
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Fetch failed: {e}");
                } else {
                    log::error!("Fetch failed: {e}");
                }
                let message = e
                    .server_message()
                    .unwrap_or(FETCH_FAILED_MESSAGE)
                    .to_string();
                self.ctx
                    .notifier
                    .notify(Notification::error(ERROR_TITLE, message));
                Err(e.into())
            }
        }
    }

    /// Ask the user before deleting. Cancel is a no-op; confirm proceeds
    /// to [`confirm_delete`](Self::confirm_delete).
    pub async fn request_delete(&mut self, id: i64) -> CoreResult<()> {
        if !self.ctx.confirm.confirm(DELETE_TITLE, DELETE_PROMPT).await {
            log::debug!("Delete of doctor {id} cancelled");
            return Ok(());
        }
        self.confirm_delete(id).await
    }

    /// Delete by identity, then refetch.
    ///
    /// Success triggers exactly one fetch to resynchronize with the server;
    /// failure leaves the displayed collection as-is so a record that still
    /// exists server-side is never silently hidden.
    pub async fn confirm_delete(&mut self, id: i64) -> CoreResult<()> {
        match self.ctx.api.delete_doctor(id).await {
            Ok(()) => {
                self.ctx
                    .notifier
                    .notify(Notification::success(SUCCESS_TITLE, DELETED_MESSAGE));
                self.fetch_all().await
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Delete of doctor {id} failed: {e}");
                } else {
                    log::error!("Delete of doctor {id} failed: {e}");
                }
                self.ctx
                    .notifier
                    .notify(Notification::error(ERROR_TITLE, DELETE_FAILED_MESSAGE));
                Err(e.into())
            }
        }
    }
}
