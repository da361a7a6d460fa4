use async_trait::async_trait;

/// Destructive-confirmation prompt.
///
/// The UI stays responsive while the prompt is open, so the answer arrives
/// asynchronously. `true` proceeds with the destructive action, `false`
/// cancels it with no effect.
#[async_trait]
pub trait ConfirmDialog: Send + Sync {
    async fn confirm(&self, title: &str, message: &str) -> bool;
}
