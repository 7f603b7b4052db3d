use std::sync::Arc;

pub type DynConfirmationGate = Arc<dyn ConfirmationGate + Send + Sync>;

/// Asks the user to approve a destructive action, returning `true` only on
/// explicit approval. Implementations may block; callers run them off the
/// async workers.
pub trait ConfirmationGate {
    fn confirm(&self, prompt: &str) -> bool;
}
