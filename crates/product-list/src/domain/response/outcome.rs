/// How a delete request ended. Informational only: every failure has
/// already been reported through the notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Declined,
    AlreadyPending,
    Deleted { message: Option<String> },
    Failed { message: String },
    /// The mutation resolved after the view was torn down.
    Detached,
}
