use crate::domain::response::FeedbackEvent;
use std::sync::Arc;

pub type DynNotifier = Arc<dyn Notifier + Send + Sync>;

pub trait Notifier {
    fn emit(&self, event: FeedbackEvent);
}
