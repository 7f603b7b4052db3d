use crate::{
    abstract_trait::Notifier,
    domain::response::{FeedbackEvent, Severity},
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{error, info, warn};

/// Writes feedback to the log only.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn emit(&self, event: FeedbackEvent) {
        match event.severity {
            Severity::Success => info!("✅ {}", event.message),
            Severity::Error => error!("❌ {}", event.message),
        }
    }
}

/// Forwards feedback to whoever holds the receiver, typically the host's
/// toast surface.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: UnboundedSender<FeedbackEvent>,
}

impl ChannelNotifier {
    pub fn new() -> (Self, UnboundedReceiver<FeedbackEvent>) {
        let (tx, rx) = unbounded_channel();
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn emit(&self, event: FeedbackEvent) {
        if let Err(e) = self.tx.send(event) {
            warn!("Feedback dropped, receiver closed: {}", e.0.message);
        }
    }
}
