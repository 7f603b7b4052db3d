use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("API error ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Api { status: u16, message: Option<String> },

    #[error("Decode error: {0}")]
    Decode(String),
}

impl ClientError {
    /// Message the server attached to the failure, if any. Transport and
    /// decode failures never carry one.
    pub fn user_message(&self) -> Option<String> {
        match self {
            ClientError::Api { message, .. } => message
                .as_deref()
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_string),
            ClientError::Transport(_) | ClientError::Decode(_) => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
