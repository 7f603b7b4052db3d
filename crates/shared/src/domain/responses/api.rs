use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct ApiMeta {
    #[serde(default)]
    pub message: Option<String>,
}

/// Envelope every product API endpoint answers with. All parts are optional:
/// a delete may answer with an empty body.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub status: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub meta: Option<ApiMeta>,
}

impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            status: None,
            data: None,
            meta: None,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            status: Some("success".to_string()),
            data: None,
            meta: Some(ApiMeta {
                message: Some(message.into()),
            }),
        }
    }

    pub fn with_data(data: T) -> Self {
        Self {
            status: Some("success".to_string()),
            data: Some(data),
            meta: None,
        }
    }

    /// Human readable message from `meta.message`; blank strings count as absent.
    pub fn message(&self) -> Option<&str> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.message.as_deref())
            .filter(|m| !m.trim().is_empty())
    }
}

impl<T: fmt::Debug> fmt::Display for ApiResponse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ApiResponse {{ status: {:?}, message: {:?}, data: {:?} }}",
            self.status,
            self.message(),
            self.data
        )
    }
}
