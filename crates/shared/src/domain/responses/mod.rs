mod api;

pub use self::api::{ApiMeta, ApiResponse};
