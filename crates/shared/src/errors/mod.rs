mod client;
mod error;

pub use self::client::ClientError;
pub use self::error::ErrorResponse;
