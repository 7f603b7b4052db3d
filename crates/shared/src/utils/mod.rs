mod logs;
mod metrics;
mod nullable;
mod number;
mod otel;
mod relative_time;

pub use self::logs::init_logger;
pub use self::metrics::{Method, Metrics, Status};
pub use self::nullable::deserialize_null_default;
pub use self::number::{deserialize_number, deserialize_optional_number, format_grouped};
pub use self::otel::{Telemetry, TracingContext};
pub use self::relative_time::format_relative;
