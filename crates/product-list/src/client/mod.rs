mod http;

pub use self::http::HttpProductClient;
