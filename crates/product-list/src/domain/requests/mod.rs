mod delete;

pub use self::delete::DeleteRequest;
