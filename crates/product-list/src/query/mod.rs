mod store;

pub use self::store::ProductQuery;
