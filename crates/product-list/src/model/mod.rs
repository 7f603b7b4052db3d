mod product;

pub use self::product::{LocalizedTitle, Product};
