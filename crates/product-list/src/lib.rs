pub mod abstract_trait;
pub mod client;
pub mod confirm;
pub mod di;
pub mod domain;
pub mod handler;
pub mod i18n;
pub mod model;
pub mod notifier;
pub mod query;
pub mod service;
