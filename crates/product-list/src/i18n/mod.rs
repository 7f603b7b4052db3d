mod static_translator;

pub use self::static_translator::StaticTranslator;

pub mod keys {
    pub const DELETE_CONFIRM: &str = "common:deleteConfirm";
    pub const ACTIVE: &str = "common:active";
    pub const EDIT: &str = "common:edit";
    pub const LOADING: &str = "products:loading";
    pub const EMPTY: &str = "products:empty";
    pub const CREATE: &str = "products:create";
}
