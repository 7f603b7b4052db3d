mod confirm;
mod data_source;
mod mutation;
mod notifier;
mod translate;

pub use self::confirm::{ConfirmationGate, DynConfirmationGate};
pub use self::data_source::{DynProductDataSource, ProductDataSource};
pub use self::mutation::{DynProductMutation, ProductMutation};
pub use self::notifier::{DynNotifier, Notifier};
pub use self::translate::{DynTranslator, Translator};
