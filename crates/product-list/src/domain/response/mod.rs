mod event;
mod outcome;
mod view;

pub use self::event::{FeedbackEvent, Severity};
pub use self::outcome::DeleteOutcome;
pub use self::view::{EditAction, ImageView, PLACEHOLDER, ProductListView, ProductRow};
