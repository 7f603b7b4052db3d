mod controller;
mod view_handle;

pub use self::controller::{
    DeleteTask, ListMutationController, ListMutationControllerDeps, UNKNOWN_ERROR,
};
pub use self::view_handle::ViewHandle;
