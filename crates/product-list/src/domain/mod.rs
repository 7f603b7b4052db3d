pub mod fetch_state;
pub mod requests;
pub mod response;
pub mod route;
