pub mod auth;
pub mod todo;

mod router;
pub use router::get_router;
