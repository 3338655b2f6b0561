pub mod auth;
pub mod comment;
pub mod post;
pub mod storage;
pub mod user;

mod router;
pub use router::get_router;
