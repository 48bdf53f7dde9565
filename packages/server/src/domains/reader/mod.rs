//! Reader domain - the detail view of one post

pub mod data;
pub mod detail;
pub mod session;

pub use detail::PostDetail;
pub use session::ReaderSession;
