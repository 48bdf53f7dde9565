pub mod author;
pub mod profile;

pub use author::Author;
pub use profile::Profile;
