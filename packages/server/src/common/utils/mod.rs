pub mod content;
pub mod sanitize;

pub use content::*;
pub use sanitize::*;
