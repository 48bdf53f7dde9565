// Business domains
pub mod assist;
pub mod feed;
pub mod notifications;
pub mod posts;
pub mod profile;
pub mod reader;
pub mod studio;
