// PsycheSphere - API Core
//
// Backend for a psychology blogging platform with reader and writer views.
// All state lives in one in-memory snapshot owned by the kernel controller;
// domains apply commands to it as pure transitions.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
