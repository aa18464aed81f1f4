pub mod commands;
pub mod auth;
pub mod task;

pub use commands::*;
