pub mod auth;
pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod models;
pub mod seed;
pub mod session;

pub use error::{AppError, Result};
