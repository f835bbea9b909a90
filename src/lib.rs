pub mod config;
pub mod error;
pub mod gemini;
pub mod image;
pub mod server;

pub use error::{Error, Result};
