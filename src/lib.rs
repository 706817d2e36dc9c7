pub mod config;
pub mod data;
pub mod error;
pub mod table;
pub mod utils;

pub use error::{ProctableError, Result};
