pub mod boundary;
pub mod config;
pub mod describe;
pub mod error;
pub mod manifest;
pub mod scripts;
pub mod ui;
pub mod version;

pub use error::{DevscriptsError, Result};
pub use version::{resolve, resolve_from};
