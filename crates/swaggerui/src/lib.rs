// Copyright 2025 Alexandre D. Díaz
pub mod config;
pub mod conversion;
pub mod error;
pub mod handler;
pub mod initializer;
pub mod normalizer;
pub mod renderer;
pub mod templates;

pub use config::UiConfig;
pub use error::{Error, Result};
pub use initializer::{RawFields, ViewerConfig};
