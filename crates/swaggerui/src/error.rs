// Copyright 2025 Alexandre D. Díaz
use std::io;

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid JSON value: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("cannot unmarshal value as YAML or JSON: {0}")]
    InvalidSpec(String),
    #[error("error reading spec file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to render template: {0}")]
    Template(#[from] minijinja::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(err) if err.kind() == io::ErrorKind::NotFound)
    }
}
