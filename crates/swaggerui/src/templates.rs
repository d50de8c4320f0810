// Copyright 2025 Alexandre D. Díaz
use std::path::PathBuf;

use minijinja::{path_loader, Environment};
use minijinja_autoreload::AutoReloader;

pub static INDEX_TEMPLATE: &str = "index.html";
pub static INITIALIZER_TEMPLATE: &str = "swagger-initializer.js";
pub static ERROR_TEMPLATE: &str = "pages/error.html";

/// Templates compiled into the crate.
pub fn embedded_template(name: &str) -> Option<&'static str> {
    match name {
        "index.html" => Some(include_str!("../templates/index.html")),
        "swagger-initializer.js" => Some(include_str!("../templates/swagger-initializer.js")),
        "pages/error.html" => Some(include_str!("../templates/pages/error.html")),
        _ => None,
    }
}

pub fn new_environment(tmpl_path: Option<PathBuf>) -> Environment<'static> {
    let mut env: Environment<'static> = Environment::new();
    match tmpl_path {
        // Files in the override directory shadow the embedded templates.
        Some(path) => {
            let fs_loader = path_loader(path);
            env.set_loader(move |name| match fs_loader(name)? {
                Some(source) => Ok(Some(source)),
                None => Ok(embedded_template(name).map(|x| x.to_string())),
            });
        }
        None => env.set_loader(|name| Ok(embedded_template(name).map(|x| x.to_string()))),
    }
    env
}

/// The closure is invoked every time the environment is outdated to recreate it.
/// Nothing is watched unless `autoreload` is set and an override directory is given.
pub fn new_reloader(tmpl_path: Option<PathBuf>, autoreload: bool) -> AutoReloader {
    AutoReloader::new(move |notifier| {
        if autoreload {
            if let Some(path) = &tmpl_path {
                notifier.watch_path(path, true);
            }
        }
        Ok(new_environment(tmpl_path.clone()))
    })
}
