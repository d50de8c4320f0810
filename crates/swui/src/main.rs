// Copyright 2025 Alexandre D. Díaz
mod config;

use std::env;
use std::io;
use std::process::{self, Command};

use actix_web::{middleware::Logger, web, App, HttpServer};

use config::SwuiConfig;
use swaggerui::{handler, templates};

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let config = match SwuiConfig::new(env::args().collect()) {
        Ok(config) => config,
        Err(code) => process::exit(code),
    };

    if config.get_spec_file_path().is_empty() {
        println!("Usage: swui <path-to-schema>");
        println!("Run 'swui --help' for the list of options.");
        return Ok(());
    }

    let ui_config = config.ui_config();
    let tmpl_reloader = web::Data::new(templates::new_reloader(None, false));
    let server = HttpServer::new(move || {
        App::new()
            .app_data(tmpl_reloader.clone())
            .service(handler::scope("/", ui_config.clone(), tmpl_reloader.clone()))
            .wrap(Logger::default())
    })
    .workers(1)
    .bind(("127.0.0.1", *config.get_port()))?;

    let url = match server.addrs().first() {
        Some(addr) => format!("http://{}/", addr),
        None => return Err(io::Error::new(io::ErrorKind::AddrNotAvailable, "no address bound")),
    };
    log::info!("starting Swagger UI server at {}", url);
    log::info!("press Ctrl+C to stop");

    if config.get_open_browser() {
        if let Err(err) = open_browser(&url) {
            log::error!("failed to open browser: {}", err);
        }
    }

    server.run().await
}

fn open_browser(url: &str) -> io::Result<()> {
    let (cmd, mut args): (&str, Vec<&str>) = if cfg!(target_os = "windows") {
        ("cmd", vec!["/c", "start"])
    } else if cfg!(target_os = "macos") {
        ("open", Vec::new())
    } else {
        ("xdg-open", Vec::new())
    };
    args.push(url);
    Command::new(cmd).args(args).spawn()?;
    Ok(())
}
