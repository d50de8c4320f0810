// Copyright 2025 Alexandre D. Díaz
mod config;
mod middlewares;

use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use config::SERVER_CONFIG;
use middlewares::not_found;
use swaggerui::{handler, templates};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // MiniJinja
    if SERVER_CONFIG.get_template_autoreload() {
        log::info!("template auto-reloading is enabled");
    } else {
        log::info!(
            "template auto-reloading is disabled; run with SWAGGERUI_TEMPLATE_AUTORELOAD=true to enable"
        );
    }
    let tmpl_reloader = templates::new_reloader(
        SERVER_CONFIG.get_templates_path().cloned(),
        SERVER_CONFIG.get_template_autoreload(),
    );
    let tmpl_reloader = web::Data::new(tmpl_reloader);

    log::info!(
        "starting HTTP server at http://{}:{}{}",
        &SERVER_CONFIG.get_bind_address(),
        &SERVER_CONFIG.get_port(),
        &SERVER_CONFIG.get_mount_path()
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin_fn(|origin, _req_head| {
                SERVER_CONFIG.is_allowed_origin(origin.to_str().unwrap_or(""))
            })
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .max_age(3600);

        App::new()
            .app_data(tmpl_reloader.clone())
            .service(handler::scope(
                SERVER_CONFIG.get_mount_path(),
                SERVER_CONFIG.get_ui_config().clone(),
                tmpl_reloader.clone(),
            ))
            .default_service(web::to(not_found::default_service))
            .wrap(cors)
            .wrap(Logger::default())
    })
    .bind((SERVER_CONFIG.get_bind_address().clone(), *SERVER_CONFIG.get_port()))?
    .workers(*SERVER_CONFIG.get_workers())
    .run()
    .await
}
