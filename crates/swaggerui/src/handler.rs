// Copyright 2025 Alexandre D. Díaz
//! actix-web service serving the Swagger UI page.
//!
//! Every request below the mount path gets one of three answers: the rendered
//! initializer script, a file of the local `dist` directory when one is
//! configured, or the `index.html` page. Unknown file names fall back to the
//! page so the service also works when mounted on a path without a trailing
//! slash (e.g. `/docs`, where the requested "file" would be `docs`).
use actix_files::NamedFile;
use actix_web::{http::header, web, HttpRequest, HttpResponse, Scope};
use minijinja::context;
use minijinja_autoreload::AutoReloader;

use crate::config::UiConfig;
use crate::error::Error;
use crate::initializer::ViewerConfig;
use crate::renderer::MiniJinjaRenderer;
use crate::templates::{INDEX_TEMPLATE, INITIALIZER_TEMPLATE};

pub struct SwaggerUiState {
    config: UiConfig,
    base_path: String,
}

impl SwaggerUiState {
    pub fn new(mount_path: &str, config: UiConfig) -> SwaggerUiState {
        SwaggerUiState {
            config,
            base_path: format!("{}/", mount_path.trim_end_matches('/')),
        }
    }

    pub fn get_base_path(&self) -> &String {
        &self.base_path
    }

    /// Where the page loads the viewer bundle from. A local `dist` directory is
    /// served from the mount path itself.
    fn get_assets_url(&self) -> String {
        if self.config.get_dist_dir().is_some() {
            self.base_path.trim_end_matches('/').to_string()
        } else {
            self.config.get_assets_url().clone()
        }
    }
}

/// Builds the service mounted at `mount_path`.
pub fn scope(mount_path: &str, config: UiConfig, tmpl_env: web::Data<AutoReloader>) -> Scope {
    let state = SwaggerUiState::new(mount_path, config);
    web::scope(mount_path.trim_end_matches('/'))
        .app_data(web::Data::new(state))
        .app_data(tmpl_env)
        .default_service(web::to(route))
}

pub async fn route(
    req: HttpRequest,
    state: web::Data<SwaggerUiState>,
    tmpl_env: MiniJinjaRenderer,
) -> HttpResponse {
    let file_name = requested_file(req.path());
    if file_name == INITIALIZER_TEMPLATE {
        return render_initializer(&state, &tmpl_env);
    }
    if file_name != INDEX_TEMPLATE && !file_name.starts_with('.') {
        if let Some(dist_dir) = state.config.get_dist_dir() {
            let file_path = dist_dir.join(file_name);
            if file_path.is_file() {
                return match NamedFile::open(&file_path) {
                    Ok(file) => file.into_response(&req),
                    Err(err) => {
                        log::error!("error reading file: {}", err);
                        send_error(&Error::Io(err))
                    }
                };
            }
        }
    }
    render_index(&state, &tmpl_env)
}

/// Last path segment, `index.html` when empty.
pub fn requested_file(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or_default().trim();
    if file_name.is_empty() {
        return INDEX_TEMPLATE;
    }
    file_name
}

fn render_index(state: &SwaggerUiState, tmpl_env: &MiniJinjaRenderer) -> HttpResponse {
    let ctx = context!(
        html_title => state.config.get_html_title(),
        assets_url => state.get_assets_url(),
        base_path => state.get_base_path(),
    );
    match tmpl_env.render_to_string(INDEX_TEMPLATE, ctx) {
        Ok(body) => HttpResponse::Ok()
            .content_type(header::ContentType::html())
            .body(body),
        Err(err) => {
            log::error!("failed to use Swagger UI template: {}", err);
            send_error(&err)
        }
    }
}

fn render_initializer(state: &SwaggerUiState, tmpl_env: &MiniJinjaRenderer) -> HttpResponse {
    // The spec file, if any, is read again on every request.
    let viewer_config = match state
        .config
        .raw_fields()
        .and_then(|raw| ViewerConfig::from_raw(&raw))
    {
        Ok(viewer_config) => viewer_config,
        Err(err) => {
            log::error!("error preparing Swagger UI configuration: {}", err);
            return send_error(&err);
        }
    };
    match tmpl_env.render_to_string(INITIALIZER_TEMPLATE, context!(viewer_config => viewer_config)) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/javascript; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("failed to use Swagger UI template: {}", err);
            send_error(&err)
        }
    }
}

fn send_error(err: &Error) -> HttpResponse {
    let mut res = if err.is_not_found() {
        HttpResponse::NotFound()
    } else {
        HttpResponse::InternalServerError()
    };
    res.content_type(header::ContentType::plaintext())
        .insert_header((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .body(err.to_string())
}
