// Copyright 2025 Alexandre D. Díaz
use actix_web::{
    http::{header, StatusCode},
    HttpRequest, HttpResponse, Responder,
};

use swaggerui::renderer::MiniJinjaRenderer;
use swaggerui::templates::ERROR_TEMPLATE;

/// Default service of the app: requests outside the Swagger UI mount path.
///
/// Errors answered by the Swagger UI service itself keep their plain text body.
pub async fn default_service(req: HttpRequest) -> HttpResponse {
    error_page(&req, StatusCode::NOT_FOUND, "Page not found")
}

/// Renders `pages/error.html`, or a plain text body when the template can't be used.
fn error_page(req: &HttpRequest, status: StatusCode, error: &str) -> HttpResponse {
    let plain_text = || {
        HttpResponse::build(status)
            .content_type(header::ContentType::plaintext())
            .body(error.to_string())
    };

    let tmpl_env = match MiniJinjaRenderer::from_req(req) {
        Ok(tmpl_env) => tmpl_env,
        Err(_) => return plain_text(),
    };
    let ctx = minijinja::context! {
        error => error,
        status_code => status.as_str(),
    };
    match tmpl_env.render(ERROR_TEMPLATE, ctx) {
        Ok(body) => body
            .customize()
            .with_status(status)
            .respond_to(req)
            .map_into_boxed_body(),
        Err(_) => plain_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{dev::ServiceResponse, test, web, App};
    use pretty_assertions::assert_eq;
    use swaggerui::{handler, templates::new_reloader, UiConfig};

    fn content_type(res: &ServiceResponse) -> String {
        res.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|x| x.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn renders_error_page() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(new_reloader(None, false)))
                .default_service(web::to(default_service)),
        )
        .await;
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&res), "text/html; charset=utf-8");
        let body = test::read_body(res).await;
        let body = String::from_utf8_lossy(&body);
        assert!(body.contains("<h1>404</h1>"));
        assert!(body.contains("Page not found"));
    }

    #[actix_web::test]
    async fn falls_back_to_plain_text() {
        let app = test::init_service(App::new().default_service(web::to(default_service))).await;
        let req = test::TestRequest::get().uri("/nowhere").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = test::read_body(res).await;
        assert_eq!(body, "Page not found");
    }

    #[actix_web::test]
    async fn swagger_ui_errors_stay_plain_text() {
        let missing = std::env::temp_dir().join(format!("swaggerui-server-{}-missing.yaml", std::process::id()));
        let tmpl_reloader = web::Data::new(new_reloader(None, false));
        let app = test::init_service(
            App::new()
                .app_data(tmpl_reloader.clone())
                .service(handler::scope(
                    "/swagger-ui",
                    UiConfig::new().with_spec_file_path(&missing),
                    tmpl_reloader.clone(),
                ))
                .default_service(web::to(default_service)),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/swagger-ui/swagger-initializer.js")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(content_type(&res), "text/plain; charset=utf-8");
        let body = test::read_body(res).await;
        assert!(!String::from_utf8_lossy(&body).contains("Page not found"));
    }
}
