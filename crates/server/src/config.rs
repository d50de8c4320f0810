// Copyright 2025 Alexandre D. Díaz
use std::path::PathBuf;

use config::Config;
use lazy_static::lazy_static;
use url::Url;

use swaggerui::config::{DocExpansion, Layout, SpecUrl, UiConfig};

#[derive(Debug)]
pub struct SwaggerUiServerConfig {
    bind_address: String,
    port: u16,
    workers: usize,
    template_autoreload: bool,
    templates_path: Option<PathBuf>,
    allowed_origins: Vec<Url>,
    mount_path: String,
    ui_config: UiConfig,
}

impl SwaggerUiServerConfig {
    pub fn new() -> SwaggerUiServerConfig {
        let settings = Config::builder()
            .add_source(config::File::with_name("./swaggerui").required(false))
            .add_source(config::Environment::with_prefix("SWAGGERUI"))
            .build()
            .unwrap_or_else(|err| panic!("Invalid server configuration: {err}"));
        SwaggerUiServerConfig::from_settings(&settings)
    }

    pub fn from_settings(settings: &Config) -> SwaggerUiServerConfig {
        let bind_address = settings
            .get_string("bind_address")
            .unwrap_or("0.0.0.0".to_string());
        let port = get_number::<u16>(settings, "port").unwrap_or(8080);
        let workers = get_number::<usize>(settings, "workers")
            .filter(|x| *x > 0)
            .unwrap_or(2);
        let template_autoreload = settings.get_bool("template_autoreload").unwrap_or(false);
        let templates_path = settings.get_string("templates_path").ok().map(PathBuf::from);
        let allowed_origins = settings
            .get_array("allowed_origins")
            .unwrap_or_else(|_| Vec::new())
            .iter()
            .filter_map(|x| match Url::parse(&x.to_string()) {
                Ok(url) => Some(url),
                Err(err) => {
                    log::warn!("ignoring allowed origin '{}': {}", x, err);
                    None
                }
            })
            .collect::<Vec<Url>>();
        let mount_path = settings
            .get_string("mount_path")
            .unwrap_or("/swagger-ui".to_string());
        let ui_config = ui_config_from_settings(settings);
        SwaggerUiServerConfig {
            bind_address,
            port,
            workers,
            template_autoreload,
            templates_path,
            allowed_origins,
            mount_path,
            ui_config,
        }
    }

    pub fn get_bind_address(&self) -> &String {
        &self.bind_address
    }

    pub fn get_port(&self) -> &u16 {
        &self.port
    }

    pub fn get_workers(&self) -> &usize {
        &self.workers
    }

    pub fn get_template_autoreload(&self) -> bool {
        self.template_autoreload
    }

    pub fn get_templates_path(&self) -> Option<&PathBuf> {
        self.templates_path.as_ref()
    }

    pub fn get_allowed_origins(&self) -> &Vec<Url> {
        &self.allowed_origins
    }

    pub fn is_allowed_origin(&self, origin: &str) -> bool {
        if self.get_allowed_origins().is_empty() {
            return true;
        }
        let url = match Url::parse(origin) {
            Ok(url) => url,
            Err(_) => return false,
        };
        for origin_url in self.get_allowed_origins() {
            if origin_url.scheme() == url.scheme()
                && origin_url.domain() == url.domain()
                && origin_url.port() == url.port()
            {
                return true;
            }
        }
        false
    }

    pub fn get_mount_path(&self) -> &String {
        &self.mount_path
    }

    pub fn get_ui_config(&self) -> &UiConfig {
        &self.ui_config
    }
}

/// Integer setting converted to `T`. Out of range values are ignored with a warning.
fn get_number<T: TryFrom<i64>>(settings: &Config, key: &str) -> Option<T> {
    let value = settings.get_int(key).ok()?;
    match T::try_from(value) {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("ignoring out of range '{}' value: {}", key, value);
            None
        }
    }
}

fn ui_config_from_settings(settings: &Config) -> UiConfig {
    let mut ui_config = UiConfig::new();
    if let Ok(title) = settings.get_string("title") {
        ui_config = ui_config.with_html_title(&title);
    }
    if let Ok(spec_url) = settings.get_string("spec_url") {
        ui_config = ui_config.with_spec_url(&spec_url);
    }
    if let Ok(spec_file) = settings.get_string("spec_file") {
        ui_config = ui_config.with_spec_file_path(spec_file);
    }
    if let Ok(urls) = settings.get_table("urls") {
        let mut spec_urls = urls
            .iter()
            .map(|(name, url)| SpecUrl::new(name, &url.to_string()))
            .collect::<Vec<SpecUrl>>();
        spec_urls.sort_by(|a, b| a.name.cmp(&b.name));
        let primary = settings.get_string("urls_primary").unwrap_or_default();
        ui_config = ui_config.with_spec_urls(&primary, spec_urls);
    }
    match settings.get_string("doc_expansion").map(|x| x.parse::<DocExpansion>()) {
        Ok(Ok(doc_expansion)) => ui_config = ui_config.with_doc_expansion(doc_expansion),
        Ok(Err(err)) => log::warn!("{}", err),
        Err(_) => {}
    }
    match settings.get_string("layout").map(|x| x.parse::<Layout>()) {
        Ok(Ok(layout)) => ui_config = ui_config.with_layout(layout),
        Ok(Err(err)) => log::warn!("{}", err),
        Err(_) => {}
    }
    if let Ok(deep_linking) = settings.get_bool("deep_linking") {
        ui_config = ui_config.with_deep_linking(deep_linking);
    }
    if let Ok(persist_authorization) = settings.get_bool("persist_authorization") {
        ui_config = ui_config.with_persist_authorization(persist_authorization);
    }
    if let Ok(try_it_out_enabled) = settings.get_bool("try_it_out_enabled") {
        ui_config = ui_config.with_try_it_out_enabled(try_it_out_enabled);
    }
    if let Ok(display_request_duration) = settings.get_bool("display_request_duration") {
        ui_config = ui_config.with_display_request_duration(display_request_duration);
    }
    if let Ok(filter) = settings.get_bool("filter") {
        let expression = settings.get_string("filter_expression").unwrap_or_default();
        ui_config = ui_config.with_filter(filter, &expression);
    }
    if let Ok(methods) = settings.get_string("supported_submit_methods") {
        let methods = methods.split(',').map(|x| x.trim()).collect::<Vec<&str>>();
        ui_config = ui_config.with_supported_submit_methods(&methods);
    }
    if let Ok(assets_url) = settings.get_string("assets_url") {
        ui_config = ui_config.with_assets_url(&assets_url);
    }
    if let Ok(dist_dir) = settings.get_string("dist_dir") {
        ui_config = ui_config.with_dist_dir(dist_dir);
    }
    ui_config
}

lazy_static! {
    pub static ref SERVER_CONFIG: SwaggerUiServerConfig = SwaggerUiServerConfig::new();
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;
    use pretty_assertions::assert_eq;
    use swaggerui::ViewerConfig;

    fn from_toml(content: &str) -> SwaggerUiServerConfig {
        let settings = Config::builder()
            .add_source(config::File::from_str(content, FileFormat::Toml))
            .build()
            .unwrap();
        SwaggerUiServerConfig::from_settings(&settings)
    }

    #[test]
    fn defaults() {
        let config = from_toml("");
        assert_eq!(config.get_bind_address(), "0.0.0.0");
        assert_eq!(*config.get_port(), 8080);
        assert_eq!(*config.get_workers(), 2);
        assert_eq!(config.get_mount_path(), "/swagger-ui");
        assert!(!config.get_template_autoreload());
        assert!(config.get_templates_path().is_none());
        assert!(config.is_allowed_origin("https://example.com"));
        assert_eq!(config.get_ui_config().get_html_title(), "Swagger UI");
    }

    #[test]
    fn out_of_range_numbers_use_defaults() {
        let config = from_toml("port = 70000\nworkers = -1");
        assert_eq!(*config.get_port(), 8080);
        assert_eq!(*config.get_workers(), 2);

        let config = from_toml("port = 9000\nworkers = 0");
        assert_eq!(*config.get_port(), 9000);
        assert_eq!(*config.get_workers(), 2);
    }

    #[test]
    fn allowed_origins() {
        let config = from_toml(r#"allowed_origins = ["https://docs.example.com", "not an url"]"#);
        assert_eq!(config.get_allowed_origins().len(), 1);
        assert!(config.is_allowed_origin("https://docs.example.com"));
        assert!(!config.is_allowed_origin("http://docs.example.com"));
        assert!(!config.is_allowed_origin("https://other.example.com"));
        assert!(!config.is_allowed_origin("garbage"));
    }

    #[test]
    fn ui_settings() {
        let config = from_toml(
            r#"
            title = "Petstore"
            spec_url = "https://petstore.swagger.io/v2/swagger.json"
            doc_expansion = "full"
            layout = "everything"
            deep_linking = true
            filter = true
            filter_expression = "pet"
            supported_submit_methods = "get, post"

            [urls]
            petstore = "https://petstore.swagger.io/v2/swagger.json"
            example = "https://example.com/openapi.json"
            "#,
        );
        let ui_config = config.get_ui_config();
        assert_eq!(ui_config.get_html_title(), "Petstore");

        let viewer_config = ViewerConfig::from_raw(&ui_config.raw_fields().unwrap()).unwrap();
        assert_eq!(viewer_config.doc_expansion.as_deref(), Some("full"));
        assert_eq!(viewer_config.layout, "BaseLayout");
        assert_eq!(viewer_config.deep_linking, Some(true));
        assert_eq!(viewer_config.supported_submit_methods, vec!["get", "post"]);
        assert_eq!(
            viewer_config.urls,
            Some(serde_json::json!([
                {"name": "example", "url": "https://example.com/openapi.json"},
                {"name": "petstore", "url": "https://petstore.swagger.io/v2/swagger.json"},
            ]))
        );
    }
}
