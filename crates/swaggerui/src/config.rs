// Copyright 2025 Alexandre D. Díaz
//! Options of the Swagger UI page.
//!
//! See <https://github.com/swagger-api/swagger-ui/blob/HEAD/docs/usage/configuration.md>
//! for the meaning of every setting on the viewer side.
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::conversion::yaml_or_json_to_json;
use crate::error::Result;
use crate::initializer::RawFields;

pub static DEFAULT_HTML_TITLE: &str = "Swagger UI";
pub static DEFAULT_ASSETS_URL: &str = "https://unpkg.com/swagger-ui-dist@5";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocExpansion {
    List,
    Full,
    None,
}

impl DocExpansion {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocExpansion::List => "list",
            DocExpansion::Full => "full",
            DocExpansion::None => "none",
        }
    }
}

impl FromStr for DocExpansion {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "list" => Ok(DocExpansion::List),
            "full" => Ok(DocExpansion::Full),
            "none" => Ok(DocExpansion::None),
            _ => Err(format!("unknown doc expansion '{}'", value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelRendering {
    Example,
    Model,
}

impl ModelRendering {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelRendering::Example => "example",
            ModelRendering::Model => "model",
        }
    }
}

impl FromStr for ModelRendering {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "example" => Ok(ModelRendering::Example),
            "model" => Ok(ModelRendering::Model),
            _ => Err(format!("unknown model rendering '{}'", value)),
        }
    }
}

/// Top-level layout component, as registered in the viewer's plugin system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    BaseLayout,
    StandaloneLayout,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::BaseLayout => "BaseLayout",
            Layout::StandaloneLayout => "StandaloneLayout",
        }
    }
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "BaseLayout" => Ok(Layout::BaseLayout),
            "StandaloneLayout" => Ok(Layout::StandaloneLayout),
            _ => Err(format!("unknown layout '{}'", value)),
        }
    }
}

/// Entry of the top bar spec selector.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SpecUrl {
    pub name: String,
    pub url: String,
}

impl SpecUrl {
    pub fn new(name: &str, url: &str) -> SpecUrl {
        SpecUrl {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UiConfig {
    html_title: String,
    assets_url: String,
    dist_dir: Option<PathBuf>,
    spec: Vec<u8>,
    spec_file_path: Option<PathBuf>,
    config_url: Option<String>,
    url: Option<String>,
    urls: Vec<SpecUrl>,
    urls_primary: Option<String>,
    layout: Option<Layout>,
    doc_expansion: Option<DocExpansion>,
    default_model_expand_depth: Option<i64>,
    default_models_expand_depth: Option<i64>,
    default_model_rendering: Option<ModelRendering>,
    query_config_enabled: Option<bool>,
    supported_submit_methods: Vec<String>,
    show_mutated_request: Option<bool>,
    deep_linking: Option<bool>,
    show_extensions: Option<bool>,
    show_common_extensions: Option<bool>,
    filter: Option<bool>,
    filter_string: Option<String>,
    display_operation_id: Option<bool>,
    try_it_out_enabled: Option<bool>,
    display_request_duration: Option<bool>,
    persist_authorization: Option<bool>,
    with_credentials: Option<bool>,
    oauth2_redirect_url: Option<String>,
    max_displayed_tags: Option<i64>,
    validator_url: Option<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig::new()
    }
}

impl UiConfig {
    pub fn new() -> UiConfig {
        UiConfig {
            html_title: DEFAULT_HTML_TITLE.to_string(),
            assets_url: DEFAULT_ASSETS_URL.to_string(),
            dist_dir: None,
            spec: Vec::new(),
            spec_file_path: None,
            config_url: None,
            url: None,
            urls: Vec::new(),
            urls_primary: None,
            layout: None,
            doc_expansion: None,
            default_model_expand_depth: None,
            default_models_expand_depth: None,
            default_model_rendering: None,
            query_config_enabled: None,
            supported_submit_methods: Vec::new(),
            show_mutated_request: None,
            deep_linking: None,
            show_extensions: None,
            show_common_extensions: None,
            filter: None,
            filter_string: None,
            display_operation_id: None,
            try_it_out_enabled: None,
            display_request_duration: None,
            persist_authorization: None,
            with_credentials: None,
            oauth2_redirect_url: None,
            max_displayed_tags: None,
            validator_url: None,
        }
    }

    /// Inline OpenAPI document (YAML or JSON). When used, the spec URL is ignored by the viewer.
    pub fn with_spec(mut self, value: &[u8]) -> Self {
        self.spec = value.to_vec();
        self
    }

    /// URL of the API definition. Ignored when an inline spec or spec URLs are set.
    pub fn with_spec_url(mut self, value: &str) -> Self {
        self.url = Some(value.to_string());
        self
    }

    /// Multiple definitions for the top bar selector. Names and URLs must be unique.
    /// `primary` names the spec shown on load; leave it empty to show the first one.
    pub fn with_spec_urls(mut self, primary: &str, urls: Vec<SpecUrl>) -> Self {
        self.urls = urls;
        if !primary.is_empty() {
            self.urls_primary = Some(primary.to_string());
        }
        self
    }

    /// Spec document read from disk on every page request. Meant for local previews only.
    pub fn with_spec_file_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.spec_file_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_doc_expansion(mut self, value: DocExpansion) -> Self {
        self.doc_expansion = Some(value);
        self
    }

    pub fn with_default_model_expand_depth(mut self, value: i64) -> Self {
        self.default_model_expand_depth = Some(value);
        self
    }

    /// `-1` hides the models section completely.
    pub fn with_default_models_expand_depth(mut self, value: i64) -> Self {
        self.default_models_expand_depth = Some(value);
        self
    }

    pub fn with_default_model_rendering(mut self, value: ModelRendering) -> Self {
        self.default_model_rendering = Some(value);
        self
    }

    pub fn with_query_config_enabled(mut self, value: bool) -> Self {
        self.query_config_enabled = Some(value);
        self
    }

    /// Methods with "Try it out" enabled. Appends to the methods already set.
    pub fn with_supported_submit_methods(mut self, methods: &[&str]) -> Self {
        self.supported_submit_methods
            .extend(methods.iter().map(|x| x.to_string()));
        self
    }

    pub fn with_deep_linking(mut self, value: bool) -> Self {
        self.deep_linking = Some(value);
        self
    }

    pub fn with_show_extensions(mut self, value: bool) -> Self {
        self.show_extensions = Some(value);
        self
    }

    pub fn with_show_common_extensions(mut self, value: bool) -> Self {
        self.show_common_extensions = Some(value);
        self
    }

    /// Shows the tag filter box. A non-empty `expression` is only kept when filtering is enabled.
    pub fn with_filter(mut self, enabled: bool, expression: &str) -> Self {
        self.filter = Some(enabled);
        if enabled && !expression.is_empty() {
            self.filter_string = Some(expression.to_string());
        }
        self
    }

    pub fn with_display_operation_id(mut self, value: bool) -> Self {
        self.display_operation_id = Some(value);
        self
    }

    pub fn with_try_it_out_enabled(mut self, value: bool) -> Self {
        self.try_it_out_enabled = Some(value);
        self
    }

    pub fn with_display_request_duration(mut self, value: bool) -> Self {
        self.display_request_duration = Some(value);
        self
    }

    pub fn with_persist_authorization(mut self, value: bool) -> Self {
        self.persist_authorization = Some(value);
        self
    }

    pub fn with_credentials(mut self, value: bool) -> Self {
        self.with_credentials = Some(value);
        self
    }

    pub fn with_oauth2_redirect_url(mut self, value: &str) -> Self {
        self.oauth2_redirect_url = Some(value.to_string());
        self
    }

    pub fn with_html_title(mut self, title: &str) -> Self {
        self.html_title = title.to_string();
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn with_max_displayed_tags(mut self, value: i64) -> Self {
        self.max_displayed_tags = Some(value);
        self
    }

    /// Validator used for the spec badge. A disabled validator leaves the setting unset.
    pub fn with_validator_url(mut self, enabled: bool, validator_url: &str) -> Self {
        self.validator_url = if enabled {
            Some(validator_url.to_string())
        } else {
            None
        };
        self
    }

    pub fn with_show_mutated_request(mut self, value: bool) -> Self {
        self.show_mutated_request = Some(value);
        self
    }

    /// URL of an external configuration document fetched by the viewer.
    pub fn with_config_url(mut self, value: &str) -> Self {
        self.config_url = Some(value.to_string());
        self
    }

    /// Base URL of the `swagger-ui-dist` assets referenced by the page.
    pub fn with_assets_url(mut self, value: &str) -> Self {
        self.assets_url = value.trim_end_matches('/').to_string();
        self
    }

    /// Local `swagger-ui-dist` directory. Its files are served next to the page.
    pub fn with_dist_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.dist_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn get_html_title(&self) -> &String {
        &self.html_title
    }

    pub fn get_assets_url(&self) -> &String {
        &self.assets_url
    }

    pub fn get_dist_dir(&self) -> Option<&PathBuf> {
        self.dist_dir.as_ref()
    }

    /// Spec document as JSON text, reading the spec file when one is configured.
    pub fn load_spec(&self) -> Result<Option<String>> {
        let content = match &self.spec_file_path {
            Some(path) => fs::read(path)?,
            None => self.spec.clone(),
        };
        if content.iter().all(|x| x.is_ascii_whitespace()) {
            return Ok(None);
        }
        Ok(Some(yaml_or_json_to_json(&content)?))
    }

    /// Placeholder values the viewer configuration is built from. Unset options are blank.
    ///
    /// The `spec` and `urls` placeholders are entity-encoded, as the viewer configuration
    /// decodes them before parsing.
    pub fn raw_fields(&self) -> Result<RawFields> {
        let urls = if self.urls.is_empty() {
            String::new()
        } else {
            from_object_value(&serde_json::to_string(&self.urls)?)
        };
        let spec = self
            .load_spec()?
            .map(|x| from_object_value(&x))
            .unwrap_or_default();
        Ok(RawFields {
            config_url: from_string_value(&self.config_url),
            spec,
            url: from_string_value(&self.url),
            doc_expansion: self
                .doc_expansion
                .map(|x| x.as_str().to_string())
                .unwrap_or_default(),
            default_model_expand_depth: from_int_value(&self.default_model_expand_depth),
            default_models_expand_depth: from_int_value(&self.default_models_expand_depth),
            default_model_rendering: self
                .default_model_rendering
                .map(|x| x.as_str().to_string())
                .unwrap_or_default(),
            query_config_enabled: from_bool_value(&self.query_config_enabled),
            supported_submit_methods: self.supported_submit_methods.join(",").trim().to_string(),
            deep_linking: from_bool_value(&self.deep_linking),
            show_mutated_request: from_bool_value(&self.show_mutated_request),
            show_extensions: from_bool_value(&self.show_extensions),
            show_common_extensions: from_bool_value(&self.show_common_extensions),
            filter: from_bool_value(&self.filter),
            filter_string: from_string_value(&self.filter_string),
            display_operation_id: from_bool_value(&self.display_operation_id),
            try_it_out_enabled: from_bool_value(&self.try_it_out_enabled),
            display_request_duration: from_bool_value(&self.display_request_duration),
            persist_authorization: from_bool_value(&self.persist_authorization),
            with_credentials: from_bool_value(&self.with_credentials),
            oauth2_redirect_url: from_string_value(&self.oauth2_redirect_url),
            layout: self
                .layout
                .map(|x| x.as_str().to_string())
                .unwrap_or_default(),
            validator_url: from_string_value(&self.validator_url),
            max_displayed_tags: from_int_value(&self.max_displayed_tags),
            urls,
            primary_url: from_string_value(&self.urls_primary),
        })
    }
}

fn from_string_value(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn from_object_value(value: &str) -> String {
    html_escape::encode_text(value).into_owned()
}

fn from_int_value(value: &Option<i64>) -> String {
    value.map(|x| x.to_string()).unwrap_or_default()
}

fn from_bool_value(value: &Option<bool>) -> String {
    value.map(|x| x.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::initializer::ViewerConfig;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn unset_options_are_blank() {
        let raw = UiConfig::new().raw_fields().unwrap();
        assert_eq!(raw, RawFields::default());
    }

    #[test]
    fn options_fill_their_placeholders() {
        let raw = UiConfig::new()
            .with_spec_url("https://petstore.swagger.io/v2/swagger.json")
            .with_doc_expansion(DocExpansion::Full)
            .with_default_models_expand_depth(-1)
            .with_default_model_rendering(ModelRendering::Model)
            .with_persist_authorization(true)
            .with_deep_linking(false)
            .with_supported_submit_methods(&["get", "post"])
            .with_supported_submit_methods(&["put"])
            .with_layout(Layout::StandaloneLayout)
            .with_max_displayed_tags(5)
            .raw_fields()
            .unwrap();
        assert_eq!(raw.url, "https://petstore.swagger.io/v2/swagger.json");
        assert_eq!(raw.doc_expansion, "full");
        assert_eq!(raw.default_models_expand_depth, "-1");
        assert_eq!(raw.default_model_expand_depth, "");
        assert_eq!(raw.default_model_rendering, "model");
        assert_eq!(raw.persist_authorization, "true");
        assert_eq!(raw.deep_linking, "false");
        assert_eq!(raw.supported_submit_methods, "get,post,put");
        assert_eq!(raw.layout, "StandaloneLayout");
        assert_eq!(raw.max_displayed_tags, "5");
    }

    #[test]
    fn filter_expression_requires_enabled_filter() {
        let raw = UiConfig::new().with_filter(true, "").raw_fields().unwrap();
        assert_eq!(raw.filter, "true");
        assert_eq!(raw.filter_string, "");

        let raw = UiConfig::new().with_filter(false, "pets").raw_fields().unwrap();
        assert_eq!(raw.filter, "false");
        assert_eq!(raw.filter_string, "");

        let raw = UiConfig::new().with_filter(true, "pets").raw_fields().unwrap();
        assert_eq!(raw.filter_string, "pets");
    }

    #[test]
    fn disabled_validator_is_unset() {
        let raw = UiConfig::new()
            .with_validator_url(false, "https://validator.swagger.io/validator")
            .raw_fields()
            .unwrap();
        assert_eq!(raw.validator_url, "");

        let raw = UiConfig::new()
            .with_validator_url(true, "http://localhost:8081")
            .raw_fields()
            .unwrap();
        assert_eq!(raw.validator_url, "http://localhost:8081");
    }

    #[test]
    fn spec_urls_are_serialized() {
        let raw = UiConfig::new()
            .with_spec_urls(
                "petstore",
                vec![SpecUrl::new("petstore", "https://petstore.swagger.io/v2/swagger.json")],
            )
            .raw_fields()
            .unwrap();
        assert_eq!(
            raw.urls,
            r#"[{"name":"petstore","url":"https://petstore.swagger.io/v2/swagger.json"}]"#
        );
        assert_eq!(raw.primary_url, "petstore");

        let raw = UiConfig::new().with_spec_urls("", Vec::new()).raw_fields().unwrap();
        assert_eq!(raw.urls, "");
        assert_eq!(raw.primary_url, "");
    }

    #[test]
    fn inline_yaml_spec_is_converted() {
        let raw = UiConfig::new()
            .with_spec(b"openapi: 3.0.0\ninfo:\n  title: Pets\n")
            .raw_fields()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw.spec).unwrap();
        assert_eq!(value["info"]["title"], "Pets");
    }

    #[test]
    fn entity_text_survives_normalization() {
        let raw = UiConfig::new()
            .with_spec(b"openapi: 3.0.0\ninfo:\n  title: A &amp; B\n  description: 'Use &quot;id&quot; in &lt;b&gt;bold&lt;/b&gt;'\n")
            .with_spec_urls(
                "",
                vec![SpecUrl::new("R&amp;D", "https://example.com/openapi.json?a=1&b=2")],
            )
            .raw_fields()
            .unwrap();
        let viewer_config = ViewerConfig::from_raw(&raw).unwrap();
        assert_eq!(
            viewer_config.spec,
            Some(json!({
                "openapi": "3.0.0",
                "info": {
                    "title": "A &amp; B",
                    "description": "Use &quot;id&quot; in &lt;b&gt;bold&lt;/b&gt;",
                },
            }))
        );
        assert_eq!(
            viewer_config.urls,
            Some(json!([{"name": "R&amp;D", "url": "https://example.com/openapi.json?a=1&b=2"}]))
        );
    }

    #[test]
    fn spec_file_is_read_on_every_load() {
        let path = std::env::temp_dir().join(format!("swaggerui-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"openapi":"3.0.0","info":{"title":"One"}}"#).unwrap();
        let config = UiConfig::new().with_spec_file_path(&path);
        assert!(config.load_spec().unwrap().unwrap().contains("One"));

        fs::write(&path, r#"{"openapi":"3.0.0","info":{"title":"Two"}}"#).unwrap();
        assert!(config.load_spec().unwrap().unwrap().contains("Two"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_spec_file_is_not_found() {
        let err = UiConfig::new()
            .with_spec_file_path("/nonexistent/swaggerui/spec.yaml")
            .load_spec()
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn enums_parse_their_names() {
        assert_eq!("full".parse::<DocExpansion>(), Ok(DocExpansion::Full));
        assert_eq!("example".parse::<ModelRendering>(), Ok(ModelRendering::Example));
        assert_eq!("BaseLayout".parse::<Layout>(), Ok(Layout::BaseLayout));
        assert!("everything".parse::<DocExpansion>().is_err());
    }
}
