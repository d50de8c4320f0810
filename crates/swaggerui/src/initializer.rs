// Copyright 2025 Alexandre D. Díaz
//! Configuration record handed to `SwaggerUIBundle` when the page loads.
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::normalizer::{
    to_optional_boolean, to_optional_integer, to_optional_object,
    to_optional_string, to_optional_string_array,
};

pub static DEFAULT_SUBMIT_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];
pub static DEFAULT_LAYOUT: &str = "BaseLayout";

/// Placeholder values substituted into the page, one per option.
/// An empty string means the placeholder had no value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFields {
    pub config_url: String,
    pub spec: String,
    pub url: String,
    pub doc_expansion: String,
    pub default_model_expand_depth: String,
    pub default_models_expand_depth: String,
    pub default_model_rendering: String,
    pub query_config_enabled: String,
    pub supported_submit_methods: String,
    pub deep_linking: String,
    pub show_mutated_request: String,
    pub show_extensions: String,
    pub show_common_extensions: String,
    pub filter: String,
    pub filter_string: String,
    pub display_operation_id: String,
    pub try_it_out_enabled: String,
    pub display_request_duration: String,
    pub persist_authorization: String,
    pub with_credentials: String,
    pub oauth2_redirect_url: String,
    pub layout: String,
    pub validator_url: String,
    pub max_displayed_tags: String,
    pub urls: String,
    pub primary_url: String,
}

/// The viewer accepts either a flag or a filter expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Expression(String),
    Enabled(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_expansion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_expand_depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_models_expand_depth: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_model_rendering: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_config_enabled: Option<bool>,
    pub supported_submit_methods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_linking: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_mutated_request: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_common_extensions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_operation_id: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_it_out_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_request_duration: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persist_authorization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_credentials: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oauth2_redirect_url: Option<String>,
    pub layout: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_displayed_tags: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Value>,
    #[serde(rename = "urls.primaryName", skip_serializing_if = "Option::is_none")]
    pub urls_primary_name: Option<String>,
}

impl ViewerConfig {
    /// Builds the record from the placeholder values. Malformed numbers, flags
    /// and lists become absent; malformed JSON in `spec` or `urls` is an error.
    pub fn from_raw(raw: &RawFields) -> Result<ViewerConfig> {
        let filter = to_optional_string(&raw.filter)
            .map(FilterValue::Expression)
            .or_else(|| to_optional_boolean(&raw.filter_string).map(FilterValue::Enabled));
        let supported_submit_methods = to_optional_string_array(&raw.supported_submit_methods)
            .unwrap_or_else(|| DEFAULT_SUBMIT_METHODS.iter().map(|x| x.to_string()).collect());
        let layout = to_optional_string(&raw.layout).unwrap_or_else(|| DEFAULT_LAYOUT.to_string());

        Ok(ViewerConfig {
            config_url: to_optional_string(&raw.config_url),
            spec: to_optional_object(&raw.spec)?,
            url: to_optional_string(&raw.url),
            doc_expansion: to_optional_string(&raw.doc_expansion),
            default_model_expand_depth: to_optional_integer(&raw.default_model_expand_depth),
            default_models_expand_depth: to_optional_integer(&raw.default_models_expand_depth),
            default_model_rendering: to_optional_string(&raw.default_model_rendering),
            query_config_enabled: to_optional_boolean(&raw.query_config_enabled),
            supported_submit_methods,
            deep_linking: to_optional_boolean(&raw.deep_linking),
            show_mutated_request: to_optional_boolean(&raw.show_mutated_request),
            show_extensions: to_optional_boolean(&raw.show_extensions),
            show_common_extensions: to_optional_boolean(&raw.show_common_extensions),
            filter,
            display_operation_id: to_optional_boolean(&raw.display_operation_id),
            try_it_out_enabled: to_optional_boolean(&raw.try_it_out_enabled),
            display_request_duration: to_optional_boolean(&raw.display_request_duration),
            persist_authorization: to_optional_boolean(&raw.persist_authorization),
            with_credentials: to_optional_boolean(&raw.with_credentials),
            oauth2_redirect_url: to_optional_string(&raw.oauth2_redirect_url),
            layout,
            validator_url: to_optional_string(&raw.validator_url),
            max_displayed_tags: to_optional_integer(&raw.max_displayed_tags),
            urls: to_optional_object(&raw.urls)?,
            urls_primary_name: to_optional_string(&raw.primary_url),
        })
    }
}
