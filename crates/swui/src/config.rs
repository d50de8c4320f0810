// Copyright 2025 Alexandre D. Díaz
use std::io::{stderr, stdout};

use argparse::{ArgumentParser, Store, StoreTrue};

use swaggerui::UiConfig;

#[derive(Debug, PartialEq)]
pub struct SwuiConfig {
    spec_file_path: String,
    persist_auth: bool,
    show_filter_bar: bool,
    port: u16,
    open_browser: bool,
}

impl SwuiConfig {
    /// Parses the command line. `Err` carries the exit code, `0` after `--help`.
    pub fn new(args: Vec<String>) -> Result<SwuiConfig, i32> {
        let mut spec_file_path = String::new();
        let mut persist_auth = false;
        let mut show_filter_bar = false;
        let mut port: u16 = 0;
        let mut no_browser = false;
        {
            let mut ap = ArgumentParser::new();
            ap.set_description("Serves a local OpenAPI document with Swagger UI and opens it in the browser.");
            ap.refer(&mut persist_auth).add_option(
                &["--persist-auth"],
                StoreTrue,
                "Enables browser authentication persistence",
            );
            ap.refer(&mut show_filter_bar).add_option(
                &["--show-filter-bar"],
                StoreTrue,
                "Shows a filter bar in the UI that helps to find API operations",
            );
            ap.refer(&mut port).add_option(
                &["-p", "--port"],
                Store,
                "Port to listen on (a free one when omitted)",
            );
            ap.refer(&mut no_browser).add_option(
                &["--no-browser"],
                StoreTrue,
                "Do not open the browser",
            );
            ap.refer(&mut spec_file_path)
                .add_argument("path-to-schema", Store, "OpenAPI document (YAML or JSON)");
            ap.parse(args, &mut stdout(), &mut stderr())?;
        }
        Ok(SwuiConfig {
            spec_file_path,
            persist_auth,
            show_filter_bar,
            port,
            open_browser: !no_browser,
        })
    }

    pub fn get_spec_file_path(&self) -> &String {
        &self.spec_file_path
    }

    pub fn get_port(&self) -> &u16 {
        &self.port
    }

    pub fn get_open_browser(&self) -> bool {
        self.open_browser
    }

    /// Options used to preview the document: the file is read again on every
    /// page load, so edits show up after a refresh.
    pub fn ui_config(&self) -> UiConfig {
        UiConfig::new()
            .with_html_title(&self.spec_file_path)
            .with_spec_file_path(&self.spec_file_path)
            .with_persist_authorization(self.persist_auth)
            .with_display_request_duration(true)
            .with_credentials(true)
            .with_show_common_extensions(true)
            .with_show_extensions(true)
            .with_show_mutated_request(true)
            .with_filter(self.show_filter_bar, "")
    }
}
