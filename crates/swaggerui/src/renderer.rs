// Copyright 2025 Alexandre D. Díaz
use actix_utils::future::{ready, Ready};
use actix_web::{dev, error, web, FromRequest, HttpRequest};
use actix_web_lab::respond::Html;
use minijinja::value::Value;
use minijinja_autoreload::AutoReloader;

use crate::error::Result;

pub struct MiniJinjaRenderer {
    tmpl_env: web::Data<AutoReloader>,
}

impl MiniJinjaRenderer {
    pub fn from_req(req: &HttpRequest) -> actix_web::Result<Self> {
        let tmpl_env = web::Data::<AutoReloader>::extract(req).into_inner()?;
        Ok(Self { tmpl_env })
    }

    pub fn render_to_string(&self, tmpl: &str, ctx: impl Into<Value>) -> Result<String> {
        let env = self.tmpl_env.acquire_env()?;
        let template = env.get_template(tmpl)?;
        Ok(template.render(ctx.into())?)
    }

    pub fn render(&self, tmpl: &str, ctx: impl Into<Value>) -> actix_web::Result<Html> {
        self.render_to_string(tmpl, ctx).map(Html).map_err(|err| {
            log::error!("{err}");
            error::ErrorInternalServerError("template error")
        })
    }
}

impl FromRequest for MiniJinjaRenderer {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _pl: &mut dev::Payload) -> Self::Future {
        ready(Self::from_req(req))
    }
}
