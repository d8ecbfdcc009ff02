//! Handlers not linked to the checkout scope

use ntex::web;
use ntex_files::NamedFile;
use serde_json::json;

use crate::{
    consts,
    front::{errors, templates},
    utils,
};

/// Serve `favicon.ico`
#[web::get("/favicon.ico")]
async fn serve_favicon() -> Result<impl web::Responder, web::Error> {
    Ok(NamedFile::open("web/static/images/favicon.ico")?)
}

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Endpoint to render the product page
#[web::get("/")]
async fn index() -> Result<impl web::Responder, web::Error> {
    let context = tera::Context::from_value(json!({
        "product_name": consts::PRODUCT_NAME,
        "product_price": utils::format_currency(consts::PRODUCT_PRICE),
    }))
    .unwrap_or_default();

    Ok(web::HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(
            templates::WEB_TEMPLATES
                .render("index.html", &context)
                .map_err(|e| {
                    errors::ServerError::TemplateError(format!(
                        "at / endpoint the template couldnt be rendered: {e}"
                    ))
                })?,
        ))
}
