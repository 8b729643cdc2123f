//! Supported language catalogue.

use actix_web::{get, web};

use crate::domain::{LanguageDescriptor, supported_languages};
use crate::inbound::http::schemas::LanguageDescriptorSchema;

/// List every language the practice app supports.
#[utoipa::path(
    get,
    path = "/api/languages",
    responses(
        (status = 200, description = "Supported languages", body = [LanguageDescriptorSchema])
    ),
    tags = ["languages"],
    operation_id = "listLanguages"
)]
#[get("/languages")]
pub async fn list_languages() -> web::Json<&'static [LanguageDescriptor]> {
    web::Json(supported_languages())
}
