//! Landing page served at `GET /`.

use actix_web::{HttpResponse, get, http::header::ContentType};

const LANDING_PAGE: &str = include_str!("../../../static/index.html");

/// Serve the static landing document.
#[get("/")]
pub async fn landing() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(LANDING_PAGE)
}
