use actix_web::{http::header::ContentType, HttpResponse};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / - Landing page estática
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(INDEX_HTML)
}
