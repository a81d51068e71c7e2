use actix_web::{web, HttpResponse};
use studydesk_api_structs::get_health::*;

async fn status() -> HttpResponse {
    HttpResponse::Ok().json(APIResponse {
        message: "Ready to study!".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(status));
}
