pub mod home;
pub mod swagger;
pub mod users;

use crate::utils::AppError;
use actix_web::web;

/// Registra as rotas da aplicação (landing page + CRUD de usuários)
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/", web::get().to(home::index))
        .service(
            web::scope("/api/v1/users")
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                .route("/{id}", web::get().to(users::get_user))
                .route("/{id}", web::put().to(users::update_user))
                .route("/{id}", web::delete().to(users::delete_user)),
        );
}

/// Malformed bodies become `400 {"error": ...}`. Content-Type is not enforced.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| AppError::InvalidRequest(err.to_string()).into())
}
