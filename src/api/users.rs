use crate::models::{User, UserRequest};
use crate::store::UserStore;
use crate::utils::{AppError, USER_NOT_FOUND};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

fn not_found() -> AppError {
    AppError::NotFound(USER_NOT_FOUND.to_string())
}

/// GET /api/v1/users - Lista todos os usuários
#[utoipa::path(
    get,
    path = "/api/v1/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user, unordered", body = Vec<User>),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_users(store: web::Data<dyn UserStore>) -> Result<HttpResponse, AppError> {
    let users = store.list().await?;

    log::info!("📋 GET /users - {} users", users.len());

    Ok(HttpResponse::Ok().json(users))
}

/// POST /api/v1/users - Cria usuário (id gerado pelo store)
#[utoipa::path(
    post,
    path = "/api/v1/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = CreatedResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn create_user(
    store: web::Data<dyn UserStore>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let user = User::from(body.into_inner());

    log::info!("📝 POST /users - name: {}, email: {}", user.name, user.email);

    let id = store.create(&user).await?;

    log::info!("✅ User created: {}", id);

    Ok(HttpResponse::Created().json(CreatedResponse { id }))
}

/// GET /api/v1/users/{id} - Busca usuário pelo id
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id, 24 hex characters")),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    match store.get_by_id(&id).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(not_found()),
    }
}

/// PUT /api/v1/users/{id} - Substitui nome e email
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id, 24 hex characters")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed id or JSON body", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn update_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let user = User::from(body.into_inner());

    log::info!("🔧 PUT /users/{}", id);

    if store.update(&id, &user).await? == 0 {
        return Err(not_found());
    }

    log::info!("✅ User updated: {}", id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User updated successfully".to_string(),
    }))
}

/// DELETE /api/v1/users/{id} - Remove usuário
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User id, 24 hex characters")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No user with this id", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();

    log::info!("🗑️  DELETE /users/{}", id);

    if store.delete(&id).await? == 0 {
        return Err(not_found());
    }

    log::info!("✅ User deleted: {}", id);

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
