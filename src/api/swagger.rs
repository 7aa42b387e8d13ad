use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service API",
        version = "1.0.0",
        description = "CRUD over the `users` collection.\n\n\
            **Status codes:** 400 for malformed JSON or ids, \
            404 when no user matches the id, 500 for database failures."
    ),
    paths(
        crate::api::users::list_users,
        crate::api::users::create_user,
        crate::api::users::get_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::models::User,
            crate::models::UserRequest,
            crate::api::users::CreatedResponse,
            crate::api::users::MessageResponse,
            crate::api::users::ErrorResponse,
        )
    ),
    tags(
        (name = "Users", description = "Create, read, update and delete users."),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_user_routes() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/users"));
        assert!(paths.contains_key("/api/v1/users/{id}"));
    }
}
