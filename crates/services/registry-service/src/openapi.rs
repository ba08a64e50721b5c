//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::{CreateUserRequest, UpdateUserRequest};
use domain::User;

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::delete_user,
        crate::handlers::user_handler::update_user,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::list_users,
    ),
    components(
        schemas(
            CreateUserRequest,
            UpdateUserRequest,
            User,
        )
    ),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Registry", description = "Employee registry endpoints"),
    )
)]
pub struct ApiDoc;
