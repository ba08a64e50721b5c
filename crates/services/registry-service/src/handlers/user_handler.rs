//! Registry user handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{delete, get, patch, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{Grade, NewUser, User, UserPatch, LETTERS_ONLY, LETTERS_OR_EMPTY};

use crate::extractors::{RecordId, ValidatedJson};
use crate::state::AppState;

/// User creation request with validation
#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(regex(path = *LETTERS_ONLY, message = "invalid name and/or surname"))]
    #[schema(example = "And")]
    pub name: String,
    #[validate(regex(path = *LETTERS_ONLY, message = "invalid name and/or surname"))]
    #[schema(example = "Ersen")]
    pub surname: String,
    /// Grade code: 1 trainee, 2 junior, 3 middle, 4 senior
    #[validate(range(min = 1, max = 4, message = "illegal position"))]
    #[schema(example = 1)]
    pub position: i32,
    #[serde(default)]
    #[schema(example = "Test")]
    pub project: String,
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(request: CreateUserRequest) -> Result<Self, Self::Error> {
        Ok(NewUser {
            name: request.name,
            surname: request.surname,
            position: Grade::try_from(request.position)?,
            project: request.project,
        })
    }
}

/// Partial update request; absent or empty fields are left unchanged
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(regex(path = *LETTERS_OR_EMPTY, message = "invalid name and/or surname"))]
    #[schema(example = "Andi")]
    pub name: Option<String>,
    #[validate(regex(path = *LETTERS_OR_EMPTY, message = "invalid name and/or surname"))]
    #[schema(example = "Erseni")]
    pub surname: Option<String>,
    #[validate(range(min = 1, max = 4, message = "illegal position"))]
    #[schema(example = 3)]
    pub position: Option<i32>,
    #[schema(example = "Test9")]
    pub project: Option<String>,
}

impl TryFrom<UpdateUserRequest> for UserPatch {
    type Error = AppError;

    fn try_from(request: UpdateUserRequest) -> Result<Self, Self::Error> {
        let position = request.position.map(Grade::try_from).transpose()?;
        Ok(UserPatch::from_fields(
            request.name,
            request.surname,
            position,
            request.project,
        )?)
    }
}

/// Create registry user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_user))
        .route("/delete/:id", delete(delete_user))
        .route("/update/:id", patch(update_user))
        .route("/get/:id", get(get_user))
        .route("/getall", get(list_users))
        // Same paths without the id segment
        .route("/delete", delete(missing_id))
        .route("/update", patch(missing_id))
        .route("/get", get(missing_id))
}

/// Create a registry user
#[utoipa::path(
    post,
    path = "/create",
    tag = "Registry",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created"),
        (status = 400, description = "Malformed body or validation error"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<StatusCode> {
    tracing::info!("Trying to create");
    let user = NewUser::try_from(payload)?;

    state.registry.add_user(user).await?;
    Ok(StatusCode::OK)
}

/// Delete a registry user
#[utoipa::path(
    delete,
    path = "/delete/{id}",
    tag = "Registry",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Missing or non-numeric id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<StatusCode> {
    tracing::info!(id, "Trying to delete");

    state.registry.delete_user(id).await?;
    Ok(StatusCode::OK)
}

/// Update some fields of a registry user
#[utoipa::path(
    patch,
    path = "/update/{id}",
    tag = "Registry",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated"),
        (status = 400, description = "Bad id, malformed body, validation error or nothing to update"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    ValidatedJson(payload): ValidatedJson<UpdateUserRequest>,
) -> AppResult<StatusCode> {
    tracing::info!(id, "Trying to update");
    let patch = UserPatch::try_from(payload)?;

    state.registry.update_user(id, patch).await?;
    Ok(StatusCode::OK)
}

/// Get a registry user by ID
#[utoipa::path(
    get,
    path = "/get/{id}",
    tag = "Registry",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 400, description = "Missing or non-numeric id"),
        (status = 404, description = "User not found"),
        (status = 500, description = "Storage error")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<User>> {
    tracing::info!(id, "Trying to get");

    let user = state.registry.get_user(id).await?;
    Ok(Json(user))
}

/// List every registry user
#[utoipa::path(
    get,
    path = "/getall",
    tag = "Registry",
    responses(
        (status = 200, description = "All users, unspecified order", body = Vec<User>),
        (status = 500, description = "Storage error")
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    tracing::info!("Trying to get all user list");

    let users = state.registry.get_all_users().await?;
    Ok(Json(users))
}

async fn missing_id() -> AppError {
    AppError::bad_argument("empty index")
}
