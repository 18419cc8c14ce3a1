use crate::api::context::AppContext;
use crate::api::errors::{api_error, store_error, ApiError};
use crate::constants::SERVICE_NAME;
use crate::db::{NewUser, User, UserList};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

/// Service name and version, returned by the health check
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthCheck {
    pub svc_name: String,
    pub version: String,
}

fn malformed_user(rejection: JsonRejection) -> ApiError {
    warn!("Rejected user payload: {}", rejection.body_text());
    api_error(StatusCode::BAD_REQUEST, "malformed user object")
}

fn malformed_id(rejection: PathRejection) -> ApiError {
    warn!("Rejected user id: {}", rejection.body_text());
    api_error(StatusCode::BAD_REQUEST, "malformed user id")
}

/// Reports the service name and the version loaded at startup
#[axum::debug_handler]
pub async fn health_check(Extension(ctx): Extension<AppContext>) -> Json<HealthCheck> {
    Json(HealthCheck {
        svc_name: SERVICE_NAME.to_string(),
        version: ctx.version.clone(),
    })
}

/// Lists every user, wrapped with their count
///
/// # Returns
/// * `Result<Json<UserList>, ApiError>` - Users envelope, or 404 if the store fails
#[axum::debug_handler]
pub async fn list_users(
    Extension(ctx): Extension<AppContext>,
) -> Result<Json<UserList>, ApiError> {
    let users = ctx.db.list_users().await.map_err(|e| {
        error!("Failed to list users: {}", e);
        api_error(StatusCode::NOT_FOUND, "can't find any users")
    })?;
    Ok(Json(UserList::from(users)))
}

/// Retrieves a user by id
#[axum::debug_handler]
pub async fn get_user(
    Extension(ctx): Extension<AppContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = id.map_err(malformed_id)?;
    let user = ctx.db.get_user(id).await.map_err(|e| {
        info!("Lookup failed: {}", e);
        api_error(StatusCode::NOT_FOUND, "can't find user")
    })?;
    Ok(Json(user))
}

/// Creates a user; the store assigns its id
///
/// # Returns
/// * `201` with the stored user, `400` if the body is not a user
#[axum::debug_handler]
pub async fn create_user(
    Extension(ctx): Extension<AppContext>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(new_user) = payload.map_err(malformed_user)?;
    let user = ctx.db.add_user(new_user).await.map_err(|e| {
        error!("Failed to add user: {}", e);
        api_error(StatusCode::INTERNAL_SERVER_ERROR, "something went wrong")
    })?;
    info!("Created user {}", user.id);
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replaces the user whose id is carried in the body
#[axum::debug_handler]
pub async fn update_user(
    Extension(ctx): Extension<AppContext>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Json(user) = payload.map_err(malformed_user)?;
    let user = ctx.db.update_user(user).await.map_err(|e| store_error(&e))?;
    Ok(Json(user))
}

/// Deletes a user, answering 204 with an empty body
#[axum::debug_handler]
pub async fn delete_user(
    Extension(ctx): Extension<AppContext>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id.map_err(malformed_id)?;
    ctx.db.delete_user(id).await.map_err(|e| store_error(&e))?;
    info!("Deleted user {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// Passports are not implemented yet
pub async fn passports() -> StatusCode {
    info!("Handling passports - not implemented yet");
    StatusCode::NOT_IMPLEMENTED
}
