use std::sync::Arc;
use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use crate::clients::UserService;
use crate::domain::{NewUser, User, UserId, UserUpdate};
use super::ApiError;

/// Shared handler state: whichever `UserService` backs the directory.
pub type AppState = Arc<dyn UserService>;

/// Build application router
pub fn create_app(service: AppState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}

/// GET /users - all users sorted by id
pub async fn list_users(State(service): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.get_all_users().await?;
    Ok(Json(users))
}

/// GET /users/:id
pub async fn get_user(
    State(service): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let user = service.get_user_by_id(id).await?;
    Ok(Json(user))
}

/// POST /users - id in the body is optional
pub async fn create_user(
    State(service): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let Json(new_user) = body?;
    let user = service.create_user(new_user).await?;
    info!(user_id = user.id, "User created");
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /users/:id - replaces every profile field
pub async fn update_user(
    State(service): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
    body: Result<Json<UserUpdate>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let Path(id) = path?;
    let Json(update) = body?;
    let user = service.update_user(id, update.into_user(id)).await?;
    info!(user_id = id, "User updated");
    Ok(Json(user))
}

/// DELETE /users/:id
pub async fn delete_user(
    State(service): State<AppState>,
    path: Result<Path<UserId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    service.remove_user(id).await?;
    info!(user_id = id, "User removed");
    Ok(StatusCode::NO_CONTENT)
}
