//! Users API handlers.
//!
//! ```text
//! POST /users {"name":"Ana","email":"ana@x.com","address":"1 Main St"}
//! GET /users
//! PUT /users/1 {"name":"Ana B","email":"ana.b@x.com","address":"2 Main St"}
//! DELETE /users/1
//! ```
//!
//! Each handler validates its input first and then issues at most one call
//! to the storage port.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::domain::ports::UserPersistenceError;
use crate::domain::{Error, User, UserDetails, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{NOT_FOUND_MESSAGE, missing_fields_error, parse_user_id};

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Fields are optional on the wire so absence is reported as a validation
/// failure rather than a deserialisation error. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl TryFrom<UserPayload> for UserDetails {
    type Error = UserValidationError;

    fn try_from(value: UserPayload) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.email, value.address)
    }
}

/// Body returned by successful updates and deletes.
///
/// `id` echoes the path segment verbatim, so it is always a string.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MutationResponse {
    pub message: String,
    pub id: String,
}

impl MutationResponse {
    fn new(message: &str, id: String) -> Self {
        Self {
            message: message.to_owned(),
            id,
        }
    }
}

fn map_user_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user store operation failed");
    Error::internal(err.message())
}

/// Create a user and return it with its assigned id.
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserPayload>,
) -> ApiResult<HttpResponse> {
    let details = UserDetails::try_from(payload.into_inner()).map_err(missing_fields_error)?;
    let id = state
        .users
        .create_user(&details)
        .await
        .map_err(map_user_persistence_error)?;
    info!(user_id = %id, "user created");
    Ok(HttpResponse::Created().json(User::new(id, details)))
}

/// List every stored user in storage order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_registry::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(map_user_persistence_error)?;
    Ok(web::Json(users))
}

/// Overwrite all three fields of an existing user.
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserPayload>,
) -> ApiResult<web::Json<MutationResponse>> {
    let details = UserDetails::try_from(payload.into_inner()).map_err(missing_fields_error)?;
    let raw_id = path.into_inner();
    let id = parse_user_id(&raw_id).ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))?;

    let changed = state
        .users
        .update_user(id, &details)
        .await
        .map_err(map_user_persistence_error)?;
    if changed == 0 {
        return Err(Error::not_found(NOT_FOUND_MESSAGE));
    }

    info!(user_id = %id, "user updated");
    Ok(web::Json(MutationResponse::new("user updated", raw_id)))
}

/// Remove a user.
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MutationResponse>> {
    let raw_id = path.into_inner();
    let id = parse_user_id(&raw_id).ok_or_else(|| Error::not_found(NOT_FOUND_MESSAGE))?;

    let changed = state
        .users
        .delete_user(id)
        .await
        .map_err(map_user_persistence_error)?;
    if changed == 0 {
        return Err(Error::not_found(NOT_FOUND_MESSAGE));
    }

    info!(user_id = %id, "user deleted");
    Ok(web::Json(MutationResponse::new("user deleted", raw_id)))
}
