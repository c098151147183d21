//! Shared validation helpers for the user endpoints.
//!
//! Everything here runs before the storage port is touched.

use actix_web::{HttpRequest, error::JsonPayloadError, web};
use tracing::debug;

use crate::domain::{Error, UserId, UserValidationError};

/// Message returned whenever a required user field is absent or empty.
pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "name, email and address are required";

/// Message returned when a path id matches no stored user.
pub(crate) const NOT_FOUND_MESSAGE: &str = "user not found";

/// Map a domain validation failure onto the client-facing 400 error.
pub(crate) fn missing_fields_error(err: UserValidationError) -> Error {
    debug!(error = %err, "rejecting user payload");
    Error::invalid_request(REQUIRED_FIELDS_MESSAGE)
}

/// Parse the `{id}` path segment.
///
/// Anything that is not an integer cannot match a stored row, so callers
/// treat `None` as not found.
pub(crate) fn parse_user_id(raw: &str) -> Option<UserId> {
    raw.parse().ok()
}

/// JSON extractor configuration rendering body errors as `{"error": ...}`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error_handler)
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting malformed JSON body");
    Error::invalid_request(format!("invalid JSON body: {err}")).into()
}
