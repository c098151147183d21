//! Domain primitives and ports.
//!
//! Purpose: define the user entity, the transport-agnostic error type and the
//! storage port. Nothing here knows about HTTP or SQL.
//!
//! Public surface:
//! - `User`, `UserId`, `UserDetails`: the single entity and its parts.
//! - `Error`, `ErrorCode`: failures surfaced to callers.
//! - `TraceId`: request-scoped correlation identifier.
//! - `ports::UserRepository`: the storage gateway contract.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserDetails, UserId, UserValidationError};
