//! User data model.
//!
//! A user is an identifier assigned by storage plus the three required text
//! fields. Validation here is presence only: no trimming, no format checks.
//! Email uniqueness is a storage concern.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`UserDetails::try_from_parts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// One or more required fields were absent or empty.
    MissingFields {
        /// Offending field names in declaration order.
        fields: Vec<&'static str>,
    },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields { fields } => {
                write!(f, "missing required fields: {}", fields.join(", "))
            }
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Storage-assigned user identifier.
///
/// Identifiers are positive, increase monotonically and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier read from storage.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// The writable part of a user: name, email and address.
///
/// ## Invariants
/// - every field is non-empty.
///
/// # Examples
/// ```
/// use user_registry::domain::UserDetails;
///
/// let details = UserDetails::try_from_parts(
///     Some("Ana".into()),
///     Some("ana@x.com".into()),
///     Some("1 Main St".into()),
/// )
/// .expect("all fields present");
/// assert_eq!(details.email(), "ana@x.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    name: String,
    email: String,
    address: String,
}

impl UserDetails {
    /// Validate presence of every field and build the details.
    ///
    /// `None` and the empty string are both treated as missing. All missing
    /// fields are reported together.
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
        address: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let mut missing = Vec::new();
        let name = require("name", name, &mut missing);
        let email = require("email", email, &mut missing);
        let address = require("address", address, &mut missing);

        match (name, email, address) {
            (Some(name), Some(email), Some(address)) => Ok(Self {
                name,
                email,
                address,
            }),
            _ => Err(UserValidationError::MissingFields { fields: missing }),
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email, unique across users.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Postal address.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }
}

fn require(
    field: &'static str,
    value: Option<String>,
    missing: &mut Vec<&'static str>,
) -> Option<String> {
    match value {
        Some(value) if !value.is_empty() => Some(value),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// Persisted user record.
///
/// Serialises flat as `{"id":1,"name":"…","email":"…","address":"…"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    details: UserDetails,
}

impl User {
    /// Build a user from an assigned identifier and validated details.
    #[must_use]
    pub fn new(id: UserId, details: UserDetails) -> Self {
        Self { id, details }
    }

    /// Storage-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name, email and address.
    #[must_use]
    pub fn details(&self) -> &UserDetails {
        &self.details
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct UserDto {
    id: i64,
    name: String,
    email: String,
    address: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, details } = value;
        let UserDetails {
            name,
            email,
            address,
        } = details;
        Self {
            id: id.get(),
            name,
            email,
            address,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let details =
            UserDetails::try_from_parts(Some(value.name), Some(value.email), Some(value.address))?;
        Ok(Self::new(UserId::new(value.id), details))
    }
}
