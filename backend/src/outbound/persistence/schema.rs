//! Diesel table definition for the user store.
//!
//! Must match `CREATE_USERS_TABLE` in `connection.rs`. The text columns are
//! nullable in SQLite but every write path supplies all three, so they are
//! declared non-null here.

diesel::table! {
    /// Registered users. `id` is assigned by SQLite AUTOINCREMENT and never reused.
    users (id) {
        /// Primary key.
        id -> BigInt,
        /// Display name.
        name -> Text,
        /// Contact email; carries a UNIQUE constraint.
        email -> Text,
        /// Postal address.
        address -> Text,
    }
}
