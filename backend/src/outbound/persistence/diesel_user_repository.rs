//! SQLite-backed `UserRepository` implementation using Diesel ORM.
//!
//! Each port method issues exactly one statement through the shared
//! [`DbConnection`].

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tracing::warn;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDetails, UserId};

use super::connection::DbConnection;
use super::error_mapping::{map_diesel_error, map_store_error};
use super::models::{UserFieldsRow, UserRow};
use super::schema::users;

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    connection: DbConnection,
}

impl DieselUserRepository {
    /// Create a repository over the given connection.
    #[must_use]
    pub fn new(connection: DbConnection) -> Self {
        Self { connection }
    }

    async fn run<F, T>(&self, operation: F) -> Result<T, UserPersistenceError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        self.connection
            .run(operation)
            .await
            .map_err(map_store_error)?
            .map_err(map_diesel_error)
    }
}

/// Convert a database row into a domain user.
///
/// Rows written outside this service may hold empty text; those surface as
/// query failures rather than invalid domain values.
fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let UserRow {
        id,
        name,
        email,
        address,
    } = row;
    let details = UserDetails::try_from_parts(Some(name), Some(email), Some(address))
        .map_err(|err| {
            warn!(user_id = id, error = %err, "stored user row is incomplete");
            UserPersistenceError::query(format!("user {id} is incomplete: {err}"))
        })?;
    Ok(User::new(UserId::new(id), details))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create_user(&self, details: &UserDetails) -> Result<UserId, UserPersistenceError> {
        let details = details.clone();
        let id = self
            .run(move |conn| {
                let fields = UserFieldsRow::from(&details);
                diesel::insert_into(users::table)
                    .values(&fields)
                    .returning(users::id)
                    .get_result::<i64>(conn)
            })
            .await?;
        Ok(UserId::new(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, UserPersistenceError> {
        let rows = self
            .run(|conn| {
                users::table
                    .order(users::id.asc())
                    .select(UserRow::as_select())
                    .load::<UserRow>(conn)
            })
            .await?;
        rows.into_iter().map(row_to_user).collect()
    }

    async fn update_user(
        &self,
        id: UserId,
        details: &UserDetails,
    ) -> Result<usize, UserPersistenceError> {
        let details = details.clone();
        self.run(move |conn| {
            let fields = UserFieldsRow::from(&details);
            diesel::update(users::table.find(id.get()))
                .set(&fields)
                .execute(conn)
        })
        .await
    }

    async fn delete_user(&self, id: UserId) -> Result<usize, UserPersistenceError> {
        self.run(move |conn| diesel::delete(users::table.find(id.get())).execute(conn))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    struct Store {
        _dir: TempDir,
        repository: DieselUserRepository,
    }

    #[fixture]
    fn store() -> Store {
        let dir = tempfile::tempdir().expect("tempdir");
        let connection = DbConnection::open(dir.path().join("database.db")).expect("open store");
        Store {
            _dir: dir,
            repository: DieselUserRepository::new(connection),
        }
    }

    fn details(name: &str, email: &str, address: &str) -> UserDetails {
        UserDetails::try_from_parts(
            Some(name.to_owned()),
            Some(email.to_owned()),
            Some(address.to_owned()),
        )
        .expect("valid details")
    }

    #[rstest]
    #[tokio::test]
    async fn create_assigns_increasing_ids(store: Store) {
        let repo = &store.repository;
        let first = repo
            .create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("first insert");
        let second = repo
            .create_user(&details("Bo", "bo@x.com", "2 Main St"))
            .await
            .expect("second insert");

        assert!(first.get() > 0);
        assert!(second > first);
    }

    #[rstest]
    #[tokio::test]
    async fn list_returns_rows_in_insertion_order(store: Store) {
        let repo = &store.repository;
        let ana = details("Ana", "ana@x.com", "1 Main St");
        let bo = details("Bo", "bo@x.com", "2 Main St");
        let ana_id = repo.create_user(&ana).await.expect("insert ana");
        let bo_id = repo.create_user(&bo).await.expect("insert bo");

        let users = repo.list_users().await.expect("list");

        assert_eq!(users, vec![User::new(ana_id, ana), User::new(bo_id, bo)]);
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation(store: Store) {
        let repo = &store.repository;
        repo.create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("first insert");

        let err = repo
            .create_user(&details("Other", "ana@x.com", "9 Side St"))
            .await
            .expect_err("duplicate email must fail");

        assert!(
            matches!(err, UserPersistenceError::ConstraintViolation { .. }),
            "unexpected error: {err:?}"
        );
        assert!(err.message().contains("UNIQUE"));
        assert_eq!(repo.list_users().await.expect("list").len(), 1);
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_every_field(store: Store) {
        let repo = &store.repository;
        let id = repo
            .create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("insert");
        let replacement = details("Ana B", "ana.b@x.com", "2 Main St");

        let changed = repo.update_user(id, &replacement).await.expect("update");

        assert_eq!(changed, 1);
        assert_eq!(
            repo.list_users().await.expect("list"),
            vec![User::new(id, replacement)]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_of_absent_id_changes_nothing(store: Store) {
        let repo = &store.repository;
        let ana = details("Ana", "ana@x.com", "1 Main St");
        let id = repo.create_user(&ana).await.expect("insert");

        let changed = repo
            .update_user(UserId::new(id.get() + 100), &details("X", "x@x.com", "X"))
            .await
            .expect("update");

        assert_eq!(changed, 0);
        assert_eq!(repo.list_users().await.expect("list"), vec![User::new(id, ana)]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_to_taken_email_is_a_constraint_violation(store: Store) {
        let repo = &store.repository;
        repo.create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("insert ana");
        let bo_id = repo
            .create_user(&details("Bo", "bo@x.com", "2 Main St"))
            .await
            .expect("insert bo");

        let err = repo
            .update_user(bo_id, &details("Bo", "ana@x.com", "2 Main St"))
            .await
            .expect_err("collision must fail");

        assert!(matches!(err, UserPersistenceError::ConstraintViolation { .. }));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_row_once(store: Store) {
        let repo = &store.repository;
        let id = repo
            .create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("insert");

        assert_eq!(repo.delete_user(id).await.expect("first delete"), 1);
        assert_eq!(repo.delete_user(id).await.expect("second delete"), 0);
        assert!(repo.list_users().await.expect("list").is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_not_reused_after_delete(store: Store) {
        let repo = &store.repository;
        let first = repo
            .create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("insert");
        repo.delete_user(first).await.expect("delete");

        let second = repo
            .create_user(&details("Ana", "ana@x.com", "1 Main St"))
            .await
            .expect("reinsert");

        assert!(second > first);
    }
}
