/// Data access for the User resource
///
/// The API layer talks to persistence only through the `UserStore` trait, so
/// handlers never know which backend is behind it.
///
/// # Backends
///
/// - `PgUserStore`: PostgreSQL via a `sqlx::PgPool`
/// - `MemoryUserStore`: in-process map, used by tests and by local runs
///   without `DATABASE_URL`
///
/// # Example
///
/// ```
/// use userdesk_shared::models::user::CreateUser;
/// use userdesk_shared::store::{MemoryUserStore, UserStore};
///
/// # async fn example() -> Result<(), userdesk_shared::store::StoreError> {
/// let store = MemoryUserStore::new();
/// let user = store
///     .create(CreateUser {
///         name: "Ada".to_string(),
///         email: "ada@example.com".to_string(),
///         phone: None,
///         address: None,
///     })
///     .await?;
/// assert_eq!(store.find_by_id(user.id).await?, Some(user));
/// # Ok(())
/// # }
/// ```

use crate::models::user::{CreateUser, UpdateUser, User};
use async_trait::async_trait;

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query or connection failure in the database
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Any other backend failure
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Store result type alias
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for users
///
/// IDs are assigned by the store and never reused within one store.
#[async_trait]
pub trait UserStore: Send + Sync + 'static {
    /// Short backend name for logs and health output
    fn name(&self) -> &'static str;

    /// Lists every user, ordered by ID
    async fn list(&self) -> StoreResult<Vec<User>>;

    /// Finds a user by ID
    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    /// Creates a user, assigning its ID and timestamps
    async fn create(&self, data: CreateUser) -> StoreResult<User>;

    /// Applies a partial update, returning `None` if the user doesn't exist
    async fn update(&self, id: i64, data: UpdateUser) -> StoreResult<Option<User>>;

    /// Deletes a user, returning false if it didn't exist
    async fn delete(&self, id: i64) -> StoreResult<bool>;

    /// Checks that the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
