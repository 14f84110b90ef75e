use super::{StoreResult, UserStore};
use crate::db::pool;
use crate::models::user::{CreateUser, UpdateUser, User};
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

/// PostgreSQL-backed user store
///
/// Expects the `users` table from `db::migrations::run_migrations`.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    fn name(&self) -> &'static str {
        "postgres"
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        Ok(User::list(&self.pool).await?)
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(User::find_by_id(&self.pool, id).await?)
    }

    async fn create(&self, data: CreateUser) -> StoreResult<User> {
        let user = User::create(&self.pool, data).await?;
        debug!(user_id = user.id, "Inserted user");
        Ok(user)
    }

    async fn update(&self, id: i64, data: UpdateUser) -> StoreResult<Option<User>> {
        Ok(User::update(&self.pool, id, data).await?)
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let deleted = User::delete(&self.pool, id).await?;
        debug!(user_id = id, deleted, "Delete user");
        Ok(deleted)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(pool::health_check(&self.pool).await?)
    }
}
