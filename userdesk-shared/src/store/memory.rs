use super::{StoreResult, UserStore};
use crate::models::user::{CreateUser, UpdateUser, User};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// In-process user store
///
/// IDs start at 1 and increase monotonically; deleted IDs are not reused.
#[derive(Debug)]
pub struct MemoryUserStore {
    state: RwLock<MemoryState>,
}

#[derive(Debug)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    next_id: i64,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(MemoryState {
                users: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn list(&self) -> StoreResult<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.get(&id).cloned())
    }

    async fn create(&self, data: CreateUser) -> StoreResult<User> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let now = Utc::now();
        let user = User {
            id,
            name: data.name,
            email: data.email,
            phone: data.phone,
            address: data.address,
            created_at: now,
            updated_at: now,
        };

        state.users.insert(id, user.clone());
        debug!(user_id = id, "Inserted user");
        Ok(user)
    }

    async fn update(&self, id: i64, data: UpdateUser) -> StoreResult<Option<User>> {
        let mut state = self.state.write().await;

        Ok(state.users.get_mut(&id).map(|user| {
            user.apply(data);
            user.clone()
        }))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let deleted = state.users.remove(&id).is_some();
        debug!(user_id = id, deleted, "Delete user");
        Ok(deleted)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
