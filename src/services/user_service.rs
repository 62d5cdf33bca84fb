//! User directory service.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{CreateUser, UpdateUser, User, UserId};
use crate::errors::AppResult;
use crate::infra::{defer, Latency, MemoryStore};

/// User service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserService: Send + Sync {
    /// All users in insertion order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Look up one user by id
    async fn get_user(&self, id: UserId) -> AppResult<Option<User>>;

    /// Create a user under a store-assigned id
    async fn add_user(&self, draft: CreateUser) -> AppResult<User>;

    /// Shallow-merge an update onto an existing user
    async fn update_user(&self, id: UserId, updates: UpdateUser) -> AppResult<Option<User>>;

    /// Remove a user, reporting whether anything was removed
    async fn remove_user(&self, id: UserId) -> AppResult<bool>;

    /// Mock credential check: any known email with a non-empty password
    /// authenticates, and a successful login stamps `last_login`
    async fn login(&self, email: &str, password: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation backed by an in-memory store.
///
/// Locking discipline matches [`super::ProductManager`]: compute under the
/// lock, release, then wait out the simulated delay.
#[derive(Clone)]
pub struct UserManager {
    store: Arc<RwLock<MemoryStore<User>>>,
    latency: Latency,
}

impl UserManager {
    /// Create a manager owning a store seeded with `initial`
    pub fn new(initial: Vec<User>, latency: Latency) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::with_items(initial))),
            latency,
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        let snapshot = self.store.read().await.list();
        Ok(defer(snapshot, self.latency.list).await)
    }

    async fn get_user(&self, id: UserId) -> AppResult<Option<User>> {
        let found = self.store.read().await.get(id);
        Ok(defer(found, self.latency.item).await)
    }

    async fn add_user(&self, draft: CreateUser) -> AppResult<User> {
        let created = self.store.write().await.insert(draft);
        tracing::debug!(id = %created.id, "user added");
        Ok(defer(created, self.latency.mutate).await)
    }

    async fn update_user(&self, id: UserId, updates: UpdateUser) -> AppResult<Option<User>> {
        let updated = self.store.write().await.update(id, updates);
        Ok(defer(updated, self.latency.mutate).await)
    }

    async fn remove_user(&self, id: UserId) -> AppResult<bool> {
        let removed = self.store.write().await.remove(id);
        if removed {
            tracing::debug!(%id, "user removed");
        }
        Ok(defer(removed, self.latency.mutate).await)
    }

    async fn login(&self, email: &str, password: &str) -> AppResult<Option<User>> {
        let authenticated = if password.is_empty() {
            None
        } else {
            let mut store = self.store.write().await;
            store
                .find(|u| u.email == email)
                .map(|u| u.id)
                .and_then(|id| store.modify(id, |u| u.record_login(Utc::now())))
        };

        match authenticated {
            Some(user) => {
                tracing::debug!(id = %user.id, "login accepted");
                Ok(defer(Some(user), self.latency.auth).await)
            }
            None => {
                tracing::debug!(email, "login rejected");
                Ok(defer(None, self.latency.auth_failure).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{has_permission, UserRole};
    use crate::seed;

    /// The route-guard scenario this crate exists to prototype: a consumer
    /// fetches the current user through a mocked service and gates a view on
    /// the role hierarchy.
    #[tokio::test]
    async fn mocked_service_drives_a_permission_check() {
        let mut users = MockUserService::new();
        users.expect_get_user().returning(|id| {
            let guest = seed::users()
                .into_iter()
                .find(|u| u.id == id)
                .filter(|u| u.role == UserRole::Guest);
            Ok(guest)
        });

        let current = users.get_user(UserId::new(4)).await.unwrap();
        assert!(current.is_some());
        assert!(!has_permission(current.as_ref(), UserRole::Admin));
        assert!(has_permission(current.as_ref(), UserRole::Guest));
    }
}
