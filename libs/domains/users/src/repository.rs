use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{NewUser, User, UserPatch};

/// Repository trait for User persistence
///
/// Not-found is a sentinel at this layer (`None` / `false`), never an
/// error; only the email uniqueness invariant produces an `Err`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user record (assigns id and creation timestamp)
    async fn create(&self, new: NewUser) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// Merge a patch into an existing user; `Ok(None)` when absent
    async fn update(&self, id: Uuid, patch: UserPatch) -> UserResult<Option<User>>;

    /// Delete a user by ID; `false` when no record had that id
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// Snapshot of the whole collection in insertion order
    async fn list_all(&self) -> UserResult<Vec<User>>;
}

/// In-memory implementation of UserRepository.
///
/// Records live in a `Vec` so iteration order is insertion order; the
/// `RwLock` is the single mutual-exclusion boundary around all mutation.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

fn email_eq(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new: NewUser) -> UserResult<User> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| email_eq(&u.email, &new.email)) {
            return Err(UserError::DuplicateEmail(new.email));
        }

        let user = User::new(new);
        users.push(user.clone());

        tracing::info!(user_id = %user.id, email = %user.email, "Created user");
        Ok(user)
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn update(&self, id: Uuid, patch: UserPatch) -> UserResult<Option<User>> {
        let mut users = self.users.write().await;

        let Some(pos) = users.iter().position(|u| u.id == id) else {
            return Ok(None);
        };

        // Uniqueness check before any mutation so failure leaves the
        // record untouched
        if let Some(ref email) = patch.email {
            let taken = users.iter().any(|u| u.id != id && email_eq(&u.email, email));
            if taken {
                return Err(UserError::DuplicateEmail(email.clone()));
            }
        }

        users[pos].apply_patch(patch);

        let user = users[pos].clone();
        tracing::info!(user_id = %user.id, "Updated user");
        Ok(Some(user))
    }

    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let mut users = self.users.write().await;

        if let Some(pos) = users.iter().position(|u| u.id == id) {
            users.remove(pos);
            tracing::info!(user_id = %id, "Deleted user");
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users.clone())
    }
}
