use std::sync::Arc;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, NewUser, UpdateUser, User};
use crate::query::{self, QueryOptions, QueryResult};
use crate::repository::UserRepository;

/// Service layer for User business logic.
///
/// Translates the repository's not-found sentinels into `UserError` and
/// composes the store snapshot with the query engine for listing.
#[derive(Clone)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user; `role` defaults to student when omitted.
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        let new = NewUser {
            name: input.name,
            email: input.email,
            role: input.role.unwrap_or_default(),
        };

        self.repository.create(new).await
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// List users: snapshot the store, then filter/sort/paginate.
    pub async fn list_users(&self, options: QueryOptions) -> UserResult<QueryResult> {
        let records = self.repository.list_all().await?;
        Ok(query::run(records, &options))
    }

    /// Update a user with a partial payload
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        self.repository
            .update(id, input.into())
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// Delete a user
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(UserError::NotFound(id));
        }

        Ok(())
    }
}
