//! User repository trait and in-memory mock.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

/// Repository trait for User persistence
///
/// Implementations handle the actual store operations while keeping the
/// boundary between domain and infrastructure. Email is the natural lookup
/// key: it is unique across the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email match
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with that email
    /// * `Err(DomainError)` - Store unreachable or query failed
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Check whether a user exists with the given email
    async fn exists_by_email(&self, email: &str) -> DomainResult<bool>;

    /// Persist a new user
    ///
    /// Fails with a database error when the email is already taken; callers
    /// are expected to check first and surface `UserAlreadyExists`.
    async fn create(&self, user: User) -> DomainResult<User>;

    /// Update an existing user (e.g. last-login timestamp)
    async fn update(&self, user: User) -> DomainResult<User>;
}

/// In-memory user repository for tests
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn exists_by_email(&self, email: &str) -> DomainResult<bool> {
        let users = self.users.read().await;
        Ok(users.values().any(|u| u.email == email))
    }

    async fn create(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            return Err(DomainError::database(format!(
                "duplicate email: {}",
                user.email
            )));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> DomainResult<User> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::database("user not found"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
