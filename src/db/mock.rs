use super::{NewUser, User, UserRepository};
use crate::errors::Error;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

/// Map and counter are only ever touched together, under the same lock
#[derive(Debug)]
struct Inner {
    users: BTreeMap<i64, User>,
    max_user_id: i64,
}

/// In-memory user store
#[derive(Debug)]
pub struct MockDatabase {
    inner: RwLock<Inner>,
}

impl MockDatabase {
    /// Creates a store holding `users`, keyed by their ids.
    ///
    /// The id counter starts at the highest seeded id, so the next added user
    /// gets `max + 1`. An empty store hands out `0` first.
    pub fn new(users: impl IntoIterator<Item = User>) -> Self {
        let users: BTreeMap<i64, User> = users.into_iter().map(|u| (u.id, u)).collect();
        let max_user_id = users.keys().next_back().copied().unwrap_or(-1);
        MockDatabase {
            inner: RwLock::new(Inner { users, max_user_id }),
        }
    }

    /// Store seeded with the two built-in users
    pub fn with_defaults() -> Result<Self, Error> {
        Ok(Self::new([
            User {
                id: 0,
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                date_of_birth: "1985-12-31T00:00:00Z".parse()?,
                location_of_birth: "London".to_string(),
            },
            User {
                id: 1,
                first_name: "Jane".to_string(),
                last_name: "Doe".to_string(),
                date_of_birth: "1992-01-01T00:00:00Z".parse()?,
                location_of_birth: "Milton Keynes".to_string(),
            },
        ]))
    }
}

#[async_trait::async_trait]
impl UserRepository for MockDatabase {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let inner = self.inner.read().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn get_user(&self, id: i64) -> Result<User, Error> {
        let inner = self.inner.read().await;
        inner.users.get(&id).cloned().ok_or(Error::NotFound(id))
    }

    async fn add_user(&self, user: NewUser) -> Result<User, Error> {
        let mut inner = self.inner.write().await;
        let id = inner
            .max_user_id
            .checked_add(1)
            .ok_or(Error::IdsExhausted)?;
        inner.max_user_id = id;
        let user = user.with_id(id);
        inner.users.insert(user.id, user.clone());
        debug!("Added user {}", user.id);
        Ok(user)
    }

    async fn update_user(&self, user: User) -> Result<User, Error> {
        let mut inner = self.inner.write().await;
        let stored = inner.users.get_mut(&user.id).ok_or(Error::NotFound(user.id))?;
        *stored = user;
        debug!("Updated user {}", stored.id);
        Ok(stored.clone())
    }

    async fn delete_user(&self, id: i64) -> Result<(), Error> {
        let mut inner = self.inner.write().await;
        inner.users.remove(&id).ok_or(Error::NotFound(id))?;
        debug!("Deleted user {}", id);
        Ok(())
    }
}
