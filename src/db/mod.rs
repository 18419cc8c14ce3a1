mod fixtures;
mod mock;
mod models;

use crate::errors::Error;

pub use fixtures::load_fixtures;
pub use mock::MockDatabase;
pub use models::*;

/// Storage operations for user records.
///
/// Handlers only talk to this trait, so another backend can be swapped in
/// without touching the HTTP layer.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns every stored user
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Returns the user with the given id, or `Error::NotFound`
    async fn get_user(&self, id: i64) -> Result<User, Error>;

    /// Stores a new user under a freshly assigned id and returns it
    async fn add_user(&self, user: NewUser) -> Result<User, Error>;

    /// Replaces every field of the user matching `user.id`, or `Error::NotFound`
    async fn update_user(&self, user: User) -> Result<User, Error>;

    /// Removes the user with the given id, or `Error::NotFound`
    async fn delete_user(&self, id: i64) -> Result<(), Error>;
}
