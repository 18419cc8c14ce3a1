use super::{MockDatabase, User};
use crate::errors::Error;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

/// Layout of the fixtures file: `{"users": [User, ...]}`
#[derive(Debug, Deserialize)]
struct Fixtures {
    users: Vec<User>,
}

/// Loads a fixtures file and seeds a store with its users
///
/// # Errors
///
/// Returns an error if:
/// * The file cannot be read
/// * The JSON is malformed or has no `users` list
/// * The list is empty or holds the same id twice
pub fn load_fixtures(path: impl AsRef<Path>) -> Result<MockDatabase, Error> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let fixtures: Fixtures = serde_json::from_str(&content)?;

    if fixtures.users.is_empty() {
        return Err(Error::EmptyFixtures);
    }
    let mut seen = HashSet::new();
    for user in &fixtures.users {
        if !seen.insert(user.id) {
            return Err(Error::DuplicateUserId(user.id));
        }
    }

    info!(
        "Loaded {} users from fixtures {}",
        fixtures.users.len(),
        path.display()
    );
    Ok(MockDatabase::new(fixtures.users))
}
