use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user record held by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identifier assigned by the store, immutable once assigned
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, serialized as an RFC3339 timestamp
    pub date_of_birth: DateTime<Utc>,
    pub location_of_birth: String,
}

/// User payload without an identifier, as accepted on creation.
///
/// Any `id` sent by the client is ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: DateTime<Utc>,
    pub location_of_birth: String,
}

impl NewUser {
    /// Attaches a store-assigned identifier
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            location_of_birth: self.location_of_birth,
        }
    }
}

/// Envelope returned by the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
    pub count: usize,
}

impl From<Vec<User>> for UserList {
    fn from(users: Vec<User>) -> Self {
        UserList {
            count: users.len(),
            users,
        }
    }
}
