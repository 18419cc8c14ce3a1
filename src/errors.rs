use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("user {0} not found")]
    NotFound(i64),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("'{0}' is not a valid version number")]
    InvalidVersion(String),
    #[error("unknown environment '{0}', expected one of LOCAL, DEV, STAGE, PROD")]
    UnknownEnvironment(String),
    #[error("fixtures file contains no users")]
    EmptyFixtures,
    #[error("fixtures file contains user id {0} more than once")]
    DuplicateUserId(i64),
    #[error("invalid date: {0}")]
    Date(#[from] chrono::ParseError),
    #[error("no user ids left to assign")]
    IdsExhausted,
    #[error("server error: {0}")]
    Server(std::io::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
