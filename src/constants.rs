/// Service name reported by the health check
pub const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

/// Semantic version pattern, taken from https://github.com/sindresorhus/semver-regex
pub const SEMVER_PATTERN: &str = r"^v?(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)\.(?:0|[1-9][0-9]*)(?:-[\da-z\-]+(?:\.[\da-z\-]+)*)?(?:\+[\da-z\-]+(?:\.[\da-z\-]+)*)?$";

/// Listen port used when running locally
pub const LOCAL_PORT: u16 = 3001;

/// Listen port used by every deployed environment
pub const DEPLOYED_PORT: u16 = 8080;

/// Version file location for local and pre-production runs
pub const LOCAL_VERSION_FILE: &str = "VERSION";

/// Fixtures file location for local and pre-production runs
pub const LOCAL_FIXTURES_FILE: &str = "fixtures.json";

/// Version file location inside the production image
pub const PROD_VERSION_FILE: &str = "rsc/VERSION";

/// Fixtures file location inside the production image
pub const PROD_FIXTURES_FILE: &str = "rsc/fixtures.json";

/// Directory for the rolling log file
pub const LOG_DIRECTORY: &str = "logs";

/// File name prefix for the rolling log file
pub const LOG_FILE_NAME: &str = "users-api.log";
