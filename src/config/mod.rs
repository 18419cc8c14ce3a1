mod parser;

use crate::cli::Cli;
use crate::constants::*;
use crate::errors::Error;
use std::fmt;
use std::str::FromStr;

pub use parser::parse_version_file;

/// Deployment environment the service runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Developer machine, the default when nothing is set
    #[default]
    Local,
    Dev,
    Stage,
    /// Production image, resources live under `rsc/`
    Prod,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Environment::Local => "LOCAL",
            Environment::Dev => "DEV",
            Environment::Stage => "STAGE",
            Environment::Prod => "PROD",
        };
        f.write_str(name)
    }
}

impl FromStr for Environment {
    type Err = Error;

    /// Parses an environment name, case-insensitively. An empty string means `Local`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" | "LOCAL" => Ok(Environment::Local),
            "DEV" => Ok(Environment::Dev),
            "STAGE" => Ok(Environment::Stage),
            "PROD" => Ok(Environment::Prod),
            _ => Err(Error::UnknownEnvironment(s.to_string())),
        }
    }
}

impl Environment {
    fn default_port(self) -> u16 {
        match self {
            Environment::Local => LOCAL_PORT,
            _ => DEPLOYED_PORT,
        }
    }

    fn default_version_file(self) -> &'static str {
        match self {
            Environment::Prod => PROD_VERSION_FILE,
            _ => LOCAL_VERSION_FILE,
        }
    }

    fn default_fixtures_file(self) -> &'static str {
        match self {
            Environment::Prod => PROD_FIXTURES_FILE,
            _ => LOCAL_FIXTURES_FILE,
        }
    }
}

/// Resolved process configuration, built once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Deployment environment
    pub env: Environment,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Validated service version
    pub version: String,
    /// Fixtures file used to seed the store, `None` when the built-in users are used
    pub fixtures: Option<String>,
}

impl AppConfig {
    /// Resolves the configuration from command line arguments.
    ///
    /// Explicit values win over the per-environment defaults. The version file is
    /// read and validated here, so an invalid version aborts startup.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment name is unknown, or if the version file
    /// cannot be read or does not hold a semantic version.
    pub fn from_cli(cli: &Cli) -> Result<Self, Error> {
        let env: Environment = cli.environment.as_deref().unwrap_or_default().parse()?;

        let version_file = cli
            .version_file
            .clone()
            .unwrap_or_else(|| env.default_version_file().to_string());
        let version = parse_version_file(&version_file)?;

        let fixtures = if cli.seed_defaults {
            None
        } else {
            Some(
                cli.fixtures
                    .clone()
                    .unwrap_or_else(|| env.default_fixtures_file().to_string()),
            )
        };

        Ok(AppConfig {
            env,
            port: cli.port.unwrap_or_else(|| env.default_port()),
            version,
            fixtures,
        })
    }
}
