use clap::Parser;

/// Command line interface for the application
///
/// Every option can also be supplied through the environment (or a `.env` file).
#[derive(Parser, Debug, Default)]
#[command(version, about = "REST API exposing CRUD operations over users")]
pub struct Cli {
    /// Deployment environment: LOCAL, DEV, STAGE or PROD
    #[arg(long = "env", env = "ENV")]
    pub environment: Option<String>,

    /// Port to listen on, defaults depend on the environment
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Path to the file holding the service version
    #[arg(long, env = "VERSION")]
    pub version_file: Option<String>,

    /// Path to the JSON fixtures used to seed the store
    #[arg(short, long, env = "FIXTURES")]
    pub fixtures: Option<String>,

    /// Seed the store with the built-in users instead of reading a fixtures file
    #[arg(long, env = "SEED_DEFAULTS")]
    pub seed_defaults: bool,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, env = "LOG_LEVEL", default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file
    #[arg(long, env = "LOG_TO_FILE")]
    pub log_to_file: bool,
}
