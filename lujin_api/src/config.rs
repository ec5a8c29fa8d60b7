use anyhow::{Context, anyhow};
use jiff::SignedDuration;
use lujin_optimizer::{solver::search_parameters::DEFAULT_TIME_LIMIT, utils::time::parse_duration};

pub const DEFAULT_PORT: u16 = 5000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CorsOrigins {
    #[default]
    Any,
}

/// Process configuration, read once at startup and handed to [`crate::app::serve`].
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// Raises the log level and puts fault details into 5xx responses.
    pub debug: bool,
    pub cors_allow_origins: CorsOrigins,
    pub solver_time_limit: SignedDuration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            debug: false,
            cors_allow_origins: CorsOrigins::Any,
            solver_time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

impl AppConfig {
    /// Reads `PORT`, `DEBUG` and `SOLVER_TIME_LIMIT` from the environment.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a TCP port number, got `{port}`"))?;
        }

        config.debug = lookup("DEBUG").is_some_and(|debug| debug.trim().eq_ignore_ascii_case("true"));

        if let Some(time_limit) = lookup("SOLVER_TIME_LIMIT") {
            config.solver_time_limit = parse_duration(&time_limit)
                .map_err(|error| anyhow!("SOLVER_TIME_LIMIT: {error}"))?;
        }

        Ok(config)
    }
}
