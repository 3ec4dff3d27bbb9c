use std::str::FromStr;

use structopt::StructOpt;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://api.flickr.com/services/rest/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }
}

#[derive(Error, Debug, PartialEq)]
#[error("unknown environment {0:?}, expected `development` or `production`")]
pub struct UnknownEnvironment(String);

impl FromStr for Environment {
    type Err = UnknownEnvironment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            _ => Err(UnknownEnvironment(s.to_string())),
        }
    }
}

#[derive(Clone, Debug, StructOpt)]
pub struct Config {
    /// Flickr API key.
    #[structopt(long, env = "FLICKR_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Flickr REST endpoint.
    #[structopt(
        long,
        default_value = DEFAULT_ENDPOINT,
        env = "FLICKR_FEED_ENDPOINT"
    )]
    pub endpoint: Url,

    /// Runtime environment, `development` logs raw upstream responses.
    #[structopt(long, default_value = "production", env = "FLICKR_FEED_ENV")]
    pub environment: Environment,

    /// Extra words or phrases that hide a photo when they appear in its title.
    #[structopt(
        long,
        env = "FLICKR_FEED_BLOCKED_WORDS",
        use_delimiter = true,
        number_of_values = 1
    )]
    pub blocked_words: Vec<String>,
}

impl Config {
    /// Reads the configuration from the environment alone, ignoring the process arguments.
    pub fn from_env() -> Result<Self, structopt::clap::Error> {
        Config::from_iter_safe(std::iter::once(env!("CARGO_PKG_NAME")))
    }
}
