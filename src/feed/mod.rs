use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use flickr_feed_api_structs::{FeedResponse, RawPhoto};

use crate::config::Config;
use crate::models::photos::Photo;
use crate::sanitize::TitleFilter;

pub mod query;
pub mod transport;

use query::FeedQuery;
use transport::Transport;

#[derive(Error, Debug)]
pub enum Error {
    /// Anything that went wrong below the payload, passed through as surf reported it.
    #[error("{0}")]
    Transport(surf::Error),
    #[error("Flickr request failed.")]
    RequestFailed {
        code: Option<i64>,
        message: Option<String>,
    },
    #[error("couldn't encode request query")]
    Query(#[from] serde_qs::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] structopt::clap::Error),
}

impl Error {
    fn request_failed() -> Self {
        Error::RequestFailed {
            code: None,
            message: None,
        }
    }
}

static DEFAULT_FEED: Lazy<Result<PhotoFeed, structopt::clap::Error>> =
    Lazy::new(|| Config::from_env().map(|config| PhotoFeed::new(config, surf::Client::new())));

/// Fetches one page of photos using the process-wide feed configured from the environment.
pub async fn fetch_photos(tags: Option<&str>) -> Result<Vec<Photo>, Error> {
    match &*DEFAULT_FEED {
        Ok(feed) => feed.fetch_photos(tags).await,
        // clap's error isn't Clone.
        Err(err) => Err(Error::Config(structopt::clap::Error {
            message: err.message.clone(),
            kind: err.kind,
            info: err.info.clone(),
        })),
    }
}

pub struct PhotoFeed<T = surf::Client> {
    config: Config,
    filter: TitleFilter,
    transport: T,
}

impl PhotoFeed<surf::Client> {
    pub fn from_env() -> Result<Self, Error> {
        Ok(PhotoFeed::new(Config::from_env()?, surf::Client::new()))
    }
}

impl<T: Transport> PhotoFeed<T> {
    pub fn new(config: Config, transport: T) -> Self {
        if config.api_key.as_deref().map_or(true, str::is_empty) {
            error!("No Flickr API key found, set FLICKR_API_KEY or pass --api-key");
        }

        let filter = TitleFilter::new().with_blocked_words(&config.blocked_words);

        PhotoFeed {
            config,
            filter,
            transport,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetches one page of photos, searching by `tags` when they're given and falling back to
    /// recent public photos otherwise.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_photos(&self, tags: Option<&str>) -> Result<Vec<Photo>, Error> {
        let query = FeedQuery::new(self.config.api_key.as_deref(), tags);
        let url = query.to_url(&self.config.endpoint)?;
        debug!(method = query.method().as_str(), "Requesting photos");

        let body = self.transport.fetch(&url).await.map_err(Error::Transport)?;

        if self.config.environment.is_development() {
            info!(%body, "Fetched photos");
        }

        let photos = photos_from_body(&body)?;
        let fetched = photos.len();
        let photos = self.sanitize(photos);
        debug!(fetched, kept = photos.len(), "Sanitized photos");

        Ok(photos)
    }

    fn sanitize(&self, photos: Vec<RawPhoto>) -> Vec<Photo> {
        photos
            .into_iter()
            .filter(|photo| {
                let profane = self.filter.is_profane(&photo.title);
                if profane {
                    debug!(id = %photo.id, "Dropping photo with flagged title");
                }
                !profane
            })
            .map(Photo::from)
            .collect()
    }
}

fn photos_from_body(body: &str) -> Result<Vec<RawPhoto>, Error> {
    let response: FeedResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(err) => {
            warn!(%err, "Couldn't parse Flickr response");
            return Err(Error::request_failed());
        },
    };

    if response.stat.as_deref() == Some("fail") {
        warn!(code = ?response.code, message = ?response.message, "Flickr reported failure");
        return Err(Error::RequestFailed {
            code: response.code,
            message: response.message,
        });
    }

    match response.photos {
        Some(page) => Ok(page.photo.unwrap_or_default()),
        None => Err(Error::request_failed()),
    }
}
