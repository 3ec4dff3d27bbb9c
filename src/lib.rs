use structopt::StructOpt;

pub mod config;
pub mod feed;
pub mod models;
pub mod sanitize;
pub mod telemetry;

pub use config::Config;
pub use feed::{fetch_photos, PhotoFeed};
pub use models::photos::Photo;

#[derive(Debug)]
pub enum Error {
    FetchError(feed::Error),
    TelemetryInitError(anyhow::Error),
    OutputError(serde_json::Error),
}

impl From<Error> for i32 {
    fn from(error: Error) -> i32 {
        match error {
            Error::FetchError(_) => 3,
            Error::TelemetryInitError(_) => 4,
            Error::OutputError(_) => 5,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::FetchError(err) => {
                write!(f, "Failed to fetch photos: {}", err)
            },
            Error::TelemetryInitError(err) => {
                write!(f, "Failed to init telemetry: {}", err)
            },
            Error::OutputError(err) => {
                write!(f, "Failed to write photos: {}", err)
            },
        }
    }
}

#[derive(Debug, StructOpt)]
pub struct Args {
    #[structopt(flatten)]
    config: Config,

    /// Comma separated tags to search for, recent public photos are listed when omitted.
    #[structopt(name = "TAGS")]
    tags: Option<String>,
}

pub async fn main() -> Result<(), Error> {
    dotenv::dotenv().ok();
    let args = Args::from_args();

    telemetry::init().map_err(Error::TelemetryInitError)?;

    let feed = PhotoFeed::new(args.config, surf::Client::new());
    let photos = feed
        .fetch_photos(args.tags.as_deref())
        .await
        .map_err(Error::FetchError)?;
    tracing::info!(count = photos.len(), "Fetched photos");

    let stdout = std::io::stdout();
    serde_json::to_writer_pretty(stdout.lock(), &photos).map_err(Error::OutputError)?;
    println!();

    Ok(())
}
