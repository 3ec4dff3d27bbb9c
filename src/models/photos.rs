use serde::{Deserialize, Serialize};

use flickr_feed_api_structs::RawPhoto;

use crate::sanitize::strip_tags;

pub type PhotoId = String;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Photo {
    pub id: PhotoId,
    pub owner: String,
    pub owner_name: String,
    pub title: String,
    /// Plain text, markup already stripped.
    pub description: String,
    pub tags: Vec<String>,
    pub farm: String,
    pub server: String,
    pub secret: String,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
    #[serde(rename = "authorURL")]
    pub author_url: String,
}

pub fn photo_url(farm: &str, server: &str, id: &str, secret: &str) -> String {
    format!("https://farm{farm}.staticflickr.com/{server}/{id}_{secret}.jpg")
}

pub fn author_url(owner: &str) -> String {
    format!("https://www.flickr.com/people/{owner}/")
}

impl From<RawPhoto> for Photo {
    fn from(p: RawPhoto) -> Self {
        Photo {
            photo_url: photo_url(&p.farm, &p.server, &p.id, &p.secret),
            author_url: author_url(&p.owner),
            description: strip_tags(&p.description.content),
            tags: p.tags.split_whitespace().map(str::to_string).collect(),
            id: p.id,
            owner: p.owner,
            owner_name: p.ownername,
            title: p.title,
            farm: p.farm,
            server: p.server,
            secret: p.secret,
        }
    }
}
