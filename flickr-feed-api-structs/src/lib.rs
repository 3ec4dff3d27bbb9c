use std::fmt;

use serde::de::{self, Deserializer, Visitor};

/// Top-level body of a `flickr.photos.*` response with `nojsoncallback=1`.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct FeedResponse {
    pub stat: Option<String>,
    /// Only present when `stat` is `"fail"`.
    pub code: Option<i64>,
    pub message: Option<String>,
    pub photos: Option<PhotoPage>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct PhotoPage {
    pub photo: Option<Vec<RawPhoto>>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Content {
    #[serde(rename = "_content", default)]
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct RawPhoto {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub owner: String,
    #[serde(deserialize_with = "string_or_number")]
    pub secret: String,
    #[serde(deserialize_with = "string_or_number")]
    pub server: String,
    #[serde(deserialize_with = "string_or_number")]
    pub farm: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Content,
    #[serde(default)]
    pub ownername: String,
    /// Space separated.
    #[serde(default)]
    pub tags: String,
}

/// Flickr is inconsistent about quoting its CDN tokens, `farm` is usually a number while
/// `server` and `id` are strings.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct TokenVisitor;

    impl<'de> Visitor<'de> for TokenVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_string<E: de::Error>(self, value: String) -> Result<String, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<String, E> {
            Ok(value.to_string())
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<String, E> {
            Ok(value.to_string())
        }
    }

    deserializer.deserialize_any(TokenVisitor)
}
