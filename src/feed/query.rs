use serde::Serialize;
use url::Url;

pub const PER_PAGE: u8 = 20;
pub const EXTRAS: &str = "owner_name,description,tags";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Method {
    #[serde(rename = "flickr.photos.search")]
    Search,
    /// `flickr.photos.search` refuses parameterless searches.
    #[serde(rename = "flickr.photos.getRecent")]
    GetRecent,
}

impl Method {
    pub fn for_tags(tags: Option<&str>) -> Self {
        match tags {
            Some(tags) if !tags.is_empty() => Method::Search,
            _ => Method::GetRecent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Search => "flickr.photos.search",
            Method::GetRecent => "flickr.photos.getRecent",
        }
    }
}

/// Query parameters of a single feed request. Field order is the order they appear in the URL.
#[derive(Debug, Serialize)]
pub struct FeedQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
    safe_search: u8,
    per_page: u8,
    format: &'static str,
    nojsoncallback: u8,
    extras: &'static str,
    method: Method,
    tags: &'a str,
}

impl<'a> FeedQuery<'a> {
    pub fn new(api_key: Option<&'a str>, tags: Option<&'a str>) -> Self {
        FeedQuery {
            api_key,
            safe_search: 1,
            per_page: PER_PAGE,
            format: "json",
            nojsoncallback: 1,
            extras: EXTRAS,
            method: Method::for_tags(tags),
            tags: tags.unwrap_or_default(),
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn to_url(&self, endpoint: &Url) -> Result<Url, serde_qs::Error> {
        let mut url = endpoint.clone();
        url.set_query(Some(&serde_qs::to_string(self)?));
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::config::DEFAULT_ENDPOINT;

    fn pairs(url: &Url) -> HashMap<String, String> {
        url.query_pairs().into_owned().collect()
    }

    #[test]
    fn method_follows_tags() {
        assert_eq!(Method::for_tags(Some("harbour")), Method::Search);
        assert_eq!(Method::for_tags(Some("harbour,fog")), Method::Search);
        assert_eq!(Method::for_tags(Some("")), Method::GetRecent);
        assert_eq!(Method::for_tags(None), Method::GetRecent);
    }

    #[test]
    fn defaults_are_always_sent() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let url = FeedQuery::new(Some("k3y"), Some("harbour")).to_url(&endpoint).unwrap();
        let pairs = pairs(&url);

        assert_eq!(url.path(), "/services/rest/");
        assert_eq!(pairs["api_key"], "k3y");
        assert_eq!(pairs["method"], "flickr.photos.search");
        assert_eq!(pairs["tags"], "harbour");
        assert_eq!(pairs["safe_search"], "1");
        assert_eq!(pairs["per_page"], "20");
        assert_eq!(pairs["format"], "json");
        assert_eq!(pairs["nojsoncallback"], "1");
        assert_eq!(pairs["extras"], "owner_name,description,tags");
    }

    #[test]
    fn recent_photos_send_empty_tags() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let query = FeedQuery::new(Some("k3y"), None);
        let pairs = pairs(&query.to_url(&endpoint).unwrap());

        assert_eq!(query.method(), Method::GetRecent);
        assert_eq!(pairs["method"], Method::GetRecent.as_str());
        assert_eq!(pairs["tags"], "");
    }

    #[test]
    fn missing_api_key_is_omitted() {
        let endpoint = Url::parse(DEFAULT_ENDPOINT).unwrap();
        let url = FeedQuery::new(None, Some("harbour")).to_url(&endpoint).unwrap();

        assert!(!pairs(&url).contains_key("api_key"));
    }
}
