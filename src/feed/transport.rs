use surf::StatusCode;
use url::Url;

/// The single outbound GET. Implementations resolve to the response body, and any failure below
/// the application payload (connection, timeout, non-2xx status) is reported as a `surf::Error`.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn fetch(&self, url: &Url) -> surf::Result<String>;
}

#[async_trait::async_trait]
impl Transport for surf::Client {
    async fn fetch(&self, url: &Url) -> surf::Result<String> {
        let mut res = surf::Client::get(self, url.as_str()).await?;

        let status: StatusCode = res.status();
        if !status.is_success() {
            return Err(surf::Error::from_str(
                status,
                format!("Flickr API responded with {status}"),
            ));
        }

        res.body_string().await
    }
}


#[cfg(test)]
mod tests {
    use super::local_server::serve_once;
    use super::*;

    #[async_std::test]
    async fn non_success_status_is_an_error() {
        let (url, server) = serve_once("502 Bad Gateway", "upstream down".to_string()).await;

        let err = surf::Client::new().fetch(&url).await.unwrap_err();
        server.await;

        assert_eq!(err.status(), StatusCode::BadGateway);
    }

    #[async_std::test]
    async fn success_resolves_to_body() {
        let body = r#"{"photos": {"photo": []}, "stat": "ok"}"#.to_string();
        let (url, server) = serve_once("200 OK", body.clone()).await;

        let fetched = surf::Client::new().fetch(&url).await.unwrap();
        let request = server.await;

        assert_eq!(fetched, body);
        assert!(request.starts_with("GET /services/rest/ HTTP/1.1"));
    }
}
