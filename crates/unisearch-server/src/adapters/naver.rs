//! Naver Search API adapter (blog and news)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use unisearch::{NaverKind, ProviderError, SearchProvider, SearchResult, SearchSource};

use super::{
    lenient_string, map_body_error, map_http_error, map_request_error, RESULTS_PER_PROVIDER,
};
use crate::config::NaverConfig;

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// One Naver Search sub-resource (blog or news)
#[derive(Clone)]
pub struct NaverSearch {
    client: Client,
    config: NaverConfig,
    kind: NaverKind,
}

impl NaverSearch {
    pub fn new(client: Client, config: NaverConfig, kind: NaverKind) -> Self {
        Self {
            client,
            config,
            kind,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url, self.kind.path_suffix())
    }
}

#[async_trait]
impl SearchProvider for NaverSearch {
    fn source(&self) -> SearchSource {
        self.kind.source()
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>, ProviderError> {
        if !self.config.has_credentials() {
            return Err(ProviderError::MissingCredentials(
                "NAVER_CLIENT_ID / NAVER_CLIENT_SECRET".to_string(),
            ));
        }

        tracing::debug!(kind = %self.kind, query = %query, "Naver search request");

        let response = self
            .client
            .get(self.endpoint())
            .header(CLIENT_ID_HEADER, &self.config.client_id)
            .header(CLIENT_SECRET_HEADER, &self.config.client_secret)
            .query(&NaverQuery {
                query,
                display: RESULTS_PER_PROVIDER,
            })
            .send()
            .await
            .map_err(map_request_error)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(map_http_error(status, body, |json| {
                json.get("errorMessage")
                    .and_then(|msg| msg.as_str())
                    .map(|msg| msg.to_string())
            }));
        }

        let payload: NaverResponse = response
            .json()
            .await
            .map_err(map_body_error)?;

        Ok(payload
            .items
            .unwrap_or_default()
            .into_iter()
            .map(|item| item.into_result(self.kind))
            .collect())
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct NaverQuery<'a> {
    query: &'a str,
    display: u32,
}

#[derive(Deserialize)]
struct NaverResponse {
    items: Option<Vec<NaverItem>>,
}

/// Item shape shared by the blog and news endpoints.
///
/// Blog items carry `link`; news items carry both `link` (Naver's copy)
/// and `originallink` (the publisher's article).
#[derive(Deserialize)]
struct NaverItem {
    #[serde(default, deserialize_with = "lenient_string")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    link: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    originallink: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    description: Option<String>,
}

impl NaverItem {
    fn into_result(self, kind: NaverKind) -> SearchResult {
        let url = match kind {
            NaverKind::Blog => self.link,
            NaverKind::News => self.originallink,
        };

        SearchResult {
            title: self.title,
            url,
            content: self.description,
            source: kind.source(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::build_client;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn adapter(server: &MockServer, kind: NaverKind) -> NaverSearch {
        let config = NaverConfig::new("test-id", "test-secret")
            .with_base_url(format!("{}/v1/search", server.uri()));
        NaverSearch::new(build_client(Duration::from_secs(5)).unwrap(), config, kind)
    }

    #[tokio::test]
    async fn test_blog_request_and_mapping() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search/blog.json"))
            .and(header("X-Naver-Client-Id", "test-id"))
            .and(header("X-Naver-Client-Secret", "test-secret"))
            .and(query_param("query", "인공지능"))
            .and(query_param("display", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "title": "테스트 네이버 블로그 제목",
                        "link": "https://blog.naver.com/test",
                        "description": "테스트 네이버 블로그 설명입니다."
                    },
                    {
                        "title": "두 번째",
                        "link": "https://blog.naver.com/second",
                        "description": "둘"
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let results = adapter(&server, NaverKind::Blog)
            .await
            .search("인공지능")
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                SearchResult::new(SearchSource::NaverBlog)
                    .with_title("테스트 네이버 블로그 제목")
                    .with_url("https://blog.naver.com/test")
                    .with_content("테스트 네이버 블로그 설명입니다."),
                SearchResult::new(SearchSource::NaverBlog)
                    .with_title("두 번째")
                    .with_url("https://blog.naver.com/second")
                    .with_content("둘"),
            ]
        );
    }

    #[tokio::test]
    async fn test_news_uses_original_link() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/search/news.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "title": "테스트 네이버 뉴스 제목",
                    "link": "https://n.news.naver.com/mnews/article/1",
                    "originallink": "https://news.example.com/test",
                    "description": "테스트 네이버 뉴스 설명입니다."
                }]
            })))
            .mount(&server)
            .await;

        let results = adapter(&server, NaverKind::News)
            .await
            .search("뉴스")
            .await
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].url.as_deref(), Some("https://news.example.com/test"));
        assert_eq!(results[0].source, SearchSource::NaverNews);
    }

    #[tokio::test]
    async fn test_missing_items_yields_empty_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0})))
            .mount(&server)
            .await;

        let results = adapter(&server, NaverKind::Blog)
            .await
            .search("nothing")
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_missing_item_fields_become_none() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"items": [{"title": "only"}]})),
            )
            .mount(&server)
            .await;

        let results = adapter(&server, NaverKind::News)
            .await
            .search("partial")
            .await
            .unwrap();
        assert_eq!(
            results,
            vec![SearchResult::new(SearchSource::NaverNews).with_title("only")]
        );
    }

    #[tokio::test]
    async fn test_oddly_typed_field_keeps_sibling_items() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [
                    {
                        "title": "정상 글",
                        "link": "https://blog.naver.com/ok",
                        "description": "설명"
                    },
                    {
                        "title": 42,
                        "link": "https://blog.naver.com/odd",
                        "description": ["not", "a", "string"]
                    }
                ]
            })))
            .mount(&server)
            .await;

        let results = adapter(&server, NaverKind::Blog)
            .await
            .search("q")
            .await
            .unwrap();

        assert_eq!(
            results,
            vec![
                SearchResult::new(SearchSource::NaverBlog)
                    .with_title("정상 글")
                    .with_url("https://blog.naver.com/ok")
                    .with_content("설명"),
                SearchResult::new(SearchSource::NaverBlog).with_url("https://blog.naver.com/odd"),
            ]
        );
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "errorMessage": "Authentication failed",
                "errorCode": "024"
            })))
            .mount(&server)
            .await;

        let err = adapter(&server, NaverKind::Blog)
            .await
            .search("q")
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProviderError::ApiError {
                status: 401,
                message: "Authentication failed".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_parse_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = adapter(&server, NaverKind::Blog)
            .await
            .search("q")
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::ParseError(_)));
    }

    #[tokio::test]
    async fn test_slow_response_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"items": []}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let config = NaverConfig::new("test-id", "test-secret")
            .with_base_url(format!("{}/v1/search", server.uri()));
        let naver = NaverSearch::new(
            build_client(Duration::from_millis(100)).unwrap(),
            config,
            NaverKind::Blog,
        );

        assert_eq!(naver.search("q").await.unwrap_err(), ProviderError::Timeout);
    }

    #[tokio::test]
    async fn test_stalled_body_maps_to_timeout() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        // Headers arrive at once, the body never finishes
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 1024];
            let _ = socket.read(&mut buf).await;
            let _ = socket
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 64\r\n\r\n{\"items\": [",
                )
                .await;
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let config = NaverConfig::new("test-id", "test-secret")
            .with_base_url(format!("http://{}/v1/search", addr));
        let naver = NaverSearch::new(
            build_client(Duration::from_millis(300)).unwrap(),
            config,
            NaverKind::Blog,
        );

        assert_eq!(naver.search("q").await.unwrap_err(), ProviderError::Timeout);
    }

    #[tokio::test]
    async fn test_missing_credentials_issue_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
            .expect(0)
            .mount(&server)
            .await;

        let config = NaverConfig::new("", "").with_base_url(server.uri());
        let naver = NaverSearch::new(
            build_client(Duration::from_secs(5)).unwrap(),
            config,
            NaverKind::News,
        );

        let err = naver.search("q").await.unwrap_err();
        assert!(matches!(err, ProviderError::MissingCredentials(_)));
        assert_eq!(naver.source(), SearchSource::NaverNews);
    }
}
