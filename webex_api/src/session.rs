//! reqwest-backed [`Transport`] for the REST API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, LINK, RETRY_AFTER};
use reqwest::StatusCode;
use serde_json::Value;
use url::Url;

use crate::{
    config::SessionConfig,
    params::Params,
    request::{ItemsKey, Request},
    transport::{Page, Transport},
    Error,
};

/// Authenticated HTTP session.
///
/// One `reqwest::Client` is built up front and shared by every request. The
/// bearer token and JSON content type are sent as default headers. Request
/// paths are joined onto the base URL with URL-reference semantics:
/// `workspaces` appends to the base path, `/organization/...` replaces it,
/// and full URLs (continuation links) are used as-is.
pub struct RestSession {
    client: reqwest::Client,
    base_url: Url,
}

impl RestSession {
    pub fn new(config: &SessionConfig) -> Result<Self, Error> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            tracing::error!("Invalid base URL {}: {}", config.base_url, e);
            Error::Config(format!("invalid base URL `{}`: {}", config.base_url, e))
        })?;

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.access_token))
            .map_err(|_| Error::Config("access token is not a valid header value".to_string()))?;
        auth.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves a request's path and query into a full URL.
    pub fn url(&self, request: &Request) -> Result<Url, Error> {
        let url = self.base_url.join(&request.path).map_err(|e| {
            tracing::error!("Invalid URL constructed from {}: {}", request.path, e);
            Error::invalid_argument("path", format!("`{}`: {}", request.path, e))
        })?;
        Ok(request.query.add_to_url(&url))
    }

    async fn send(&self, request: &Request) -> Result<(HeaderMap, Value), Error> {
        let url = self.url(request)?;
        tracing::debug!("{} {}", request.method, url);

        let mut builder = self.client.request(request.method.clone(), url.clone());
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        let resp = builder.send().await.map_err(|e| {
            tracing::error!("Failed to send {} {}: {}", request.method, url, e);
            Error::Network(e)
        })?;

        let status = resp.status();
        let headers = resp.headers().clone();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if status != request.expected {
            if status == StatusCode::TOO_MANY_REQUESTS {
                let retry_after = headers
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.trim().parse::<u64>().ok());
                tracing::error!("Rate limited on {} {} (retry after {:?}s)", request.method, url, retry_after);
                return Err(Error::RateLimited { retry_after });
            }
            let snippet = truncate_body(&body);
            tracing::error!(
                "Request failed with status {} (expected {}): {}",
                status,
                request.expected,
                snippet
            );
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                expected: request.expected.as_u16(),
                body: snippet,
            });
        }

        Ok((headers, parse_body(&body)?))
    }
}

impl Transport for RestSession {
    async fn request(&self, request: &Request) -> Result<Value, Error> {
        let (_, json) = self.send(request).await?;
        Ok(json)
    }

    async fn fetch_page(&self, request: &Request, items_key: &ItemsKey) -> Result<Page, Error> {
        let (headers, json) = self.send(request).await?;
        let items = items_key.extract(json).map_err(|e| {
            tracing::error!("Unexpected page shape from {}: {}", request.path, e);
            e
        })?;
        // The link already carries the query string.
        let next = next_link(&headers).map(|link| Request {
            method: request.method.clone(),
            path: link,
            query: Params::new(),
            body: request.body.clone(),
            expected: request.expected,
        });
        Ok(Page { items, next })
    }
}

/// Extracts the `rel="next"` target from `Link` headers.
fn next_link(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(link_values)
        .find(|(_, params)| is_next(params))
        .map(|(target, _)| target.to_string())
}

/// Splits a `Link` header into `(target, params)` pairs. Targets are taken
/// between `<` and `>`, so commas inside a URL do not split it.
fn link_values(header: &str) -> Vec<(&str, &str)> {
    let mut links = Vec::new();
    let mut rest = header;
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            break;
        };
        let tail = &after[close + 1..];
        let params_end = tail.find('<').unwrap_or(tail.len());
        links.push((&after[..close], &tail[..params_end]));
        rest = &tail[params_end..];
    }
    links
}

fn is_next(params: &str) -> bool {
    params.split(';').any(|param| {
        let param = param.trim_matches(|c: char| c == ',' || c.is_whitespace());
        param
            .strip_prefix("rel=")
            .map(|rel| rel.trim_matches('"').split_whitespace().any(|r| r == "next"))
            .unwrap_or(false)
    })
}

fn parse_body(body: &str) -> Result<Value, Error> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(body).map_err(|e| {
        let snippet = truncate_body(body);
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::Parse(format!("{} | body: {}", e, snippet))
    })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

#[cfg(test)]
mod tests {
    use reqwest::header::{HeaderMap, HeaderValue, LINK};
    use serde_json::json;

    use super::{next_link, parse_body, truncate_body, RestSession};
    use crate::{config::SessionConfig, params::Params, request::Request, Error};

    fn session(base: &str) -> RestSession {
        RestSession::new(&SessionConfig::new("tok").with_base_url(base)).unwrap()
    }

    #[test]
    fn relative_paths_append_to_base() {
        let url = session("https://webexapis.com/v1/")
            .url(&Request::get("telephony/config/huntGroups"))
            .unwrap();
        assert_eq!(url.as_str(), "https://webexapis.com/v1/telephony/config/huntGroups");
    }

    #[test]
    fn absolute_paths_replace_base_path() {
        let url = session("https://api.wxcc-us1.cisco.com/")
            .url(&Request::get("/organization/org-1/team"))
            .unwrap();
        assert_eq!(url.as_str(), "https://api.wxcc-us1.cisco.com/organization/org-1/team");
    }

    #[test]
    fn full_urls_are_used_as_is() {
        let url = session("https://webexapis.com/v1/")
            .url(&Request::get("https://webexapis.com/v1/workspaces?cursor=abc"))
            .unwrap();
        assert_eq!(url.as_str(), "https://webexapis.com/v1/workspaces?cursor=abc");
    }

    #[test]
    fn query_is_appended() {
        let mut query = Params::new();
        query.insert("orgId", "o-1");
        let url = session("https://webexapis.com/v1/")
            .url(&Request::get("locations").with_query(query))
            .unwrap();
        assert_eq!(url.as_str(), "https://webexapis.com/v1/locations?orgId=o-1");
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let result = RestSession::new(&SessionConfig::new("tok").with_base_url("not a url"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn next_link_is_found_among_others() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://webexapis.com/v1/people?cursor=p>; rel=\"prev\", <https://webexapis.com/v1/people?cursor=n>; rel=\"next\"",
            ),
        );
        assert_eq!(
            next_link(&headers).as_deref(),
            Some("https://webexapis.com/v1/people?cursor=n")
        );
    }

    #[test]
    fn next_link_keeps_commas_in_the_url() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                "<https://webexapis.com/v1/people?id=a,b&cursor=n>; rel=\"next\", <https://webexapis.com/v1/people?id=a,b>; rel=\"first\"",
            ),
        );
        assert_eq!(
            next_link(&headers).as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=n")
        );
    }

    #[test]
    fn next_link_with_several_relations() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static("<https://webexapis.com/v1/devices?cursor=x>; rel=\"last next\""),
        );
        assert_eq!(
            next_link(&headers).as_deref(),
            Some("https://webexapis.com/v1/devices?cursor=x")
        );
    }

    #[test]
    fn no_next_link() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static("<https://webexapis.com/v1/people?cursor=p>; rel=\"prev\""),
        );
        assert_eq!(next_link(&headers), None);
        assert_eq!(next_link(&HeaderMap::new()), None);
    }

    #[test]
    fn empty_body_parses_as_null() {
        assert_eq!(parse_body("").unwrap(), json!(null));
        assert_eq!(parse_body("{\"id\":\"x\"}").unwrap(), json!({"id": "x"}));
        assert!(matches!(parse_body("<html>"), Err(Error::Parse(_))));
    }

    #[test]
    fn truncate_keeps_char_boundaries() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
    }
}
