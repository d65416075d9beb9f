use crate::PostSource;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use leavewatch_core::{CoreError, GraphApiError, Post};
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info, warn};
use url::Url;

const GRAPH_API_BASE: &str = "https://graph.facebook.com/v19.0";
const POST_FIELDS: &str = "message,created_time,permalink_url";

// Graph timestamps look like 2024-06-01T09:30:00+0000
const GRAPH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPostsResponse {
    #[serde(default)]
    pub data: Vec<GraphPostData>,
    pub paging: Option<GraphPaging>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPostData {
    pub id: String,
    pub message: Option<String>,
    pub created_time: String,
    pub permalink_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphPaging {
    pub next: Option<String>,
    pub previous: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorResponse {
    pub error: GraphErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub code: Option<i64>,
}

/// Facebook Graph API client scoped to reading page posts.
#[derive(Debug)]
pub struct GraphApiClient {
    http_client: Client,
    access_token: String,
    base_url: String,
}

impl GraphApiClient {
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, GRAPH_API_BASE.to_string())
    }

    /// Point the client at a different Graph endpoint, e.g. a mock server.
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        let http_client = Client::builder()
            .user_agent(concat!("leavewatch/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            access_token,
            base_url,
        }
    }

    /// Fetch up to `limit` recent posts for a page, newest first.
    pub async fn get_page_posts(&self, page: &str, limit: u32) -> Result<Vec<Post>, CoreError> {
        let mut url = Url::parse(&format!("{}/{}/posts", self.base_url, page)).map_err(|e| {
            GraphApiError::InvalidResponse {
                details: format!("invalid request URL for {}: {}", page, e),
            }
        })?;
        url.query_pairs_mut()
            .append_pair("fields", POST_FIELDS)
            .append_pair("limit", &limit.to_string());

        info!("Fetching up to {} posts for page {}", limit, page);
        let response = match self
            .http_client
            .get(url)
            .bearer_auth(&self.access_token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Network error fetching posts for {}: {}", page, e);
                if e.is_timeout() {
                    return Err(GraphApiError::RequestTimeout.into());
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(map_error_status(page, status, response).await.into());
        }

        let listing: GraphPostsResponse = response.json().await.map_err(|e| {
            error!("Failed to parse posts for {}: {}", page, e);
            GraphApiError::InvalidResponse {
                details: format!("Failed to parse posts for {}", page),
            }
        })?;

        debug!("Retrieved {} posts for page {}", listing.data.len(), page);
        Ok(listing.data.into_iter().map(Post::from).collect())
    }
}

#[async_trait]
impl PostSource for GraphApiClient {
    async fn recent_posts(&self, page: &str, limit: u32) -> Result<Vec<Post>, CoreError> {
        self.get_page_posts(page, limit).await
    }
}

async fn map_error_status(page: &str, status: StatusCode, response: Response) -> GraphApiError {
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());

    let detail = response
        .json::<GraphErrorResponse>()
        .await
        .ok()
        .map(|body| body.error.message);
    match &detail {
        Some(message) => error!("Graph API error for {} ({}): {}", page, status, message),
        None => error!("Graph API request failed with status {} for {}", status, page),
    }

    match status.as_u16() {
        401 => GraphApiError::InvalidToken,
        403 => GraphApiError::Forbidden {
            page: page.to_string(),
        },
        404 => GraphApiError::PageNotFound {
            page: page.to_string(),
        },
        429 => GraphApiError::RateLimitExceeded {
            retry_after: retry_after.unwrap_or(60),
        },
        code if status.is_server_error() => GraphApiError::ServerError { status_code: code },
        _ => GraphApiError::InvalidResponse {
            details: detail.unwrap_or_else(|| format!("unexpected status {}", status)),
        },
    }
}

impl From<GraphPostData> for Post {
    fn from(post: GraphPostData) -> Self {
        let created_time = DateTime::parse_from_str(&post.created_time, GRAPH_TIME_FORMAT)
            .map(|t| t.with_timezone(&Utc))
            .unwrap_or_else(|e| {
                warn!(
                    "Unparseable created_time {:?} on post {}: {}",
                    post.created_time, post.id, e
                );
                DateTime::<Utc>::UNIX_EPOCH
            });

        Self {
            id: post.id,
            message: post.message,
            created_time,
            permalink_url: post.permalink_url,
        }
    }
}
