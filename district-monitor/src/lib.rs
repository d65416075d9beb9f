use chrono::Utc;
use facebook_client::PostSource;
use indexmap::IndexMap;
use leave_classifier::LeaveClassifier;
use leavewatch_core::{DistrictConfig, DistrictResult, ErrorExt, Post};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Tuning for one fetch cycle.
///
/// The delay is a flat pause between districts, not a token bucket; it bounds
/// the outbound request rate of the sequential loop. Tests inject a zero
/// delay.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub post_limit: u32,
    pub request_delay: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            post_limit: 3,
            request_delay: Duration::from_secs(1),
        }
    }
}

/// Runs one fetch-and-classify cycle over the configured districts.
pub struct DistrictMonitor {
    source: Box<dyn PostSource>,
    classifier: LeaveClassifier,
    config: FetchConfig,
}

impl DistrictMonitor {
    pub fn new(
        source: Box<dyn PostSource>,
        classifier: LeaveClassifier,
        config: FetchConfig,
    ) -> Self {
        Self {
            source,
            classifier,
            config,
        }
    }

    /// Visit every district strictly in slice order and return one result per
    /// district, insertion-ordered.
    ///
    /// A district whose fetch fails degrades to a default result carrying an
    /// error message; the cycle always completes over the whole slice. The
    /// configured delay runs between districts, not after the last one.
    pub async fn fetch_all(
        &self,
        districts: &[DistrictConfig],
    ) -> IndexMap<String, DistrictResult> {
        let mut results = IndexMap::with_capacity(districts.len());

        for (index, district) in districts.iter().enumerate() {
            info!("Fetching posts for {}", district.name);

            let result = match self
                .source
                .recent_posts(&district.page, self.config.post_limit)
                .await
            {
                Ok(posts) => self.analyze_posts(&district.page, posts),
                Err(e) => {
                    if e.is_credential_failure() {
                        warn!("Access token rejected while fetching {}", district.name);
                    } else if e.is_permission_failure() {
                        warn!("Missing page permission for {}", district.name);
                    }
                    e.log_error();
                    unavailable(&district.page, e.user_friendly_message())
                }
            };
            results.insert(district.name.clone(), result);

            if index + 1 < districts.len() {
                sleep(self.config.request_delay).await;
            }
        }

        results
    }

    fn analyze_posts(&self, page: &str, posts: Vec<Post>) -> DistrictResult {
        let Some(latest) = posts.first() else {
            info!("No recent posts for page {}", page);
            return no_posts(page);
        };

        let classification = self.classifier.classify(latest.message.as_deref());
        let fb_post = latest
            .permalink_url
            .clone()
            .unwrap_or_else(|| profile_url(page));

        DistrictResult {
            has_leave_info: classification.has_leave_info,
            likely_leave: classification.likely_leave,
            keywords: classification.keywords,
            last_updated: Utc::now(),
            fb_post,
            recent_posts: posts,
            error: None,
        }
    }
}

/// Profile URL shown when a page has no linkable post.
fn profile_url(page: &str) -> String {
    format!("https://facebook.com/{}", page)
}

fn no_posts(page: &str) -> DistrictResult {
    DistrictResult {
        has_leave_info: false,
        likely_leave: false,
        keywords: Vec::new(),
        last_updated: Utc::now(),
        fb_post: profile_url(page),
        recent_posts: Vec::new(),
        error: None,
    }
}

fn unavailable(page: &str, message: String) -> DistrictResult {
    DistrictResult {
        error: Some(message),
        ..no_posts(page)
    }
}
