use crate::PostSource;
use async_trait::async_trait;
use chrono::Utc;
use leavewatch_core::{CoreError, Post};
use tracing::debug;

/// Canned stand-in for the Graph API, selected when no access token is
/// configured. Every page yields exactly one deterministic post; a few pages
/// carry texts that exercise the classifier, the rest get a generic
/// administrative note. Posts have no permalink, so results fall back to the
/// profile URL just like the live dashboard's mock mode.
#[derive(Debug, Clone, Default)]
pub struct MockPostSource;

const GENERIC_POST: &str = "General administrative update";

const CANNED_POSTS: &[(&str, &str)] = &[
    ("collectorkottayam", "കാലാവസ്ഥ പ്രതികൂലമായതിനാൽ ജാഗ്രത പാലിക്കുക"),
    (
        "collectortvpm",
        "Today's meeting with department heads completed successfully",
    ),
    ("wayanadWE", "സ്കൂൾ അവധി പ്രഖ്യാപിച്ചു കാരണം കനത്ത മഴ"),
];

#[async_trait]
impl PostSource for MockPostSource {
    async fn recent_posts(&self, page: &str, limit: u32) -> Result<Vec<Post>, CoreError> {
        debug!("Serving canned post for page {}", page);
        let message = CANNED_POSTS
            .iter()
            .find(|(p, _)| *p == page)
            .map(|(_, text)| *text)
            .unwrap_or(GENERIC_POST);

        let post = Post {
            id: format!("{}_mock", page),
            message: Some(message.to_string()),
            created_time: Utc::now(),
            permalink_url: None,
        };

        Ok(vec![post].into_iter().take(limit as usize).collect())
    }
}
