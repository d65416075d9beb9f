pub mod api;
pub mod mock;

pub use api::GraphApiClient;
pub use mock::MockPostSource;

use async_trait::async_trait;
use leavewatch_core::{CoreError, Post};

/// Source of recent posts for a collector page, newest first.
///
/// The Graph API client is the production implementation; the mock source
/// stands in when no access token is configured. The orchestrator only sees
/// this trait.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn recent_posts(&self, page: &str, limit: u32) -> Result<Vec<Post>, CoreError>;
}
