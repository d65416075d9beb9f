use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One post retrieved from a collector page, newest first in any sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub message: Option<String>,
    pub created_time: DateTime<Utc>,
    pub permalink_url: Option<String>,
}

/// Verdict of the leave classifier for a single text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification {
    pub has_leave_info: bool,
    pub keywords: Vec<String>,
    pub likely_leave: bool,
}

/// One monitored district mapped to its collector page identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistrictConfig {
    pub name: String,
    pub page: String,
}

impl DistrictConfig {
    pub fn new(name: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            page: page.into(),
        }
    }
}

/// Per-district outcome of one fetch cycle.
///
/// Serialized field names match the dashboard JSON contract. `error` is only
/// present when the fetch for this district failed; classification fields are
/// at their defaults in that case.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictResult {
    pub has_leave_info: bool,
    pub likely_leave: bool,
    pub keywords: Vec<String>,
    pub last_updated: DateTime<Utc>,
    pub fb_post: String,
    pub recent_posts: Vec<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn district_result_serializes_with_dashboard_field_names() {
        let result = DistrictResult {
            has_leave_info: true,
            likely_leave: false,
            keywords: vec!["rain".to_string()],
            last_updated: Utc::now(),
            fb_post: "https://facebook.com/dcekm".to_string(),
            recent_posts: Vec::new(),
            error: None,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["hasLeaveInfo"], true);
        assert_eq!(json["likelyLeave"], false);
        assert_eq!(json["fbPost"], "https://facebook.com/dcekm");
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn district_result_error_field_survives_serialization() {
        let result = DistrictResult {
            has_leave_info: false,
            likely_leave: false,
            keywords: Vec::new(),
            last_updated: Utc::now(),
            fb_post: "https://facebook.com/dcekm".to_string(),
            recent_posts: Vec::new(),
            error: Some("Access token invalid or expired".to_string()),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error"], "Access token invalid or expired");
    }
}
