use leavewatch_core::{ConfigError, CoreError, ErrorExt, GraphApiError};

#[test]
fn test_error_display_strings() {
    let token_error = CoreError::GraphApi(GraphApiError::InvalidToken);
    assert_eq!(
        token_error.to_string(),
        "Graph API error: Access token invalid or expired"
    );

    let page_error = CoreError::GraphApi(GraphApiError::PageNotFound {
        page: "dcekm".to_string(),
    });
    assert!(page_error.to_string().contains("dcekm"));

    let config_error = CoreError::Config(ConfigError::InvalidValue {
        field: "post_limit".to_string(),
        value: "0".to_string(),
    });
    assert!(config_error.to_string().contains("post_limit"));
}

#[test]
fn test_credential_failure_detection() {
    let credential = CoreError::GraphApi(GraphApiError::InvalidToken);
    assert!(credential.is_credential_failure());
    assert!(!credential.is_permission_failure());

    let permission = CoreError::GraphApi(GraphApiError::Forbidden {
        page: "collectorkottayam".to_string(),
    });
    assert!(permission.is_permission_failure());
    assert!(!permission.is_credential_failure());

    let server = CoreError::GraphApi(GraphApiError::ServerError { status_code: 502 });
    assert!(!server.is_credential_failure());
    assert!(!server.is_permission_failure());
}

#[test]
fn test_user_friendly_messages() {
    let token_error = CoreError::GraphApi(GraphApiError::InvalidToken);
    let message = token_error.user_friendly_message();
    assert!(!message.is_empty());
    assert!(message.contains("access token"));

    let forbidden = CoreError::GraphApi(GraphApiError::Forbidden {
        page: "wayanadWE".to_string(),
    });
    assert!(forbidden.user_friendly_message().contains("wayanadWE"));

    let rate_limited = CoreError::GraphApi(GraphApiError::RateLimitExceeded { retry_after: 60 });
    assert!(rate_limited.user_friendly_message().contains("60"));
}

#[test]
fn test_graph_errors_convert_to_core() {
    let core: CoreError = GraphApiError::RequestTimeout.into();
    assert!(matches!(
        core,
        CoreError::GraphApi(GraphApiError::RequestTimeout)
    ));

    // log_error returns the error for chaining
    let chained = core.log_error();
    assert!(matches!(
        chained,
        CoreError::GraphApi(GraphApiError::RequestTimeout)
    ));
}
