use district_monitor::{DistrictMonitor, FetchConfig};
use facebook_client::{GraphApiClient, MockPostSource, PostSource};
use leave_classifier::LeaveClassifier;
use leavewatch_core::{AppConfig, CoreError};
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<(), CoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            "leavewatch=info,leavewatch_core=info,district_monitor=info,facebook_client=info",
        )
        .init();

    tracing::info!("Starting Leavewatch - district leave monitor");

    let config_path = std::env::var_os("LEAVEWATCH_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;

    let classifier = LeaveClassifier::new(config.keywords.clone().into());
    let source: Box<dyn PostSource> = match &config.access_token {
        Some(token) => {
            tracing::info!("Using the Facebook Graph API for district data");
            Box::new(GraphApiClient::new(token.clone()))
        }
        None => {
            tracing::info!("Access token not configured, serving mock district data");
            Box::new(MockPostSource)
        }
    };

    let monitor = DistrictMonitor::new(
        source,
        classifier,
        FetchConfig {
            post_limit: config.post_limit,
            request_delay: config.request_delay(),
        },
    );
    let results = monitor.fetch_all(&config.districts).await;

    let json = serde_json::to_string_pretty(&results)?;
    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, json)?;
            tracing::info!("District data written to {}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
