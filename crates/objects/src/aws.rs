//! AWS SDK configuration (Imperative Shell).

use aws_config::{BehaviorVersion, SdkConfig};

/// Loads the shared SDK configuration from the default provider chain.
///
/// `AWS_ENDPOINT_URL` redirects both DynamoDB and S3, which is how a local
/// DynamoDB or MinIO is targeted.
pub async fn load_config() -> SdkConfig {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

    match std::env::var("AWS_ENDPOINT_URL") {
        Ok(endpoint) => tracing::info!(endpoint = %endpoint, "Using custom AWS endpoint"),
        Err(_) => tracing::debug!(region = ?config.region(), "Using AWS endpoints"),
    }

    config
}
