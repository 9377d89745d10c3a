use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;

/// Build an S3 client from the default credential chain and region.
pub async fn build_client() -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    Client::new(&config)
}

/// Build an S3 client against a custom S3-compatible endpoint (e.g. MinIO
/// for local development). Path-style addressing is forced because such
/// endpoints rarely serve virtual-hosted buckets.
pub async fn build_client_with_endpoint(endpoint_url: &str) -> Client {
    let config = aws_config::defaults(BehaviorVersion::latest()).load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .endpoint_url(endpoint_url)
        .force_path_style(true)
        .build();
    Client::from_conf(s3_config)
}
