use aws_config::{BehaviorVersion, Region};
use aws_sdk_s3::Client;

/// Build an S3 client from the ambient AWS configuration.
///
/// `region` overrides the default provider chain. `endpoint_url` points the
/// client at an S3-compatible service (MinIO, LocalStack) and switches to
/// path-style addressing, which those services expect.
pub async fn build_client(region: Option<String>, endpoint_url: Option<String>) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());
    if let Some(region) = region {
        loader = loader.region(Region::new(region));
    }
    let config = loader.load().await;

    let mut builder = aws_sdk_s3::config::Builder::from(&config);
    if let Some(url) = endpoint_url {
        tracing::info!(endpoint = %url, "using custom S3 endpoint");
        builder = builder.endpoint_url(url).force_path_style(true);
    }

    Client::from_conf(builder.build())
}
