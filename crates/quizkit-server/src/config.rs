use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

/// Which document store backs the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    S3,
    Memory,
}

/// Server settings, read from the environment.
///
/// | variable | default |
/// |---|---|
/// | `QUIZKIT_STORE` | `s3` (`memory` for a throwaway store) |
/// | `QUIZKIT_BUCKET` | `quizkit` |
/// | `QUIZKIT_S3_ENDPOINT` | unset (AWS) |
/// | `AWS_REGION` | unset (default provider chain) |
/// | `QUIZKIT_BIND` / `PORT` | `0.0.0.0` / `5000` |
/// | `QUIZKIT_STATIC_DIR` | unset (JSON 404 for unknown routes) |
///
/// `AWS_LAMBDA_RUNTIME_API`, set by the Lambda runtime, switches the binary
/// from a TCP listener to the Lambda event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub store: StoreKind,
    pub bucket: String,
    pub s3_endpoint: Option<String>,
    pub region: Option<String>,
    pub address: SocketAddr,
    pub static_dir: Option<PathBuf>,
    pub lambda: bool,
}

const DEFAULT_BUCKET: &str = "quizkit";
const DEFAULT_PORT: u16 = 5000;

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let store = match get("QUIZKIT_STORE").as_deref() {
            None | Some("s3") => StoreKind::S3,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(eyre::eyre!(
                    "QUIZKIT_STORE must be \"s3\" or \"memory\", got {other:?}"
                ));
            }
        };

        let host: IpAddr = match get("QUIZKIT_BIND") {
            Some(host) => host
                .parse()
                .map_err(|e| eyre::eyre!("invalid QUIZKIT_BIND {host:?}: {e}"))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };
        let port: u16 = match get("PORT") {
            Some(port) => port
                .parse()
                .map_err(|e| eyre::eyre!("invalid PORT {port:?}: {e}"))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            store,
            bucket: get("QUIZKIT_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            s3_endpoint: get("QUIZKIT_S3_ENDPOINT"),
            region: get("AWS_REGION"),
            address: SocketAddr::new(host, port),
            static_dir: get("QUIZKIT_STATIC_DIR").map(PathBuf::from),
            lambda: get("AWS_LAMBDA_RUNTIME_API").is_some(),
        })
    }
}
