//! Read-only JSON-RPC probe for the Ethereum test network.
//!
//! - Only `web3_clientVersion` is ever called; nothing is signed or sent.
//! - `check_liveness` folds every failure into `false`.

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

const USER_AGENT: &str = concat!("cow-marketplace/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("http request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },
    #[error("rpc response missing result")]
    MissingResult,
}

#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: [(); 0],
}

#[derive(Debug, Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
}

#[derive(Clone)]
pub struct RpcClient {
    http: Client,
    endpoint: Url,
}

impl RpcClient {
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, RpcError> {
        let endpoint = Url::parse(endpoint)?;
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { http, endpoint })
    }

    /// Host part of the endpoint, safe to show without leaking API keys in the path.
    pub fn host(&self) -> String {
        self.endpoint.host_str().unwrap_or("unknown").to_string()
    }

    pub async fn client_version(&self) -> Result<String, RpcError> {
        self.call("web3_clientVersion").await
    }

    async fn call<T>(&self, method: &str) -> Result<T, RpcError>
    where
        T: DeserializeOwned,
    {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params: [],
        };
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let RpcResponse { result, error } = response.json::<RpcResponse<T>>().await?;

        if let Some(RpcErrorBody { code, message }) = error {
            return Err(RpcError::Rpc { code, message });
        }
        result.ok_or(RpcError::MissingResult)
    }
}

/// Whether the endpoint answers a JSON-RPC request. Never fails.
pub async fn check_liveness(endpoint: &str) -> bool {
    check_liveness_within(endpoint, DEFAULT_TIMEOUT).await
}

pub async fn check_liveness_within(endpoint: &str, timeout: Duration) -> bool {
    probe(endpoint, timeout).await.is_ok()
}

/// Queries the client version, logging the outcome.
pub async fn probe(endpoint: &str, timeout: Duration) -> Result<String, RpcError> {
    let client = RpcClient::with_timeout(endpoint, timeout).map_err(|err| {
        log::warn!("liveness probe skipped: {err}");
        err
    })?;

    match client.client_version().await {
        Ok(version) => {
            log::info!("{} is live ({version})", client.host());
            Ok(version)
        }
        Err(err) => {
            log::warn!("{} is unreachable: {err}", client.host());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    use super::*;

    fn serve_once(body: &'static str) -> String {
        serve_once_with_status("200 OK", body)
    }

    /// Serves exactly one HTTP response with the given status line and JSON body.
    fn serve_once_with_status(status: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{addr}")
    }

    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_not_live() {
        let url = closed_port_url();
        assert!(!check_liveness_within(&url, Duration::from_secs(2)).await);
    }

    #[tokio::test]
    async fn malformed_url_is_not_live() {
        assert!(!check_liveness("not a url").await);
    }

    #[tokio::test]
    async fn answering_endpoint_is_live() {
        let url = serve_once(r#"{"jsonrpc":"2.0","id":1,"result":"Geth/v1.14.0"}"#);
        let client = RpcClient::with_timeout(&url, Duration::from_secs(5)).unwrap();
        assert_eq!(client.client_version().await.unwrap(), "Geth/v1.14.0");
        assert_eq!(client.host(), "127.0.0.1");
    }

    #[tokio::test]
    async fn answering_endpoint_passes_liveness_check() {
        let url = serve_once(r#"{"jsonrpc":"2.0","id":1,"result":"Geth/v1.14.0"}"#);
        assert!(check_liveness_within(&url, Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn server_error_status_is_not_live() {
        let url = serve_once_with_status(
            "500 Internal Server Error",
            r#"{"jsonrpc":"2.0","id":1,"result":"Geth/v1.14.0"}"#,
        );
        assert!(!check_liveness_within(&url, Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn success_without_result_is_not_live() {
        let url = serve_once(r#"{"jsonrpc":"2.0","id":1}"#);
        let client = RpcClient::with_timeout(&url, Duration::from_secs(5)).unwrap();
        assert!(matches!(
            client.client_version().await,
            Err(RpcError::MissingResult)
        ));

        let url = serve_once(r#"{"jsonrpc":"2.0","id":1}"#);
        assert!(!check_liveness_within(&url, Duration::from_secs(5)).await);
    }

    #[tokio::test]
    async fn rpc_error_bodies_are_not_live() {
        let url = serve_once(
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"method not found"}}"#,
        );
        assert!(!check_liveness_within(&url, Duration::from_secs(5)).await);
    }
}
