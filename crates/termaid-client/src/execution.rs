//! Command execution client
//!
//! `execute` is total: every transport fault, non-success status, or
//! undecodable body is folded into an `ExecutionResult` with `error: true`,
//! so callers only ever inspect the result.

use reqwest::Client;
use url::Url;

use termaid_core::prelude::*;

use crate::protocol::{ExecuteRequest, ExecutionResult};

/// Issues `POST /execute` requests
#[derive(Debug, Clone)]
pub struct ExecutionClient {
    client: Client,
    endpoint: Url,
}

impl ExecutionClient {
    pub fn new(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run `command` in `cwd` on the execution service
    pub async fn execute(&self, command: &str, cwd: &str) -> ExecutionResult {
        match self.try_execute(command, cwd).await {
            Ok(result) => {
                debug!(
                    "execute {:?} in {:?} -> error={} cwd={:?}",
                    command, cwd, result.error, result.cwd
                );
                result
            }
            Err(e) => {
                warn!("execute {:?} failed: {}", command, e);
                ExecutionResult::fault(e)
            }
        }
    }

    async fn try_execute(&self, command: &str, cwd: &str) -> Result<ExecutionResult> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&ExecuteRequest { command, cwd })
            .send()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::http_status(status.as_u16()));
        }

        response
            .json::<ExecutionResult>()
            .await
            .map_err(|e| Error::transport(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::refused_base_url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ExecutionClient {
        let endpoint = Url::parse(&format!("{}/execute", server.uri())).unwrap();
        ExecutionClient::new(Client::new(), endpoint)
    }

    #[tokio::test]
    async fn test_execute_success_returns_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .and(body_json(serde_json::json!({"command": "dir", "cwd": "C:\\work"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "output": "file.txt",
                "error": false,
                "cwd": "C:\\work"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).execute("dir", r"C:\work").await;

        assert_eq!(
            result,
            ExecutionResult::success("file.txt").with_cwd(r"C:\work")
        );
    }

    #[tokio::test]
    async fn test_execute_remote_failure_passes_through() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "output": "'badcmd' is not recognized",
                "error": true
            })))
            .mount(&server)
            .await;

        let result = client_for(&server).execute("badcmd", "/").await;

        assert!(result.error);
        assert_eq!(result.output, "'badcmd' is not recognized");
    }

    #[tokio::test]
    async fn test_execute_http_error_is_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = client_for(&server).execute("dir", "/").await;

        assert!(result.error);
        assert_eq!(
            result.output,
            "Error executing command: HTTP error! status: 500"
        );
        assert_eq!(result.cwd, None);
    }

    #[tokio::test]
    async fn test_execute_non_json_body_is_normalized() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/execute"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server).execute("dir", "/").await;

        assert!(result.error);
        assert!(result.output.starts_with("Error executing command: "));
    }

    #[tokio::test]
    async fn test_execute_unreachable_is_normalized() {
        let endpoint = Url::parse(&format!("{}/execute", refused_base_url())).unwrap();
        let client = ExecutionClient::new(Client::new(), endpoint);

        let result = client.execute("dir", "/").await;

        assert!(result.error);
        assert!(result.output.starts_with("Error executing command: "));
        assert!(!result.output.contains("HTTP error"));
        assert_eq!(result.cwd, None);
    }
}
