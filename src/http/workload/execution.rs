use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Request};
use tracing::error;

use super::CallPort;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallOutcome {
    /// The service answered. `body_bytes` is only known when the body was read
    /// or the server announced a length.
    Completed {
        status: u16,
        body_bytes: Option<u64>,
    },
    /// Connection, DNS, timeout or similar transport problem.
    Failed { reason: String, timed_out: bool },
}

impl CallOutcome {
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, CallOutcome::Completed { .. })
    }
}

/// Executes the prepared request through the shared client.
pub(crate) struct HttpCallExecutor {
    client: Client,
    request: Arc<Request>,
    debug: bool,
}

impl HttpCallExecutor {
    pub(crate) const fn new(client: Client, request: Arc<Request>, debug: bool) -> Self {
        Self {
            client,
            request,
            debug,
        }
    }
}

#[async_trait]
impl CallPort for HttpCallExecutor {
    async fn execute(&self) -> CallOutcome {
        // Fresh request per call; the prepared one is never sent itself.
        let Some(request) = self.request.try_clone() else {
            error!("Failed to clone request template.");
            return CallOutcome::Failed {
                reason: "request template could not be cloned".to_owned(),
                timed_out: false,
            };
        };

        match self.client.execute(request).await {
            Ok(response) if self.debug => read_and_report(response).await,
            Ok(response) => CallOutcome::Completed {
                status: response.status().as_u16(),
                body_bytes: response.content_length(),
            },
            Err(err) => {
                error!("Request failed to send to service with: {}", err);
                CallOutcome::Failed {
                    timed_out: err.is_timeout(),
                    reason: err.to_string(),
                }
            }
        }
    }
}

async fn read_and_report(response: reqwest::Response) -> CallOutcome {
    let status = response.status().as_u16();
    match response.text().await {
        Ok(body) => {
            println!("Status Code: {} Response Body: {}", status, body);
            CallOutcome::Completed {
                status,
                body_bytes: Some(u64::try_from(body.len()).unwrap_or(u64::MAX)),
            }
        }
        Err(err) => {
            // The service did answer, so the status still counts.
            error!(
                "Service responded with status code {} but the body could not be read: {}",
                status, err
            );
            CallOutcome::Completed {
                status,
                body_bytes: None,
            }
        }
    }
}
