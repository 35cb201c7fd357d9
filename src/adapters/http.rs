use crate::domain::model::{SignupAck, SignupPayload, SignupRejection};
use crate::domain::ports::SignupGateway;
use crate::utils::error::{Result, SignupError};
use async_trait::async_trait;
use reqwest::Client;

/// Posts the signup payload to a remote endpoint as JSON.
#[derive(Debug, Clone)]
pub struct HttpSignupGateway {
    client: Client,
    endpoint: String,
}

impl HttpSignupGateway {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SignupGateway for HttpSignupGateway {
    async fn submit(&self, payload: &SignupPayload) -> Result<SignupAck> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Signup response status: {}", status);

        if status.is_success() {
            let ack: SignupAck = response.json().await?;
            if !ack.ok {
                return Err(SignupError::Rejected {
                    status: status.as_u16(),
                    errors: vec![],
                });
            }
            return Ok(ack);
        }

        // error bodies are informational only
        let errors = match response.json::<SignupRejection>().await {
            Ok(rejection) => rejection.errors,
            Err(e) => {
                tracing::debug!("Unreadable error body: {}", e);
                vec![]
            }
        };
        for error in &errors {
            tracing::debug!("Server rejected '{}': {}", error.field, error.message);
        }
        Err(SignupError::Rejected {
            status: status.as_u16(),
            errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn payload() -> SignupPayload {
        SignupPayload {
            fullname: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            username: "ada_l".to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_posts_json_payload() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(POST)
                .path("/api/signup")
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "fullname": "Ada Lovelace",
                    "email": "ada@example.com",
                    "username": "ada_l"
                }));
            then.status(200)
                .json_body(serde_json::json!({"ok": true, "msg": "User validated and (mock) created."}));
        });

        let gateway = HttpSignupGateway::new(server.url("/api/signup"));
        let ack = gateway.submit(&payload()).await.unwrap();

        api_mock.assert();
        assert!(ack.ok);
        assert_eq!(ack.msg, "User validated and (mock) created.");
    }

    #[tokio::test]
    async fn test_submit_surfaces_field_errors() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/signup");
            then.status(400).json_body(serde_json::json!({
                "ok": false,
                "errors": [{"field": "password", "message": "Password required."}]
            }));
        });

        let gateway = HttpSignupGateway::new(server.url("/api/signup"));
        match gateway.submit(&payload()).await {
            Err(SignupError::Rejected { status, errors }) => {
                assert_eq!(status, 400);
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "password");
            }
            other => panic!("expected rejection, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_submit_server_failure_without_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/api/signup");
            then.status(500);
        });

        let gateway = HttpSignupGateway::new(server.url("/api/signup"));
        let err = gateway.submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SignupError::Rejected { status: 500, .. }));
        assert_eq!(err.user_friendly_message(), "Server error. Try later.");
    }
}
