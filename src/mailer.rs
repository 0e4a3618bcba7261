//! Thin client for the external mail-relay service. The relay is a
//! collaborator, not part of this site: one POST per eligible submission,
//! opaque success, generic failure, no retries.

use serde::Serialize;
use thiserror::Error;

#[cfg(feature = "hydrate")]
const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Service identifiers baked in at compile time from the build
/// environment. Missing values produce a config the relay will reject,
/// not a build failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl RelayConfig {
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("MAIL_RELAY_SERVICE_ID").unwrap_or(""),
            template_id: option_env!("MAIL_RELAY_TEMPLATE_ID").unwrap_or(""),
            public_key: option_env!("MAIL_RELAY_PUBLIC_KEY").unwrap_or(""),
        }
    }
}

/// The three visitor-supplied template parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailMessage {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a MailMessage,
}

/// Delivery is atomic from the caller's perspective: it fully succeeds or
/// fully fails, and there is no structured error code to branch on.
#[derive(Debug, Clone, Error)]
pub enum RelayError {
    #[error("mail relay request failed: {0}")]
    Transport(String),
    #[error("mail relay rejected the message (status {0})")]
    Rejected(u16),
}

/// Hand one message to the relay. No timeout is imposed beyond whatever
/// the underlying transport enforces, and no cancellation is possible
/// once the request is in flight.
#[cfg(feature = "hydrate")]
pub async fn send(config: &RelayConfig, message: &MailMessage) -> Result<(), RelayError> {
    let body = RelayRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: message,
    };

    let response = gloo_net::http::Request::post(RELAY_ENDPOINT)
        .json(&body)
        .map_err(|e| RelayError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| RelayError::Transport(e.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(RelayError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_request_wire_shape() {
        let message = MailMessage {
            from_name: "Ada".to_string(),
            reply_to: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        };
        let request = RelayRequest {
            service_id: "svc_1",
            template_id: "tpl_1",
            user_id: "pk_1",
            template_params: &message,
        };

        let wire = serde_json::to_value(&request).expect("serializable");
        assert_eq!(wire["service_id"], "svc_1");
        assert_eq!(wire["template_id"], "tpl_1");
        assert_eq!(wire["user_id"], "pk_1");
        assert_eq!(wire["template_params"]["from_name"], "Ada");
        assert_eq!(wire["template_params"]["reply_to"], "ada@example.com");
        assert_eq!(wire["template_params"]["message"], "Hello");
    }

    #[test]
    fn relay_errors_stay_generic() {
        let transport = RelayError::Transport("connection reset".to_string());
        assert!(transport.to_string().contains("request failed"));

        let rejected = RelayError::Rejected(422);
        assert!(rejected.to_string().contains("422"));
    }
}
