//! HttpResponder -- concrete [`Responder`] implementation over HTTP.
//!
//! Sends one `POST {base_url}/respond` per exchange. Transport failures and
//! non-success statuses map to the two recoverable [`ResponderError`] kinds;
//! a success body that fails to parse is reported as `Deserialization`.

use chatline_core::responder::Responder;
use chatline_types::error::ResponderError;
use chatline_types::responder::BotReply;

use super::types::{RespondRequest, RespondResponse};

/// HTTP client for the responder service.
pub struct HttpResponder {
    client: reqwest::Client,
    base_url: String,
}

impl HttpResponder {
    /// Create a client for the given base URL.
    ///
    /// No request timeout is configured: the exchange resolves, rejects, or
    /// runs until the host environment terminates it.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Full URL of the respond endpoint.
    fn url(&self) -> String {
        format!("{}/respond", self.base_url.trim_end_matches('/'))
    }
}

impl Responder for HttpResponder {
    async fn respond(&self, texts: &[String]) -> Result<BotReply, ResponderError> {
        let body = RespondRequest {
            messages: texts.to_vec(),
        };

        let response = self
            .client
            .post(self.url())
            .json(&body)
            .send()
            .await
            .map_err(|err| ResponderError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ResponderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: RespondResponse = response
            .json()
            .await
            .map_err(|err| ResponderError::Deserialization(err.to_string()))?;

        Ok(BotReply {
            reply: parsed.reply,
            high_interest: parsed.high_interest,
        })
    }
}
