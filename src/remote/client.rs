use reqwest::blocking::Client;
use serde_json::Value;

use super::types::{StatsPayload, VerifyPayload, error_message};
use super::{AccountStats, RemoteError, RemoteOptions};
use crate::classify::{Classification, Source, Status};
use crate::config::Credential;

/// One authenticated JSON lookup against the verification API.
pub trait Transport {
    fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        credential: &Credential,
    ) -> Result<Value, RemoteError>;
}

/// Blocking HTTP transport built on `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    options: RemoteOptions,
}

impl HttpTransport {
    pub fn new(options: RemoteOptions) -> Result<Self, RemoteError> {
        let mut builder = Client::builder().user_agent(options.user_agent.clone());
        // reqwest applique 30 s par défaut, `None` désactive la limite
        builder = builder.timeout(options.timeout());
        let client = builder.build().map_err(RemoteError::client_init)?;
        Ok(Self { client, options })
    }
}

impl Transport for HttpTransport {
    fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
        credential: &Credential,
    ) -> Result<Value, RemoteError> {
        let url = self.options.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(credential.expose())
            .send()
            .map_err(RemoteError::http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(RemoteError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(RemoteError::http)?;
        serde_json::from_str(&body).map_err(RemoteError::invalid_response)
    }
}

/// Client for the remote verification service.
///
/// Every call is a single attempt: no retry, no cache.
#[derive(Debug, Clone)]
pub struct RemoteClient<T = HttpTransport> {
    pub(crate) transport: T,
}

impl RemoteClient<HttpTransport> {
    pub fn from_options(options: RemoteOptions) -> Result<Self, RemoteError> {
        Ok(Self::with_transport(HttpTransport::new(options)?))
    }
}

impl<T: Transport> RemoteClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// Verify one address. Failures are folded into an `error` classification
    /// so that a batch can keep going.
    pub fn verify(&self, address: &str, credential: &Credential) -> Classification {
        let payload = self
            .transport
            .get_json("/v1/verify", &[("email", address)], credential)
            .and_then(|value| classification_from_value(address, value));

        match payload {
            Ok(classification) => classification,
            Err(err) => {
                tracing::warn!(email = address, error = %err, "remote verification failed");
                Classification::remote_error(address, err.to_string())
            }
        }
    }

    /// Usage statistics for the account owning `credential`.
    pub fn fetch_stats(&self, credential: &Credential) -> Result<AccountStats, RemoteError> {
        let value = self.transport.get_json("/v1/stats", &[], credential)?;
        let payload: StatsPayload =
            serde_json::from_value(value).map_err(RemoteError::invalid_response)?;
        if let Some(message) = error_message(payload.error) {
            return Err(RemoteError::Api(message));
        }
        Ok(payload.stats)
    }
}

pub(crate) fn classification_from_value(
    address: &str,
    value: Value,
) -> Result<Classification, RemoteError> {
    if !value.is_object() {
        return Err(RemoteError::InvalidResponse(
            "expected a JSON object".to_string(),
        ));
    }
    let payload: VerifyPayload =
        serde_json::from_value(value).map_err(RemoteError::invalid_response)?;

    if let Some(message) = error_message(payload.error) {
        return Err(RemoteError::Api(message));
    }
    let verdict = match payload.result {
        Some(Value::String(verdict)) => verdict,
        None | Some(Value::Null) => {
            return Err(RemoteError::InvalidResponse(
                "missing `result` field".to_string(),
            ));
        }
        Some(other) => {
            return Err(RemoteError::InvalidResponse(format!(
                "`result` is not a string: {other}"
            )));
        }
    };

    let (status, detail) = map_verdict(&verdict);
    let mut classification = Classification::new(address, status, Source::Remote)
        .with_flags(payload.disposable, payload.role);
    if let Some(detail) = detail {
        classification = classification.with_detail(detail);
    }
    Ok(classification)
}

/// Verdicts hors `valid`/`invalid`/`risky` comptent comme `risky`; on garde le brut.
pub(crate) fn map_verdict(verdict: &str) -> (Status, Option<String>) {
    match verdict.trim().to_ascii_lowercase().as_str() {
        "valid" => (Status::Valid, None),
        "invalid" => (Status::Invalid, None),
        "risky" => (Status::Risky, None),
        _ => (Status::Risky, Some(format!("verdict: {verdict}"))),
    }
}
