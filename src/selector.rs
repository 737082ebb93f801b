//! Chooses between the offline heuristic and the remote API for each address.

use crate::classify::{Classification, classify_offline};
use crate::config::Credential;
use crate::remote::{HttpTransport, RemoteClient, RemoteError, RemoteOptions, Transport};

/// Immutable run configuration, passed down explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyConfig {
    pub credential: Option<Credential>,
    pub offline_forced: bool,
}

impl VerifyConfig {
    pub fn new(credential: Option<Credential>, offline_forced: bool) -> Self {
        Self {
            credential,
            offline_forced,
        }
    }

    pub fn mode(&self) -> VerifyMode<'_> {
        VerifyMode::select(self.credential.as_ref(), self.offline_forced)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyMode<'a> {
    Offline,
    Remote(&'a Credential),
}

impl<'a> VerifyMode<'a> {
    /// Offline when forced or when no credential is configured.
    pub fn select(credential: Option<&'a Credential>, offline_forced: bool) -> Self {
        match credential {
            Some(credential) if !offline_forced => Self::Remote(credential),
            _ => Self::Offline,
        }
    }

    pub fn is_offline(&self) -> bool {
        matches!(self, Self::Offline)
    }
}

/// Classify one address according to `credential` / `offline_forced`.
///
/// `remote` may be `None` when the selection ends up offline. A remote
/// selection without a client yields an `Error` classification from the
/// remote source rather than a silent offline verdict.
pub fn select_and_classify<T: Transport>(
    address: &str,
    credential: Option<&Credential>,
    offline_forced: bool,
    remote: Option<&RemoteClient<T>>,
) -> Classification {
    match (VerifyMode::select(credential, offline_forced), remote) {
        (VerifyMode::Remote(credential), Some(client)) => client.verify(address, credential),
        (VerifyMode::Remote(_), None) => {
            tracing::warn!(email = address, "remote verification selected without a client");
            Classification::remote_error(
                address,
                "remote verification selected but no client configured",
            )
        }
        (VerifyMode::Offline, _) => classify_offline(address),
    }
}

/// A [`VerifyConfig`] bound to the client it needs, shared by the single
/// address and the bulk commands.
#[derive(Debug)]
pub struct Selector<T = HttpTransport> {
    config: VerifyConfig,
    remote: Option<RemoteClient<T>>,
}

impl Selector<HttpTransport> {
    /// Builds the HTTP client only when the configuration selects the remote API.
    pub fn connect(config: VerifyConfig, options: RemoteOptions) -> Result<Self, RemoteError> {
        let remote = if config.mode().is_offline() {
            None
        } else {
            Some(RemoteClient::from_options(options)?)
        };
        Ok(Self { config, remote })
    }

    pub fn offline() -> Self {
        Self {
            config: VerifyConfig::new(None, true),
            remote: None,
        }
    }
}

impl<T: Transport> Selector<T> {
    pub fn with_client(config: VerifyConfig, client: RemoteClient<T>) -> Self {
        Self {
            config,
            remote: Some(client),
        }
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    pub fn mode(&self) -> VerifyMode<'_> {
        self.config.mode()
    }

    pub fn classify(&self, address: &str) -> Classification {
        select_and_classify(
            address,
            self.config.credential.as_ref(),
            self.config.offline_forced,
            self.remote.as_ref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::classify::{Source, Status};
    use crate::remote::tests::StubTransport;

    impl Selector<StubTransport> {
        pub(crate) fn remote_calls(&self) -> usize {
            self.remote
                .as_ref()
                .map(|client| client.transport.calls.borrow().len())
                .unwrap_or(0)
        }
    }

    fn remote_risky() -> RemoteClient<StubTransport> {
        RemoteClient::with_transport(StubTransport::new(|_, _| Ok(json!({"result": "risky"}))))
    }

    #[test]
    fn mode_selection() {
        let key = Credential::new("vf_1234");
        assert_eq!(VerifyMode::select(None, false), VerifyMode::Offline);
        assert_eq!(VerifyMode::select(None, true), VerifyMode::Offline);
        assert_eq!(VerifyMode::select(Some(&key), true), VerifyMode::Offline);
        assert_eq!(VerifyMode::select(Some(&key), false), VerifyMode::Remote(&key));
    }

    #[test]
    fn forced_offline_never_calls_remote() {
        let config = VerifyConfig::new(Some(Credential::new("vf_1234")), true);
        let selector = Selector::with_client(config, remote_risky());
        let c = selector.classify("user@example.com");
        assert_eq!(c.source, Source::Offline);
        assert_eq!(selector.remote_calls(), 0);
    }

    #[test]
    fn missing_credential_uses_offline() {
        let selector = Selector::with_client(VerifyConfig::default(), remote_risky());
        let c = selector.classify("user@example.com");
        assert_eq!(c.source, Source::Offline);
        assert_eq!(c.status, Status::Valid);
    }

    #[test]
    fn credential_uses_remote() {
        let config = VerifyConfig::new(Some(Credential::new("vf_1234")), false);
        let selector = Selector::with_client(config, remote_risky());
        let c = selector.classify("user@example.com");
        assert_eq!(c.source, Source::Remote);
        assert_eq!(c.status, Status::Risky);
    }

    #[test]
    fn free_function_matches_selector() {
        let key = Credential::new("vf_1234");
        let client = remote_risky();
        let direct = select_and_classify("a@b.com", Some(&key), false, Some(&client));
        let selector = Selector::with_client(VerifyConfig::new(Some(key), false), remote_risky());
        assert_eq!(direct, selector.classify("a@b.com"));
    }

    #[test]
    fn offline_selector_has_no_client() {
        let selector = Selector::offline();
        assert!(selector.mode().is_offline());
        assert_eq!(selector.classify("bad").status, Status::Invalid);
    }

    #[test]
    fn remote_selection_without_client_is_an_error() {
        let key = Credential::new("vf_1234");
        let c = select_and_classify::<StubTransport>("user@example.com", Some(&key), false, None);
        assert_eq!(c.status, Status::Error);
        assert_eq!(c.source, Source::Remote);
        assert!(c.detail.as_deref().unwrap_or("").contains("no client"));

        let c = select_and_classify::<StubTransport>("user@example.com", Some(&key), true, None);
        assert_eq!(c.source, Source::Offline);
    }
}
