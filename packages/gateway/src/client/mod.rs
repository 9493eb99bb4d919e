//! Downstream client abstraction for the remote bonus API.
//!
//! The [`BonusApiClient`] trait is the contract between the mediator and the
//! network. Implementations perform exactly one HTTP call per method and
//! hand back a [`CallEnvelope`]; they never interpret status codes or bodies.
//!
//! # Implementations
//!
//! | Type | When to use |
//! |------|-------------|
//! | [`HttpBonusClient`] | Production; talks to the remote API over `reqwest` |
//! | `scripted::ScriptedClient` | Unit tests (test builds only); replays a fixed reply |
//!
//! [`HttpBonusClient`]: http::HttpBonusClient

pub mod http;
#[cfg(test)]
pub mod scripted;

use std::collections::BTreeMap;

use async_trait::async_trait;
use bonus_api::{
    BonusActivation, BonusActivationParams, EligibilityCheck, FiscalCodeParams, InstanceId,
    PaginatedBonusActivationsCollection,
};

use crate::error::ClientError;

// ---------------------------------------------------------------------------
// CallEnvelope
// ---------------------------------------------------------------------------

/// The body of a downstream response.
///
/// Bodies arrive as [`EnvelopeValue::Raw`] and are only decoded by the
/// mediator rule that reads them, so a body the rule ignores can never fail
/// the call.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvelopeValue<T> {
    /// No body was sent.
    Empty,
    /// A body already decoded as the endpoint's resource type.
    Resource(T),
    /// The body bytes as received.
    Raw(Vec<u8>),
}

/// The result of one downstream call, prior to mediation.
///
/// Header names are stored lowercased so lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct CallEnvelope<T> {
    pub status: u16,
    headers: BTreeMap<String, String>,
    pub value: EnvelopeValue<T>,
}

impl<T> CallEnvelope<T> {
    pub fn new(status: u16, value: EnvelopeValue<T>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            value,
        }
    }

    /// An envelope with no body.
    pub fn status_only(status: u16) -> Self {
        Self::new(status, EnvelopeValue::Empty)
    }

    /// An envelope carrying a decoded resource.
    pub fn resource(status: u16, value: T) -> Self {
        Self::new(status, EnvelopeValue::Resource(value))
    }

    /// Build an envelope from a response as read off the wire.
    ///
    /// An empty (or whitespace-only) body yields [`EnvelopeValue::Empty`];
    /// anything else is kept as [`EnvelopeValue::Raw`].
    pub fn decode<I, K, V>(status: u16, headers: I, body: &[u8]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let value = if body.iter().all(u8::is_ascii_whitespace) {
            EnvelopeValue::Empty
        } else {
            EnvelopeValue::Raw(body.to_vec())
        };

        headers
            .into_iter()
            .fold(Self::new(status, value), |env, (k, v)| env.with_header(k, v))
    }

    /// Attach a response header. Later values for the same name win.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The `Location` header of a `201 Created` response.
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }
}

// ---------------------------------------------------------------------------
// BonusApiClient trait
// ---------------------------------------------------------------------------

/// One method per remote endpoint.
///
/// Implementations must be `Send + Sync + 'static` so they can be held in an
/// `Arc<dyn BonusApiClient>` shared by all handler tasks. Retry and
/// authentication policy, if any, belong to the implementation.
#[async_trait]
pub trait BonusApiClient: Send + Sync + 'static {
    /// `POST /bonus/vacanze/eligibility/{fiscal_code}`
    async fn start_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError>;

    /// `GET /bonus/vacanze/eligibility/{fiscal_code}`
    async fn get_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<EligibilityCheck>, ClientError>;

    /// `GET /bonus/vacanze/activations/{fiscal_code}/{bonus_id}`
    async fn get_latest_bonus_activation_by_id(
        &self,
        params: BonusActivationParams,
    ) -> Result<CallEnvelope<BonusActivation>, ClientError>;

    /// `GET /bonus/vacanze/activations/{fiscal_code}`
    async fn get_all_bonus_activations(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<PaginatedBonusActivationsCollection>, ClientError>;

    /// `POST /bonus/vacanze/activations/{fiscal_code}`
    async fn start_bonus_activation_procedure(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_HEADERS: [(&str, &str); 0] = [];

    #[test]
    fn empty_body_decodes_to_empty() {
        let env = CallEnvelope::<InstanceId>::decode(202, NO_HEADERS, b"");
        assert_eq!(env.status, 202);
        assert_eq!(env.value, EnvelopeValue::Empty);

        let env = CallEnvelope::<InstanceId>::decode(202, NO_HEADERS, b"  \n");
        assert_eq!(env.value, EnvelopeValue::Empty);
    }

    #[test]
    fn body_is_kept_raw_with_headers() {
        let env = CallEnvelope::<InstanceId>::decode(
            201,
            [("Location", "resource-url")],
            br#"{"id":"X"}"#,
        );
        assert_eq!(env.value, EnvelopeValue::Raw(br#"{"id":"X"}"#.to_vec()));
        assert_eq!(env.location(), Some("resource-url"));
    }

    #[test]
    fn non_json_body_is_not_an_error() {
        let env = CallEnvelope::<InstanceId>::decode(403, NO_HEADERS, b"Forbidden");
        assert_eq!(env.status, 403);
        assert_eq!(env.value, EnvelopeValue::Raw(b"Forbidden".to_vec()));
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let env = CallEnvelope::<InstanceId>::status_only(201).with_header("LOCATION", "a");
        assert_eq!(env.header("location"), Some("a"));
        assert_eq!(env.header("Location"), Some("a"));
        assert_eq!(env.header("content-type"), None);
    }
}
