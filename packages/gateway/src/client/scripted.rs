//! Scripted implementation of [`BonusApiClient`] for tests.
//!
//! A [`ScriptedClient`] replays one fixed [`Script`] for every call and
//! records the parameters of each call, so tests can assert both what the
//! mediator did with a response and what request it issued to get it.
//! Response bodies go through [`CallEnvelope::decode`] exactly as they do in
//! [`HttpBonusClient`](super::http::HttpBonusClient).

use std::sync::Mutex;

use async_trait::async_trait;
use bonus_api::{
    BonusActivation, BonusActivationParams, EligibilityCheck, FiscalCodeParams, InstanceId,
    PaginatedBonusActivationsCollection,
};
use serde_json::Value;

use super::{BonusApiClient, CallEnvelope};
use crate::error::ClientError;

/// What the client does when called.
#[derive(Debug, Clone)]
pub enum Script {
    /// Return a response with this status, headers and body bytes.
    Respond {
        status: u16,
        headers: Vec<(String, String)>,
        body: Vec<u8>,
    },
    /// Fail with [`ClientError::Transport`] carrying this message.
    Fail(String),
    /// Panic while the call is being polled.
    Panic,
}

/// A downstream call as the client received it.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    StartBonusEligibilityCheck(FiscalCodeParams),
    GetBonusEligibilityCheck(FiscalCodeParams),
    GetLatestBonusActivationById(BonusActivationParams),
    GetAllBonusActivations(FiscalCodeParams),
    StartBonusActivationProcedure(FiscalCodeParams),
}

/// Thread-safe [`BonusApiClient`] that replays a [`Script`].
pub struct ScriptedClient {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedClient {
    pub fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Respond with `status` and no body.
    pub fn status(status: u16) -> Self {
        Self::text(status, "")
    }

    /// Respond with `status` and a JSON body.
    pub fn json(status: u16, body: Value) -> Self {
        Self::text(status, &body.to_string())
    }

    /// Respond with `status` and a verbatim body.
    pub fn text(status: u16, body: &str) -> Self {
        Self::new(Script::Respond {
            status,
            headers: vec![],
            body: body.as_bytes().to_vec(),
        })
    }

    /// Fail every call at the transport level.
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(Script::Fail(message.into()))
    }

    /// Panic inside every call.
    pub fn panicking() -> Self {
        Self::new(Script::Panic)
    }

    /// Add a response header (no effect on `Fail`/`Panic` scripts).
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Script::Respond { headers, .. } = &mut self.script {
            headers.push((name.into(), value.into()));
        }
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn replay<T>(
        &self,
        call: RecordedCall,
    ) -> Result<CallEnvelope<T>, ClientError> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(call);

        match &self.script {
            Script::Respond {
                status,
                headers,
                body,
            } => Ok(CallEnvelope::decode(*status, headers.iter().cloned(), body)),
            Script::Fail(message) => Err(ClientError::Transport(message.clone().into())),
            Script::Panic => panic!("scripted bonus API client panicked"),
        }
    }
}

#[async_trait]
impl BonusApiClient for ScriptedClient {
    async fn start_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError> {
        self.replay(RecordedCall::StartBonusEligibilityCheck(params))
    }

    async fn get_bonus_eligibility_check(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<EligibilityCheck>, ClientError> {
        self.replay(RecordedCall::GetBonusEligibilityCheck(params))
    }

    async fn get_latest_bonus_activation_by_id(
        &self,
        params: BonusActivationParams,
    ) -> Result<CallEnvelope<BonusActivation>, ClientError> {
        self.replay(RecordedCall::GetLatestBonusActivationById(params))
    }

    async fn get_all_bonus_activations(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<PaginatedBonusActivationsCollection>, ClientError> {
        self.replay(RecordedCall::GetAllBonusActivations(params))
    }

    async fn start_bonus_activation_procedure(
        &self,
        params: FiscalCodeParams,
    ) -> Result<CallEnvelope<InstanceId>, ClientError> {
        self.replay(RecordedCall::StartBonusActivationProcedure(params))
    }
}
