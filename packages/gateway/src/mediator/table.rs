//! Declarative status-code tables and the shared dispatch routine.

use bonus_api::ProblemJson;
use serde::de::DeserializeOwned;
use tracing::warn;

use super::{Outcome, DECODE_FAILURE_DETAIL, DOWNSTREAM_ERROR_DETAIL};
use crate::client::{CallEnvelope, EnvelopeValue};

/// What to produce for one status code, and how to extract its payload.
///
/// Only `Json`, `RedirectToResource` and `Internal` read the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusRule {
    /// Pass the decoded resource through as [`Outcome::SuccessJson`].
    Json,
    /// Pass the decoded resource and the `Location` header through as
    /// [`Outcome::SuccessRedirectToResource`].
    RedirectToResource,
    /// [`Outcome::SuccessAccepted`]; any body is ignored.
    Accepted,
    /// [`Outcome::ErrorValidation`] with a fixed title and detail.
    Validation {
        title: &'static str,
        detail: &'static str,
    },
    /// [`Outcome::ErrorForbiddenNotAuthorized`].
    ForbiddenNotAuthorized,
    /// [`Outcome::ErrorNotFound`].
    NotFound,
    /// [`Outcome::ErrorInternal`] carrying the problem detail of the body,
    /// decoded as [`ProblemJson`].
    Internal,
}

/// The status codes one operation understands, in declaration order.
///
/// Codes not listed map to [`Outcome::unhandled_status`].
#[derive(Debug)]
pub struct MappingTable {
    operation: &'static str,
    rules: &'static [(u16, StatusRule)],
}

impl MappingTable {
    pub const fn new(operation: &'static str, rules: &'static [(u16, StatusRule)]) -> Self {
        Self { operation, rules }
    }

    /// Name of the operation, used in log events.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn rule_for(&self, status: u16) -> Option<StatusRule> {
        self.rules
            .iter()
            .find(|(code, _)| *code == status)
            .map(|(_, rule)| *rule)
    }

    /// Map an envelope to its outcome. Consumes the envelope.
    ///
    /// The body is decoded only by the rule that reads it; a body that does
    /// not decode yields [`DECODE_FAILURE_DETAIL`].
    pub fn dispatch<T: DeserializeOwned>(&self, envelope: CallEnvelope<T>) -> Outcome<T> {
        match self.rule_for(envelope.status) {
            Some(rule) => self.apply(rule, envelope),
            None => {
                warn!(
                    operation = self.operation,
                    status = envelope.status,
                    "unhandled bonus API response status"
                );
                Outcome::unhandled_status(envelope.status)
            }
        }
    }

    fn apply<T: DeserializeOwned>(
        &self,
        rule: StatusRule,
        envelope: CallEnvelope<T>,
    ) -> Outcome<T> {
        let status = envelope.status;
        match rule {
            StatusRule::Json => match self.payload(status, envelope.value) {
                Ok(value) => Outcome::SuccessJson(value),
                Err(outcome) => outcome,
            },
            StatusRule::RedirectToResource => {
                let location = envelope.location().map(str::to_string);
                match (self.payload(status, envelope.value), location) {
                    (Ok(value), Some(location)) => {
                        Outcome::SuccessRedirectToResource { value, location }
                    }
                    (Ok(_), None) => self.missing(status, "Location header"),
                    (Err(outcome), _) => outcome,
                }
            }
            StatusRule::Accepted => Outcome::SuccessAccepted,
            StatusRule::Validation { title, detail } => Outcome::ErrorValidation {
                title: title.to_string(),
                detail: detail.to_string(),
            },
            StatusRule::ForbiddenNotAuthorized => Outcome::ErrorForbiddenNotAuthorized,
            StatusRule::NotFound => Outcome::ErrorNotFound,
            StatusRule::Internal => {
                let problem = match envelope.value {
                    EnvelopeValue::Raw(body) => {
                        match serde_json::from_slice::<ProblemJson>(&body) {
                            Ok(problem) => Some(problem),
                            Err(e) => return self.undecodable(status, &e),
                        }
                    }
                    EnvelopeValue::Empty | EnvelopeValue::Resource(_) => None,
                };
                let detail = problem.and_then(|p| p.detail.or(p.title));
                Outcome::ErrorInternal(detail.unwrap_or_else(|| DOWNSTREAM_ERROR_DETAIL.into()))
            }
        }
    }

    /// The resource a success rule passes through.
    fn payload<T: DeserializeOwned>(
        &self,
        status: u16,
        value: EnvelopeValue<T>,
    ) -> Result<T, Outcome<T>> {
        match value {
            EnvelopeValue::Resource(value) => Ok(value),
            EnvelopeValue::Raw(body) => {
                serde_json::from_slice(&body).map_err(|e| self.undecodable(status, &e))
            }
            EnvelopeValue::Empty => Err(self.missing(status, "payload")),
        }
    }

    fn undecodable<T>(&self, status: u16, error: &serde_json::Error) -> Outcome<T> {
        warn!(
            operation = self.operation,
            status,
            error = %error,
            "bonus API response failed validation"
        );
        Outcome::internal(DECODE_FAILURE_DETAIL)
    }

    fn missing<T>(&self, status: u16, what: &str) -> Outcome<T> {
        warn!(
            operation = self.operation,
            status, "bonus API response is missing its {what}"
        );
        Outcome::internal(format!("bonus API response [{status}] is missing its {what}"))
    }
}
