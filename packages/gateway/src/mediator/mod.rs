//! Response mediation: turning one downstream call into one [`Outcome`].
//!
//! Mediation is split in two:
//!
//! - [`table`]: a per-operation [`MappingTable`] from status code to
//!   [`StatusRule`], consulted by one shared dispatch routine. The matched
//!   rule decodes the body if it needs one.
//! - [`shield`]: the combinator that runs the downstream call and converts
//!   every call failure (transport, panic) into [`Outcome::ErrorInternal`].
//!
//! Together they make mediation total: every call yields exactly one
//! `Outcome`, and no error or panic escapes to the handler.

pub mod shield;
pub mod table;

pub use shield::shield;
pub use table::{MappingTable, StatusRule};

/// Detail used when the downstream call itself failed.
pub const EXCEPTION_DETAIL: &str = "Exception while calling upstream API";

/// Detail used when the downstream response could not be decoded.
pub const DECODE_FAILURE_DETAIL: &str = "Unexpected response from the bonus API";

/// Detail used when a 500 from downstream carried no problem detail.
pub const DOWNSTREAM_ERROR_DETAIL: &str = "The bonus API returned an internal error";

/// What the upstream caller should do with the result of one call.
///
/// The variant names are a compatibility contract with upstream consumers;
/// see [`Outcome::kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    /// 200 with the payload as JSON.
    SuccessJson(T),
    /// 201 with the payload and a `Location` header pointing at the resource.
    SuccessRedirectToResource { value: T, location: String },
    /// 202, no body.
    SuccessAccepted,
    /// The request conflicts with business state.
    ErrorValidation { title: String, detail: String },
    /// The caller may not perform this action.
    ErrorForbiddenNotAuthorized,
    /// The requested resource collection is absent.
    ErrorNotFound,
    /// Anything else. The detail is for diagnostics only.
    ErrorInternal(String),
}

impl<T> Outcome<T> {
    pub fn internal(detail: impl Into<String>) -> Self {
        Outcome::ErrorInternal(detail.into())
    }

    /// The outcome for a status code missing from an operation's table.
    pub fn unhandled_status(status: u16) -> Self {
        Outcome::ErrorInternal(format!("unhandled API response status [{status}]"))
    }

    /// Stable name of the variant, as exposed to upstream consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Outcome::SuccessJson(_) => "IResponseSuccessJson",
            Outcome::SuccessRedirectToResource { .. } => "IResponseSuccessRedirectToResource",
            Outcome::SuccessAccepted => "IResponseSuccessAccepted",
            Outcome::ErrorValidation { .. } => "IResponseErrorValidation",
            Outcome::ErrorForbiddenNotAuthorized => "IResponseErrorForbiddenNotAuthorized",
            Outcome::ErrorNotFound => "IResponseErrorNotFound",
            Outcome::ErrorInternal(_) => "IResponseErrorInternal",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Outcome::SuccessJson(_)
                | Outcome::SuccessRedirectToResource { .. }
                | Outcome::SuccessAccepted
        )
    }
}
