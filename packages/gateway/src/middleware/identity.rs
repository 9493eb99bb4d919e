//! Caller identity extractor.
//!
//! The gateway sits behind an authenticating proxy that resolves the
//! caller's session and forwards their identity in request headers:
//!
//! | Header | Required | Meaning |
//! |--------|----------|---------|
//! | `x-user-fiscal-code` | yes | the caller's [`FiscalCode`] |
//! | `x-user-name` | no | given name |
//! | `x-user-family-name` | no | family name |
//!
//! [`RequireUser`] turns those headers into a [`User`] or rejects the
//! request with 401.

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use bonus_api::FiscalCode;

use crate::{error::problem_response, user::User};

pub const FISCAL_CODE_HEADER: &str = "x-user-fiscal-code";
pub const NAME_HEADER: &str = "x-user-name";
pub const FAMILY_NAME_HEADER: &str = "x-user-family-name";

// ---------------------------------------------------------------------------
// Identity errors
// ---------------------------------------------------------------------------

/// An identity failure that maps to HTTP 401.
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("missing x-user-fiscal-code header")]
    Missing,

    #[error("x-user-fiscal-code header is not a valid fiscal code")]
    Invalid,
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        tracing::debug!("rejecting request: {self}");
        problem_response(StatusCode::UNAUTHORIZED, "Unauthorized", self.to_string())
    }
}

// ---------------------------------------------------------------------------
// RequireUser extractor
// ---------------------------------------------------------------------------

/// Axum extractor that requires a forwarded caller identity.
pub struct RequireUser(pub User);

impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = IdentityError;

    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let result = user_from_parts(parts);
        async move { result.map(RequireUser) }
    }
}

fn header_str<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
}

/// Build a [`User`] from the forwarded identity headers.
pub(crate) fn user_from_parts(parts: &Parts) -> Result<User, IdentityError> {
    let fiscal_code: FiscalCode = header_str(parts, FISCAL_CODE_HEADER)
        .ok_or(IdentityError::Missing)?
        .parse()
        .map_err(|_| IdentityError::Invalid)?;

    Ok(User {
        fiscal_code,
        name: header_str(parts, NAME_HEADER).map(str::to_string),
        family_name: header_str(parts, FAMILY_NAME_HEADER).map(str::to_string),
    })
}
