//! The shielding combinator applied to every mediated operation.

use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

use futures_util::FutureExt;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

use super::{MappingTable, Outcome, EXCEPTION_DETAIL};
use crate::{client::CallEnvelope, error::ClientError};

/// Run one downstream call and mediate its result through `table`.
///
/// `call` is invoked exactly once. A panic raised while building the call
/// future or while polling it and a transport error both become
/// [`Outcome::ErrorInternal`]; only an envelope reaches
/// [`MappingTable::dispatch`].
pub async fn shield<T, F, Fut>(table: &MappingTable, call: F) -> Outcome<T>
where
    T: DeserializeOwned,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<CallEnvelope<T>, ClientError>>,
{
    let operation = table.operation();

    let future = match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(future) => future,
        Err(payload) => {
            error!(
                operation,
                panic = panic_message(payload.as_ref()),
                "bonus API client panicked"
            );
            return Outcome::internal(EXCEPTION_DETAIL);
        }
    };

    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(Ok(envelope)) => table.dispatch(envelope),
        Ok(Err(e)) => {
            warn!(operation, error = %e, "bonus API call failed");
            Outcome::internal(EXCEPTION_DETAIL)
        }
        Err(payload) => {
            error!(
                operation,
                panic = panic_message(payload.as_ref()),
                "bonus API client panicked"
            );
            Outcome::internal(EXCEPTION_DETAIL)
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "<non-string panic payload>"
    }
}
