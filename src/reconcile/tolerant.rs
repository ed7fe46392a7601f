//! Tolerant call wrapper.
//!
//! Every listing and mutating forge call passes through [`tolerant`], the
//! single point where failures are captured. Callers never see an error:
//! they get the result, or `None` when the call failed in an expected or a
//! recorded way.

use std::future::Future;

use crate::errlog::ErrorLog;
use crate::forge::ForgeError;

/// Runs `op`, tolerating the given status code.
///
/// Success returns the result. A failure whose status equals `tolerated` is
/// an accepted pre-existing condition (already exists, no-op edit) and is
/// swallowed. Any other failure appends `"<action>: <detail>"` to `log`;
/// the run continues either way.
pub async fn tolerant<T, F>(
    log: &mut ErrorLog,
    action: &str,
    tolerated: Option<u16>,
    op: F,
) -> Option<T>
where
    F: Future<Output = Result<T, ForgeError>>,
{
    match op.await {
        Ok(value) => Some(value),
        Err(err) if tolerated.is_some() && err.status() == tolerated => {
            tracing::debug!(action, status = tolerated, "tolerated expected status");
            None
        }
        Err(err) => {
            log.record(action, err);
            None
        }
    }
}
