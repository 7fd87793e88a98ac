use soroban_sdk::Env;

use crate::storage;
use crate::storage_types::CrowdfundingError;

/// Run `f` holding the ledger's exclusive lock.
///
/// The lock flag lives in instance storage. It is cleared once `f` returns,
/// whether with `Ok` or `Err`. A host failure inside `f` aborts the
/// invocation, and the host rolls the flag back with the rest of its writes,
/// so nothing touches storage while unwinding.
pub fn exclusive<T, F>(env: &Env, f: F) -> Result<T, CrowdfundingError>
where
    F: FnOnce() -> Result<T, CrowdfundingError>,
{
    if storage::is_locked(env) {
        return Err(CrowdfundingError::ReentrantCall);
    }
    storage::set_locked(env, true);
    let result = f();
    storage::set_locked(env, false);
    result
}
