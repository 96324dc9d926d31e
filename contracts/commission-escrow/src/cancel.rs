//! Mutual cancellation. Each party records consent to unwind; once both have,
//! the administrator returns the locked funds and the commission is reverted.

use crate::access;
use crate::deposit;
use crate::entities::CommissionStatus;
use crate::errors::Error;
use crate::events;
use crate::storage::RecordStore;
use soroban_sdk::{log, Address, Env, String};

pub fn cancel_owner(env: &Env, caller: Address, id: String, consent: bool) -> Result<(), Error> {
    caller.require_auth();
    let (parties, mut transaction) = RecordStore::load(env, &id)?;
    access::require_owner(&parties, &caller)?;
    if transaction.status.is_terminal() {
        return Err(Error::InvalidState);
    }
    if transaction.owner_has_withdrawn == consent {
        return Ok(());
    }

    transaction.owner_has_withdrawn = consent;
    RecordStore::put(env, &id, &transaction);

    events::consent(env, &id, &caller, consent);
    Ok(())
}

pub fn cancel_counterparty(
    env: &Env,
    caller: Address,
    id: String,
    consent: bool,
) -> Result<(), Error> {
    caller.require_auth();
    let (parties, mut transaction) = RecordStore::load(env, &id)?;
    access::require_counterparty(&parties, &caller)?;
    if transaction.status.is_terminal() {
        return Err(Error::InvalidState);
    }
    // Nothing is locked yet: the counterparty should leave instead.
    if !transaction.both_deposited() {
        return Err(Error::AmountMismatch);
    }
    if transaction.counterparty_has_withdrawn == consent {
        return Ok(());
    }

    transaction.counterparty_has_withdrawn = consent;
    RecordStore::put(env, &id, &transaction);

    events::consent(env, &id, &caller, consent);
    Ok(())
}

/// Returns each party's tracked balance and marks the commission reverted.
pub fn revert_funds(env: &Env, admin: Address, id: String) -> Result<(i128, i128), Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;
    let (parties, mut transaction) = RecordStore::load(env, &id)?;

    if transaction.status.is_terminal() {
        return Err(Error::InvalidState);
    }
    if !transaction.owner_has_withdrawn || !transaction.counterparty_has_withdrawn {
        return Err(Error::ConsentRequired);
    }
    let owner = parties.owner.address().ok_or(Error::PartyNotSet)?;
    let counterparty = parties.counterparty.address().ok_or(Error::PartyNotSet)?;

    let to_owner = transaction.balance_owner;
    let to_counterparty = transaction.balance_counterparty;
    transaction.balance_owner = 0;
    transaction.balance_counterparty = 0;
    transaction.status = CommissionStatus::Reverted;
    RecordStore::put(env, &id, &transaction);

    deposit::pay_out(env, &owner, to_owner)?;
    deposit::pay_out(env, &counterparty, to_counterparty)?;

    events::reverted(env, &id, to_owner, to_counterparty);
    log!(env, "commission {} reverted", id.clone());
    Ok((to_owner, to_counterparty))
}
