//! Hash-locked, time-boxed claims.
//!
//! Before the deadline only the counterparty can take the pot, and only by
//! revealing the secret whose SHA-256 was committed when the commission was
//! posted. From the deadline on only the owner can take it. Either way the
//! commission completes and cannot be claimed twice.

use crate::access;
use crate::deposit;
use crate::entities::{CommissionStatus, Transaction};
use crate::errors::Error;
use crate::events;
use crate::storage::RecordStore;
use soroban_sdk::{log, Address, Bytes, BytesN, Env, String};

pub fn hash_secret(env: &Env, secret: &Bytes) -> BytesN<32> {
    env.crypto().sha256(secret).to_bytes()
}

pub fn verify_secret(env: &Env, transaction: &Transaction, secret: &Bytes) -> Result<(), Error> {
    match &transaction.hashed_secret {
        Some(expected) if *expected == hash_secret(env, secret) => Ok(()),
        _ => Err(Error::SecretMismatch),
    }
}

pub fn claim_counterparty(
    env: &Env,
    caller: Address,
    id: String,
    secret: Bytes,
) -> Result<i128, Error> {
    caller.require_auth();
    let (parties, transaction) = RecordStore::load(env, &id)?;
    access::require_counterparty(&parties, &caller)?;
    check_claimable(&transaction)?;

    if transaction.counterparty_has_withdrawn {
        return Err(Error::CancellationPending);
    }
    if env.ledger().timestamp() >= transaction.epoch {
        return Err(Error::DeadlineViolation);
    }
    verify_secret(env, &transaction, &secret)?;

    disburse(env, &id, transaction, &caller)
}

pub fn claim_owner(env: &Env, caller: Address, id: String) -> Result<i128, Error> {
    caller.require_auth();
    let (parties, transaction) = RecordStore::load(env, &id)?;
    access::require_owner(&parties, &caller)?;
    check_claimable(&transaction)?;

    // A pending counterparty cancellation freezes the owner's path too.
    if transaction.owner_has_withdrawn || transaction.counterparty_has_withdrawn {
        return Err(Error::CancellationPending);
    }
    if env.ledger().timestamp() < transaction.epoch {
        return Err(Error::DeadlineViolation);
    }

    disburse(env, &id, transaction, &caller)
}

fn check_claimable(transaction: &Transaction) -> Result<(), Error> {
    if transaction.status != CommissionStatus::Active {
        return Err(Error::InvalidState);
    }
    if !transaction.fully_funded() {
        return Err(Error::AmountMismatch);
    }
    Ok(())
}

fn disburse(
    env: &Env,
    id: &String,
    mut transaction: Transaction,
    recipient: &Address,
) -> Result<i128, Error> {
    let total = transaction
        .balance_owner
        .checked_add(transaction.balance_counterparty)
        .ok_or(Error::Overflow)?;

    transaction.balance_owner = 0;
    transaction.balance_counterparty = 0;
    transaction.status = CommissionStatus::Completed;
    RecordStore::put(env, id, &transaction);

    deposit::pay_out(env, recipient, total)?;

    events::claimed(env, id, recipient, total);
    log!(env, "commission {} completed, paid {}", id.clone(), total);
    Ok(total)
}
