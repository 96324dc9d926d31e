//! Administrator escape hatches. These overwrite fields directly and only
//! check that the caller is the administrator and the record exists.

use crate::access;
use crate::claim::hash_secret;
use crate::entities::{CommissionDetails, CommissionStatus, PartySlot, Transaction};
use crate::errors::Error;
use crate::events;
use crate::storage::RecordStore;
use soroban_sdk::{log, Address, Bytes, Env, String};

/// Forgets every commission. Tokens still locked in them stay with the
/// contract; nothing is refunded, so revert or settle first.
pub fn reset_escrow(env: &Env, admin: Address) -> Result<u32, Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;

    let removed = RecordStore::reset_all(env)?;

    events::reset(env, removed);
    log!(env, "escrow reset, {} commissions removed", removed);
    Ok(removed)
}

fn correct<F>(env: &Env, admin: &Address, id: &String, mutator: F) -> Result<(), Error>
where
    F: FnOnce(&mut Transaction),
{
    admin.require_auth();
    access::require_admin(env, admin)?;
    RecordStore::update(env, id, mutator)?;
    events::corrected(env, id);
    Ok(())
}

fn non_negative(amount: i128) -> Result<i128, Error> {
    if amount < 0 {
        return Err(Error::InvalidAmount);
    }
    Ok(amount)
}

/// Overwrites both parties and all terms. Status is left as it is; use
/// `set_status` to move the commission.
pub fn set_details(
    env: &Env,
    admin: Address,
    id: String,
    details: CommissionDetails,
) -> Result<(), Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;
    let offer = non_negative(details.offer)?;
    let fee = non_negative(details.fee)?;
    let (mut parties, mut transaction) = RecordStore::load(env, &id)?;

    parties.owner = PartySlot::Set(details.owner);
    parties.counterparty = PartySlot::Set(details.counterparty);
    transaction.duration = details.duration;
    transaction.offer = offer;
    transaction.fee = fee;
    transaction.hashed_secret = Some(hash_secret(env, &details.secret));
    transaction.description = details.description;
    transaction.title = details.title;

    RecordStore::put_parties(env, &id, &parties);
    RecordStore::put(env, &id, &transaction);
    events::corrected(env, &id);
    Ok(())
}

pub fn set_status(env: &Env, admin: Address, id: String, code: i32) -> Result<(), Error> {
    let status = CommissionStatus::from_code(code).ok_or(Error::InvalidStatus)?;
    correct(env, &admin, &id, |transaction| transaction.status = status)
}

pub fn set_epoch(env: &Env, admin: Address, id: String, epoch: u64) -> Result<(), Error> {
    correct(env, &admin, &id, |transaction| transaction.epoch = epoch)
}

pub fn set_duration(env: &Env, admin: Address, id: String, duration: u64) -> Result<(), Error> {
    correct(env, &admin, &id, |transaction| transaction.duration = duration)
}

pub fn set_offer(env: &Env, admin: Address, id: String, offer: i128) -> Result<(), Error> {
    let offer = non_negative(offer)?;
    correct(env, &admin, &id, |transaction| transaction.offer = offer)
}

pub fn set_fee(env: &Env, admin: Address, id: String, fee: i128) -> Result<(), Error> {
    let fee = non_negative(fee)?;
    correct(env, &admin, &id, |transaction| transaction.fee = fee)
}

pub fn set_hashed_secret(env: &Env, admin: Address, id: String, secret: Bytes) -> Result<(), Error> {
    let hashed = hash_secret(env, &secret);
    correct(env, &admin, &id, |transaction| {
        transaction.hashed_secret = Some(hashed)
    })
}

pub fn set_owner(env: &Env, admin: Address, id: String, owner: Address) -> Result<(), Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;
    RecordStore::update_parties(env, &id, |parties| {
        parties.owner = PartySlot::Set(owner)
    })?;
    events::corrected(env, &id);
    Ok(())
}

pub fn set_counterparty(
    env: &Env,
    admin: Address,
    id: String,
    counterparty: Address,
) -> Result<(), Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;
    RecordStore::update_parties(env, &id, |parties| {
        parties.counterparty = PartySlot::Set(counterparty)
    })?;
    events::corrected(env, &id);
    Ok(())
}

/// Fills both slots of a commission that has neither party yet.
pub fn set_participants(
    env: &Env,
    admin: Address,
    id: String,
    owner: Address,
    counterparty: Address,
) -> Result<(), Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;
    let mut parties = RecordStore::parties(env, &id)?;
    if !access::is_unset_owner(&parties) || !access::is_unset_counterparty(&parties) {
        return Err(Error::AlreadySet);
    }

    parties.owner = PartySlot::Set(owner);
    parties.counterparty = PartySlot::Set(counterparty);
    RecordStore::put_parties(env, &id, &parties);
    events::corrected(env, &id);
    Ok(())
}
