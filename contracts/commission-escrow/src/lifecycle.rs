use crate::access;
use crate::claim::hash_secret;
use crate::deposit;
use crate::entities::{CommissionStatus, CommissionTerms, Parties, PartySlot, Transaction};
use crate::errors::Error;
use crate::events;
use crate::storage::{RecordStore, MAX_ID_LEN};
use soroban_sdk::{log, Address, Bytes, Env, String};

/// Picks the requested identifier or generates one.
fn resolve_id(env: &Env, id: Option<String>) -> Result<String, Error> {
    match id {
        Some(id) => {
            if id.is_empty() || id.len() > MAX_ID_LEN {
                return Err(Error::InvalidId);
            }
            if RecordStore::exists(env, &id) {
                return Err(Error::AlreadyExists);
            }
            Ok(id)
        }
        None => RecordStore::next_id(env),
    }
}

pub fn create_commission(env: &Env, admin: Address, id: Option<String>) -> Result<String, Error> {
    admin.require_auth();
    access::require_admin(env, &admin)?;

    let id = resolve_id(env, id)?;
    RecordStore::create(env, &id, &Parties::open(), &Transaction::blank(env))?;

    events::created(env, &id, None);
    Ok(id)
}

pub fn post_commission(
    env: &Env,
    owner: Address,
    terms: CommissionTerms,
    id: Option<String>,
) -> Result<String, Error> {
    owner.require_auth();
    access::admin(env)?;

    if terms.offer <= 0 || terms.fee <= 0 {
        return Err(Error::InvalidAmount);
    }

    let id = resolve_id(env, id)?;
    let transaction = Transaction::new(
        terms.offer,
        terms.fee,
        terms.duration,
        Some(hash_secret(env, &terms.secret)),
        terms.description,
        terms.title,
    );
    RecordStore::create(env, &id, &Parties::posted_by(owner.clone()), &transaction)?;

    events::created(env, &id, Some(owner));
    log!(
        env,
        "commission {} posted, offer {} fee {}",
        id.clone(),
        terms.offer,
        terms.fee
    );
    Ok(id)
}

/// Loads a commission the caller owns that is still pending.
fn pending_for_owner(env: &Env, caller: &Address, id: &String) -> Result<Transaction, Error> {
    let (parties, transaction) = RecordStore::load(env, id)?;
    access::require_owner(&parties, caller)?;
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }
    Ok(transaction)
}

fn save_edit(env: &Env, id: &String, transaction: &Transaction) {
    RecordStore::put(env, id, transaction);
    events::edited(env, id);
}

pub fn edit_reward(env: &Env, caller: Address, id: String, offer: i128) -> Result<(), Error> {
    caller.require_auth();
    let mut transaction = pending_for_owner(env, &caller, &id)?;
    if transaction.balance_owner != 0 {
        return Err(Error::AlreadyDeposited);
    }
    if offer <= 0 {
        return Err(Error::InvalidAmount);
    }
    transaction.offer = offer;
    save_edit(env, &id, &transaction);
    Ok(())
}

pub fn edit_fee(env: &Env, caller: Address, id: String, fee: i128) -> Result<(), Error> {
    caller.require_auth();
    let mut transaction = pending_for_owner(env, &caller, &id)?;
    if transaction.balance_counterparty != 0 {
        return Err(Error::AlreadyDeposited);
    }
    if fee <= 0 {
        return Err(Error::InvalidAmount);
    }
    transaction.fee = fee;
    save_edit(env, &id, &transaction);
    Ok(())
}

pub fn edit_details(
    env: &Env,
    caller: Address,
    id: String,
    description: String,
) -> Result<(), Error> {
    caller.require_auth();
    let mut transaction = pending_for_owner(env, &caller, &id)?;
    transaction.description = description;
    save_edit(env, &id, &transaction);
    Ok(())
}

pub fn edit_duration(env: &Env, caller: Address, id: String, duration: u64) -> Result<(), Error> {
    caller.require_auth();
    let mut transaction = pending_for_owner(env, &caller, &id)?;
    transaction.duration = duration;
    save_edit(env, &id, &transaction);
    Ok(())
}

pub fn edit_secret(env: &Env, caller: Address, id: String, secret: Bytes) -> Result<(), Error> {
    caller.require_auth();
    let mut transaction = pending_for_owner(env, &caller, &id)?;
    transaction.hashed_secret = Some(hash_secret(env, &secret));
    save_edit(env, &id, &transaction);
    Ok(())
}

/// Removes a pending commission and hands back whatever either side locked.
pub fn delete_commission(env: &Env, caller: Address, id: String) -> Result<(), Error> {
    caller.require_auth();
    let (parties, transaction) = RecordStore::load(env, &id)?;
    access::require_owner(&parties, &caller)?;
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }

    let counterparty = match (transaction.balance_counterparty, parties.counterparty.address()) {
        (0, _) => None,
        (_, Some(counterparty)) => Some(counterparty),
        (_, None) => return Err(Error::PartyNotSet),
    };

    RecordStore::delete(env, &id)?;

    deposit::pay_out(env, &caller, transaction.balance_owner)?;
    if let Some(counterparty) = counterparty {
        deposit::pay_out(env, &counterparty, transaction.balance_counterparty)?;
    }

    events::deleted(env, &id);
    Ok(())
}

pub fn accept_commission(env: &Env, caller: Address, id: String) -> Result<(), Error> {
    caller.require_auth();
    let (mut parties, transaction) = RecordStore::load(env, &id)?;
    if !access::is_unset_counterparty(&parties) {
        return Err(Error::AlreadySet);
    }
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }

    parties.counterparty = PartySlot::Set(caller.clone());
    RecordStore::put_parties(env, &id, &parties);

    events::joined(env, &id, &caller);
    Ok(())
}

pub fn leave_commission(env: &Env, caller: Address, id: String) -> Result<(), Error> {
    caller.require_auth();
    let (mut parties, transaction) = RecordStore::load(env, &id)?;
    access::require_counterparty(&parties, &caller)?;
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }
    if transaction.balance_counterparty != 0 {
        return Err(Error::AlreadyDeposited);
    }

    parties.counterparty = PartySlot::Unset;
    RecordStore::put_parties(env, &id, &parties);

    events::left(env, &id, &caller);
    Ok(())
}

/// Owner starts the clock once both sides have locked something.
pub fn activate_commission(env: &Env, caller: Address, id: String) -> Result<u64, Error> {
    caller.require_auth();
    let transaction = pending_for_owner(env, &caller, &id)?;
    if !transaction.both_deposited() {
        return Err(Error::AmountMismatch);
    }
    start_clock(env, &id, transaction)
}

/// Either party starts the clock once both sides locked exactly the agreed
/// terms. An unfunded slot never qualifies, even when its terms are zero.
pub fn approve_commission(env: &Env, caller: Address, id: String) -> Result<u64, Error> {
    caller.require_auth();
    let (parties, transaction) = RecordStore::load(env, &id)?;
    if !access::is_owner(&parties, &caller) && !access::is_counterparty(&parties, &caller) {
        return Err(Error::Unauthorized);
    }
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }
    if !transaction.fully_funded() {
        return Err(Error::AmountMismatch);
    }
    start_clock(env, &id, transaction)
}

fn start_clock(env: &Env, id: &String, mut transaction: Transaction) -> Result<u64, Error> {
    let epoch = env
        .ledger()
        .timestamp()
        .checked_add(transaction.duration)
        .ok_or(Error::Overflow)?;

    transaction.epoch = epoch;
    transaction.status = CommissionStatus::Active;
    RecordStore::put(env, id, &transaction);

    events::activated(env, id, epoch);
    log!(env, "commission {} active until {}", id.clone(), epoch);
    Ok(epoch)
}
