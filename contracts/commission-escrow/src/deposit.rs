use crate::access;
use crate::entities::CommissionStatus;
use crate::errors::Error;
use crate::events;
use crate::storage::RecordStore;
use soroban_sdk::{token, Address, Env, String};

/// Which side of the commission a deposit funds.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Owner,
    Counterparty,
}

pub fn deposit_owner(env: &Env, caller: Address, id: String, amount: i128) -> Result<(), Error> {
    deposit(env, Side::Owner, caller, id, amount)
}

pub fn deposit_counterparty(
    env: &Env,
    caller: Address,
    id: String,
    amount: i128,
) -> Result<(), Error> {
    deposit(env, Side::Counterparty, caller, id, amount)
}

fn deposit(env: &Env, side: Side, caller: Address, id: String, amount: i128) -> Result<(), Error> {
    caller.require_auth();
    let token = access::token(env)?;
    let (parties, mut transaction) = RecordStore::load(env, &id)?;

    match side {
        Side::Owner => access::require_owner(&parties, &caller)?,
        Side::Counterparty => access::require_counterparty(&parties, &caller)?,
    }
    if transaction.status != CommissionStatus::Pending {
        return Err(Error::InvalidState);
    }

    let (held, required) = match side {
        Side::Owner => (transaction.balance_owner, transaction.offer),
        Side::Counterparty => (transaction.balance_counterparty, transaction.fee),
    };
    if held != 0 {
        return Err(Error::AlreadyDeposited);
    }
    if amount != required {
        return Err(Error::AmountMismatch);
    }
    if amount <= 0 {
        return Err(Error::InvalidAmount);
    }

    token::Client::new(env, &token).transfer(&caller, &env.current_contract_address(), &amount);

    match side {
        Side::Owner => transaction.balance_owner = amount,
        Side::Counterparty => transaction.balance_counterparty = amount,
    }
    RecordStore::put(env, &id, &transaction);

    events::deposited(env, &id, &caller, amount);
    Ok(())
}

/// Sends `amount` held by the contract to `recipient`. Zero is a no-op.
pub fn pay_out(env: &Env, recipient: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token = access::token(env)?;
    token::Client::new(env, &token).transfer(&env.current_contract_address(), recipient, &amount);
    Ok(())
}
