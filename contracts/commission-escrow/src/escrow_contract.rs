use crate::entities::*;
use crate::errors::*;
use crate::storage::{bump_instance, RecordStore};
use crate::{access, admin, cancel, claim, deposit, lifecycle};
use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};

#[contract]
pub struct CommissionEscrow;

#[contractimpl]
impl CommissionEscrow {
    /// Fixes the administrator and the token used for every deposit and payout.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), Error> {
        admin.require_auth();
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        bump_instance(&env);
        Ok(())
    }

    // Administrator

    pub fn reset_escrow(env: Env, admin: Address) -> Result<u32, Error> {
        bump_instance(&env);
        admin::reset_escrow(&env, admin)
    }

    pub fn create_commission(
        env: Env,
        admin: Address,
        id: Option<String>,
    ) -> Result<String, Error> {
        bump_instance(&env);
        lifecycle::create_commission(&env, admin, id)
    }

    pub fn set_commission_details(
        env: Env,
        admin: Address,
        id: String,
        details: CommissionDetails,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_details(&env, admin, id, details)
    }

    pub fn set_commission_status(
        env: Env,
        admin: Address,
        id: String,
        status: i32,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_status(&env, admin, id, status)
    }

    pub fn set_transaction_epoch(
        env: Env,
        admin: Address,
        id: String,
        epoch: u64,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_epoch(&env, admin, id, epoch)
    }

    pub fn set_transaction_duration(
        env: Env,
        admin: Address,
        id: String,
        duration: u64,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_duration(&env, admin, id, duration)
    }

    pub fn set_commission_participants(
        env: Env,
        admin: Address,
        id: String,
        owner: Address,
        counterparty: Address,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_participants(&env, admin, id, owner, counterparty)
    }

    pub fn set_transaction_owner(
        env: Env,
        admin: Address,
        id: String,
        owner: Address,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_owner(&env, admin, id, owner)
    }

    pub fn set_transaction_counterparty(
        env: Env,
        admin: Address,
        id: String,
        counterparty: Address,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_counterparty(&env, admin, id, counterparty)
    }

    /// Overwrites the amount the owner must lock.
    pub fn set_transaction_offer(
        env: Env,
        admin: Address,
        id: String,
        offer: i128,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_offer(&env, admin, id, offer)
    }

    /// Overwrites the amount the counterparty must lock.
    pub fn set_transaction_fee(
        env: Env,
        admin: Address,
        id: String,
        fee: i128,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_fee(&env, admin, id, fee)
    }

    pub fn set_transaction_hashed_secret(
        env: Env,
        admin: Address,
        id: String,
        secret: Bytes,
    ) -> Result<(), Error> {
        bump_instance(&env);
        admin::set_hashed_secret(&env, admin, id, secret)
    }

    pub fn revert_commission_funds(
        env: Env,
        admin: Address,
        id: String,
    ) -> Result<(i128, i128), Error> {
        bump_instance(&env);
        cancel::revert_funds(&env, admin, id)
    }

    // Owner

    pub fn post_commission(
        env: Env,
        owner: Address,
        terms: CommissionTerms,
        id: Option<String>,
    ) -> Result<String, Error> {
        bump_instance(&env);
        lifecycle::post_commission(&env, owner, terms, id)
    }

    pub fn edit_commission_reward(
        env: Env,
        owner: Address,
        id: String,
        offer: i128,
    ) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::edit_reward(&env, owner, id, offer)
    }

    pub fn edit_commission_fee(
        env: Env,
        owner: Address,
        id: String,
        fee: i128,
    ) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::edit_fee(&env, owner, id, fee)
    }

    pub fn edit_commission_details(
        env: Env,
        owner: Address,
        id: String,
        description: String,
    ) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::edit_details(&env, owner, id, description)
    }

    pub fn edit_commission_duration(
        env: Env,
        owner: Address,
        id: String,
        duration: u64,
    ) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::edit_duration(&env, owner, id, duration)
    }

    pub fn edit_commission_secret(
        env: Env,
        owner: Address,
        id: String,
        secret: Bytes,
    ) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::edit_secret(&env, owner, id, secret)
    }

    pub fn cancel_commission_owner(
        env: Env,
        owner: Address,
        id: String,
        consent: bool,
    ) -> Result<(), Error> {
        bump_instance(&env);
        cancel::cancel_owner(&env, owner, id, consent)
    }

    pub fn delete_commission(env: Env, owner: Address, id: String) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::delete_commission(&env, owner, id)
    }

    pub fn deposit_owner(env: Env, owner: Address, id: String, amount: i128) -> Result<(), Error> {
        bump_instance(&env);
        deposit::deposit_owner(&env, owner, id, amount)
    }

    /// Returns the claim deadline.
    pub fn activate_commission(env: Env, owner: Address, id: String) -> Result<u64, Error> {
        bump_instance(&env);
        lifecycle::activate_commission(&env, owner, id)
    }

    /// Returns the amount paid out.
    pub fn claim_owner(env: Env, owner: Address, id: String) -> Result<i128, Error> {
        bump_instance(&env);
        claim::claim_owner(&env, owner, id)
    }

    // Counterparty

    pub fn accept_commission(env: Env, counterparty: Address, id: String) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::accept_commission(&env, counterparty, id)
    }

    pub fn cancel_commission_counterparty(
        env: Env,
        counterparty: Address,
        id: String,
        consent: bool,
    ) -> Result<(), Error> {
        bump_instance(&env);
        cancel::cancel_counterparty(&env, counterparty, id, consent)
    }

    pub fn deposit_counterparty(
        env: Env,
        counterparty: Address,
        id: String,
        amount: i128,
    ) -> Result<(), Error> {
        bump_instance(&env);
        deposit::deposit_counterparty(&env, counterparty, id, amount)
    }

    pub fn leave_commission(env: Env, counterparty: Address, id: String) -> Result<(), Error> {
        bump_instance(&env);
        lifecycle::leave_commission(&env, counterparty, id)
    }

    /// Returns the amount paid out.
    pub fn claim_counterparty(
        env: Env,
        counterparty: Address,
        id: String,
        secret: Bytes,
    ) -> Result<i128, Error> {
        bump_instance(&env);
        claim::claim_counterparty(&env, counterparty, id, secret)
    }

    // Either party

    /// Returns the claim deadline.
    pub fn approve_commission(env: Env, caller: Address, id: String) -> Result<u64, Error> {
        bump_instance(&env);
        lifecycle::approve_commission(&env, caller, id)
    }

    // Reads

    pub fn get_commission(env: Env, id: String) -> Result<Transaction, Error> {
        RecordStore::get(&env, &id)
    }

    pub fn get_parties(env: Env, id: String) -> Result<Parties, Error> {
        RecordStore::parties(&env, &id)
    }

    /// Page of commission ids; at most 50 per call.
    pub fn list_commissions(env: Env, start: u32, limit: u32) -> Vec<String> {
        RecordStore::ids(&env, start, limit)
    }

    pub fn count_commissions(env: Env) -> u32 {
        RecordStore::count(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, Error> {
        access::admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, Error> {
        access::token(&env)
    }

    pub fn hash_secret(env: Env, secret: Bytes) -> BytesN<32> {
        claim::hash_secret(&env, &secret)
    }
}
